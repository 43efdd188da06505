//! Cell label text for the year, decade, and century grids.

use crate::adapter::{self, CalendarError};
use crate::boundary::get_start_date;
use crate::consts::{DECADE_SPAN, MAX_MONTH};
use crate::types::{CalendarDate, CalendarSystem, ViewGranularity};
use crate::view::CalendarContext;

/// Month abbreviations for the Gregorian-layout systems (index 0 unused)
const GREGORIAN_MONTH_ABBREVIATIONS: [&str; 13] = [
    "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Romanized Hijri month abbreviations, shared with Umm al-Qura
const HIJRI_MONTH_ABBREVIATIONS: [&str; 13] = [
    "", "Muh", "Saf", "Rb1", "Rb2", "Jm1", "Jm2", "Raj", "Shb", "Ram", "Shw", "Dhq", "Dhh",
];

/// Romanized Solar Hijri month abbreviations
const PERSIAN_MONTH_ABBREVIATIONS: [&str; 13] = [
    "", "Far", "Ord", "Kho", "Tir", "Mor", "Sha", "Meh", "Aba", "Aza", "Dey", "Bah", "Esf",
];

/// Three-letter abbreviation of a system month (1..=12).
pub fn month_abbreviation(system: CalendarSystem, month: u8) -> &'static str {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    match system {
        CalendarSystem::Gregorian
        | CalendarSystem::Korean
        | CalendarSystem::Taiwan
        | CalendarSystem::ThaiBuddhist => GREGORIAN_MONTH_ABBREVIATIONS[month as usize],
        CalendarSystem::Hijri | CalendarSystem::UmAlQura => {
            HIJRI_MONTH_ABBREVIATIONS[month as usize]
        }
        CalendarSystem::Persian => PERSIAN_MONTH_ABBREVIATIONS[month as usize],
    }
}

/// Language-tag override the host should format dates under.
///
/// Empty for the Gregorian-layout group, which defers to the ambient
/// locale. No text localization happens here; the tag only routes the
/// host's own formatting to the right script.
pub const fn get_language(system: CalendarSystem) -> &'static str {
    match system {
        CalendarSystem::Hijri | CalendarSystem::UmAlQura => "ar",
        CalendarSystem::Persian => "fa",
        CalendarSystem::Gregorian
        | CalendarSystem::Korean
        | CalendarSystem::Taiwan
        | CalendarSystem::ThaiBuddhist => "",
    }
}

/// Short text for a cell of the year, decade, or century grid.
///
/// Year view cells are months (three-letter abbreviation), decade view
/// cells are years (the system's own year number), and century view
/// cells are decades (`"start - end"` from the decade-aligned start, not
/// from the raw input year).
pub fn get_year_cell_text(
    date: CalendarDate,
    context: &CalendarContext,
) -> Result<String, CalendarError> {
    let system = context.system;
    match context.view {
        ViewGranularity::Year => {
            let sys = adapter::to_system_date(date, system)?;
            Ok(month_abbreviation(system, sys.month).to_owned())
        }
        ViewGranularity::Decade => {
            let sys = adapter::to_system_date(date, system)?;
            Ok(format!("{:04}", sys.year))
        }
        _ => {
            let start = get_start_date(date, ViewGranularity::Century, system)?;
            let sys = adapter::to_system_date(start, system)?;
            Ok(format!(
                "{:04} - {:04}",
                sys.year,
                sys.year + DECADE_SPAN - 1
            ))
        }
    }
}
