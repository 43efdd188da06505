//! Calendar system adapter.
//!
//! Normalizes the seven supported systems behind one set of functions:
//! month/year lengths, leap rules, and conversion to and from the
//! absolute-day axis. Dispatch is a flat match over [`CalendarSystem`];
//! each arm is a small table of rules, no trait objects involved.
//!
//! Years are always the system's own numbering — Minguo for Taiwan,
//! Buddhist era for ThaiBuddhist, Dangi for Korean, AH for Hijri and
//! UmAlQura, AP for Persian. The Gregorian-layout group shares the
//! Gregorian month table under a shifted year number; the epoch-shifted
//! group resolves through its own arithmetic.

use crate::consts::{
    JANUARY, KOREAN_ERA_OFFSET, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR, TAIWAN_ERA_OFFSET,
    TAIWAN_MIN_GREGORIAN_YEAR, THAI_BUDDHIST_ERA_OFFSET,
};
use crate::types::{self, CalendarDate, CalendarSystem, DateError};
use crate::{hijri, persian, umalqura};
use std::ops::RangeInclusive;

/// Errors raised by calendar-system conversions and view calculus.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The conversion left the supported span of the system's provider.
    /// Never silently clamped.
    #[error("date out of supported range for {system:?}")]
    DateOutOfRange { system: CalendarSystem },

    /// Error constructing the underlying date value.
    #[error(transparent)]
    DateError(#[from] DateError),
}

/// A date expressed in one calendar system's own fields.
///
/// Carries no system tag of its own; the functions producing and
/// consuming it take the [`CalendarSystem`] explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl SystemDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// Display-year offset of the Gregorian-layout systems
const fn era_offset(system: CalendarSystem) -> i32 {
    match system {
        CalendarSystem::Korean => KOREAN_ERA_OFFSET,
        CalendarSystem::Taiwan => TAIWAN_ERA_OFFSET,
        CalendarSystem::ThaiBuddhist => THAI_BUDDHIST_ERA_OFFSET,
        _ => 0,
    }
}

/// The span of system-native years the engine supports for `system`.
pub fn supported_years(system: CalendarSystem) -> RangeInclusive<i32> {
    match system {
        CalendarSystem::Gregorian => MIN_YEAR..=MAX_YEAR,
        CalendarSystem::Korean => {
            MIN_YEAR + KOREAN_ERA_OFFSET..=MAX_YEAR + KOREAN_ERA_OFFSET
        }
        CalendarSystem::Taiwan => {
            TAIWAN_MIN_GREGORIAN_YEAR + TAIWAN_ERA_OFFSET..=MAX_YEAR + TAIWAN_ERA_OFFSET
        }
        CalendarSystem::ThaiBuddhist => {
            MIN_YEAR + THAI_BUDDHIST_ERA_OFFSET..=MAX_YEAR + THAI_BUDDHIST_ERA_OFFSET
        }
        CalendarSystem::Hijri => hijri::MIN_HIJRI_YEAR..=hijri::MAX_HIJRI_YEAR,
        CalendarSystem::Persian => persian::MIN_PERSIAN_YEAR..=persian::MAX_PERSIAN_YEAR,
        CalendarSystem::UmAlQura => umalqura::MIN_UMALQURA_YEAR..=umalqura::MAX_UMALQURA_YEAR,
    }
}

fn check_year(system: CalendarSystem, year: i32) -> Result<(), CalendarError> {
    if supported_years(system).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::DateOutOfRange { system })
    }
}

/// Months per year; twelve in every supported system.
pub const fn months_in_year(_system: CalendarSystem, _year: i32) -> u8 {
    MAX_MONTH
}

/// Length of `month` of the system-native `year`.
///
/// # Errors
/// `DateOutOfRange` outside the system's supported span, `InvalidMonth`
/// for a month outside `1..=12`.
pub fn days_in_month(
    system: CalendarSystem,
    year: i32,
    month: u8,
) -> Result<u8, CalendarError> {
    check_year(system, year)?;
    if month == 0 || month > MAX_MONTH {
        return Err(DateError::InvalidMonth(month).into());
    }
    Ok(match system {
        CalendarSystem::Gregorian
        | CalendarSystem::Korean
        | CalendarSystem::Taiwan
        | CalendarSystem::ThaiBuddhist => {
            types::days_in_month(year - era_offset(system), month)
        }
        CalendarSystem::Hijri => hijri::days_in_month(year, month),
        CalendarSystem::Persian => persian::days_in_month(year, month),
        CalendarSystem::UmAlQura => umalqura::days_in_month(year, month),
    })
}

/// Length of the system-native `year` in days.
pub fn days_in_year(system: CalendarSystem, year: i32) -> Result<u16, CalendarError> {
    check_year(system, year)?;
    Ok(match system {
        CalendarSystem::Gregorian
        | CalendarSystem::Korean
        | CalendarSystem::Taiwan
        | CalendarSystem::ThaiBuddhist => types::days_in_year(year - era_offset(system)),
        CalendarSystem::Hijri => hijri::days_in_year(year),
        CalendarSystem::Persian => persian::days_in_year(year),
        CalendarSystem::UmAlQura => umalqura::days_in_year(year),
    })
}

/// Whether the system-native `year` is a leap year under its own rule.
pub fn is_leap_year(system: CalendarSystem, year: i32) -> Result<bool, CalendarError> {
    check_year(system, year)?;
    Ok(match system {
        CalendarSystem::Gregorian
        | CalendarSystem::Korean
        | CalendarSystem::Taiwan
        | CalendarSystem::ThaiBuddhist => types::is_leap_year(year - era_offset(system)),
        CalendarSystem::Hijri => hijri::is_leap_year(year),
        CalendarSystem::Persian => persian::is_leap_year(year),
        CalendarSystem::UmAlQura => umalqura::is_leap_year(year),
    })
}

/// Absolute day number of a system-native date.
///
/// # Errors
/// `DateOutOfRange` outside the supported span, `InvalidMonth` /
/// `InvalidDay` for fields that do not exist in that system year.
pub fn to_absolute_day(date: SystemDate, system: CalendarSystem) -> Result<i64, CalendarError> {
    let max_day = days_in_month(system, date.year, date.month)?;
    if date.day == 0 || date.day > max_day {
        return Err(DateError::InvalidDay {
            month: date.month,
            day: date.day,
            year: date.year,
        }
        .into());
    }
    match system {
        CalendarSystem::Gregorian
        | CalendarSystem::Korean
        | CalendarSystem::Taiwan
        | CalendarSystem::ThaiBuddhist => {
            let civil =
                CalendarDate::new(date.year - era_offset(system), date.month, date.day)?;
            Ok(civil.to_rata_die())
        }
        CalendarSystem::Hijri => Ok(hijri::to_fixed(date.year, date.month, date.day)),
        CalendarSystem::Persian => Ok(persian::to_fixed(date.year, date.month, date.day)),
        CalendarSystem::UmAlQura => Ok(umalqura::to_fixed(date.year, date.month, date.day)),
    }
}

/// System-native fields of an absolute day number.
pub fn from_absolute_day(rd: i64, system: CalendarSystem) -> Result<SystemDate, CalendarError> {
    let (year, month, day) = match system {
        CalendarSystem::Gregorian
        | CalendarSystem::Korean
        | CalendarSystem::Taiwan
        | CalendarSystem::ThaiBuddhist => {
            let civil = CalendarDate::from_rata_die(rd)
                .ok_or(CalendarError::DateOutOfRange { system })?;
            (civil.year() + era_offset(system), civil.month(), civil.day())
        }
        CalendarSystem::Hijri => hijri::from_fixed(rd),
        CalendarSystem::Persian => persian::from_fixed(rd),
        CalendarSystem::UmAlQura => umalqura::from_fixed(rd),
    };
    check_year(system, year)?;
    Ok(SystemDate { year, month, day })
}

/// The date's fields in `system`'s own calendar.
pub fn to_system_date(
    date: CalendarDate,
    system: CalendarSystem,
) -> Result<SystemDate, CalendarError> {
    from_absolute_day(date.to_rata_die(), system)
}

/// The Gregorian-axis date of system-native fields.
pub fn from_system_date(
    date: SystemDate,
    system: CalendarSystem,
) -> Result<CalendarDate, CalendarError> {
    let rd = to_absolute_day(date, system)?;
    CalendarDate::from_rata_die(rd).ok_or(CalendarError::DateOutOfRange { system })
}

/// First day of the system month containing `date`.
pub(crate) fn first_of_containing_month(
    date: CalendarDate,
    system: CalendarSystem,
) -> Result<CalendarDate, CalendarError> {
    let sys = to_system_date(date, system)?;
    from_system_date(SystemDate::new(sys.year, sys.month, MIN_DAY), system)
}

/// First day of the system-native year `year`.
pub(crate) fn first_of_year(
    year: i32,
    system: CalendarSystem,
) -> Result<CalendarDate, CalendarError> {
    from_system_date(SystemDate::new(year, JANUARY, MIN_DAY), system)
}

/// Steps a system date by whole months, clamping the day to the target
/// month's length.
pub(crate) fn add_system_months(
    date: SystemDate,
    months: i32,
    system: CalendarSystem,
) -> Result<SystemDate, CalendarError> {
    let total = date.year * 12 + i32::from(date.month) - 1 + months;
    let year = total.div_euclid(12);
    let month = (total.rem_euclid(12) + 1) as u8;
    let max_day = days_in_month(system, year, month)?;
    Ok(SystemDate::new(year, month, date.day.min(max_day)))
}
