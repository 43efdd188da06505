//! View boundary calculus.
//!
//! A displayed page at each granularity is a grid of cells, and the
//! "period" of a date is the cell containing it: the system month for
//! Month and Year views, the system year for the Decade view, and the
//! decade aligned to the system's own year numbering for the Century
//! view. `get_start_date` / `get_last_date` bound that cell;
//! `get_view_last_date` bounds the whole rendered page including
//! trailing cells.

use crate::adapter::{self, CalendarError, SystemDate};
use crate::consts::{
    CELLS_PER_VIEW, CENTURY_SPAN, DAYS_PER_WEEK, DECADE_SPAN, DECEMBER, MIN_DAY,
    WEEKS_PER_MONTH_VIEW,
};
use crate::types::{CalendarDate, CalendarSystem, ViewGranularity, Weekday};

/// Years advanced by one page at each granularity (Month pages advance
/// by one month instead).
pub const fn get_offset(granularity: ViewGranularity) -> u16 {
    match granularity {
        ViewGranularity::Month => 0,
        ViewGranularity::Year => 1,
        ViewGranularity::Decade => 10,
        ViewGranularity::Century => 100,
    }
}

const fn align_down(year: i32, span: i32) -> i32 {
    year.div_euclid(span) * span
}

/// First date of the period containing `date` at `granularity` in
/// `system`.
///
/// Month and Year snap to the system month start (the Year view pages
/// twelve months from the display month, so its boundary is
/// month-aligned, not January 1). Decade snaps to the system year start;
/// Century to the start of the ten-year span aligned in the system's own
/// year numbering.
///
/// # Errors
/// `DateOutOfRange` when `date` or the aligned start leaves the system's
/// supported span.
pub fn get_start_date(
    date: CalendarDate,
    granularity: ViewGranularity,
    system: CalendarSystem,
) -> Result<CalendarDate, CalendarError> {
    let sys = adapter::to_system_date(date, system)?;
    match granularity {
        ViewGranularity::Month | ViewGranularity::Year => {
            adapter::from_system_date(SystemDate::new(sys.year, sys.month, MIN_DAY), system)
        }
        ViewGranularity::Decade => adapter::first_of_year(sys.year, system),
        ViewGranularity::Century => {
            adapter::first_of_year(align_down(sys.year, DECADE_SPAN), system)
        }
    }
}

/// Last date of the period containing `date`: the day immediately
/// preceding the start of the next period at `granularity`.
pub fn get_last_date(
    granularity: ViewGranularity,
    date: CalendarDate,
    system: CalendarSystem,
) -> Result<CalendarDate, CalendarError> {
    let sys = adapter::to_system_date(date, system)?;
    let closing = match granularity {
        ViewGranularity::Month | ViewGranularity::Year => {
            let last = adapter::days_in_month(system, sys.year, sys.month)?;
            SystemDate::new(sys.year, sys.month, last)
        }
        ViewGranularity::Decade => {
            let last = adapter::days_in_month(system, sys.year, DECEMBER)?;
            SystemDate::new(sys.year, DECEMBER, last)
        }
        ViewGranularity::Century => {
            let year = align_down(sys.year, DECADE_SPAN) + DECADE_SPAN - 1;
            let last = adapter::days_in_month(system, year, DECEMBER)?;
            SystemDate::new(year, DECEMBER, last)
        }
    };
    adapter::from_system_date(closing, system)
}

/// Last date actually rendered on the page showing `date`, trailing
/// cells included.
///
/// The Month grid always spans six full weeks starting from
/// `first_day_of_week`; Year pages render twelve months from the display
/// month; Decade and Century pages render twelve year or decade cells
/// from their aligned start. `first_day_of_week` replaces the ambient
/// culture value the host platform would otherwise supply.
pub fn get_view_last_date(
    granularity: ViewGranularity,
    date: CalendarDate,
    system: CalendarSystem,
    first_day_of_week: Weekday,
) -> Result<CalendarDate, CalendarError> {
    let sys = adapter::to_system_date(date, system)?;
    match granularity {
        ViewGranularity::Month => {
            let start = get_start_date(date, ViewGranularity::Month, system)?;
            let leading = (i64::from(start.weekday().number())
                - i64::from(first_day_of_week.number()))
            .rem_euclid(DAYS_PER_WEEK);
            let cells = DAYS_PER_WEEK * i64::from(WEEKS_PER_MONTH_VIEW);
            start
                .add_days(cells - leading - 1)
                .ok_or(CalendarError::DateOutOfRange { system })
        }
        ViewGranularity::Year => {
            let closing = adapter::add_system_months(
                SystemDate::new(sys.year, sys.month, MIN_DAY),
                CELLS_PER_VIEW - 1,
                system,
            )?;
            let last = adapter::days_in_month(system, closing.year, closing.month)?;
            adapter::from_system_date(SystemDate::new(closing.year, closing.month, last), system)
        }
        ViewGranularity::Decade => {
            let year = align_down(sys.year, DECADE_SPAN) + CELLS_PER_VIEW - 1;
            let last = adapter::days_in_month(system, year, DECEMBER)?;
            adapter::from_system_date(SystemDate::new(year, DECEMBER, last), system)
        }
        ViewGranularity::Century => {
            let year = align_down(sys.year, CENTURY_SPAN)
                + DECADE_SPAN * (CELLS_PER_VIEW - 1)
                + DECADE_SPAN
                - 1;
            let last = adapter::days_in_month(system, year, DECEMBER)?;
            adapter::from_system_date(SystemDate::new(year, DECEMBER, last), system)
        }
    }
}

/// True when `candidate`'s period starts strictly after `reference`'s
/// period. Dates sharing a period are never greater.
pub fn is_greater_date(
    reference: CalendarDate,
    granularity: ViewGranularity,
    candidate: CalendarDate,
    system: CalendarSystem,
) -> Result<bool, CalendarError> {
    let reference_start = get_start_date(reference, granularity, system)?;
    let candidate_start = get_start_date(candidate, granularity, system)?;
    Ok(candidate_start > reference_start)
}

/// Steps `date` by whole system months, clamping to the target month's
/// length. Navigation primitive behind Month paging.
pub fn add_months(
    date: CalendarDate,
    months: i32,
    system: CalendarSystem,
) -> Result<CalendarDate, CalendarError> {
    let sys = adapter::to_system_date(date, system)?;
    let stepped = adapter::add_system_months(sys, months, system)?;
    adapter::from_system_date(stepped, system)
}

/// Steps `date` by whole system years. Navigation primitive behind
/// Year/Decade/Century paging together with [`get_offset`].
pub fn add_years(
    date: CalendarDate,
    years: i32,
    system: CalendarSystem,
) -> Result<CalendarDate, CalendarError> {
    add_months(date, years * 12, system)
}
