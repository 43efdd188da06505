//! Week numbering.
//!
//! Two unrelated week numbers come out of here and callers must not
//! conflate them: [`get_week_number`] counts weeks inside the display
//! month of any calendar system, while [`get_week_number_of_year`] is the
//! ISO-8601 week of the Gregorian year backing a display label.

use crate::adapter::{self, CalendarError, SystemDate};
use crate::consts::{DAYS_PER_WEEK, MIN_DAY, WEEKS_PER_MONTH_VIEW};
use crate::types::{self, CalendarDate, CalendarSystem, Weekday};
use serde::{Deserialize, Serialize};

/// Month-view grid settings owned by the host control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthViewConfig {
    /// Week rows rendered by the month grid (1..=6)
    pub number_of_weeks: u8,
    pub first_day_of_week: Weekday,
}

impl Default for MonthViewConfig {
    fn default() -> Self {
        Self {
            number_of_weeks: WEEKS_PER_MONTH_VIEW,
            first_day_of_week: Weekday::Sunday,
        }
    }
}

/// 1-based week of `date` within its system month.
///
/// Weeks are counted from the first day of the month; a partial leading
/// week (the month starting mid-week under `first_day_of_week`) counts
/// as week 1. A 7-day span split by the month boundary gets one number
/// on each side, never a shared one.
pub fn get_week_number(
    system: CalendarSystem,
    date: CalendarDate,
    first_day_of_week: Weekday,
) -> Result<u32, CalendarError> {
    let month_start = adapter::first_of_containing_month(date, system)?;
    let leading = (i64::from(month_start.weekday().number())
        - i64::from(first_day_of_week.number()))
    .rem_euclid(DAYS_PER_WEEK);
    let elapsed = date.to_rata_die() - month_start.to_rata_die();
    Ok(((leading + elapsed) / DAYS_PER_WEEK + 1) as u32)
}

/// ISO-8601 week of year: Monday-first, week 1 contains the year's first
/// Thursday. Gregorian-only; it backs a display label and does not vary
/// by calendar system.
pub fn get_week_number_of_year(date: CalendarDate) -> u32 {
    let doy = i64::from(date.day_of_year());
    let iso_weekday = i64::from(date.weekday().iso_number());
    let week = (doy - iso_weekday + 10).div_euclid(DAYS_PER_WEEK);
    if week < 1 {
        iso_weeks_in_year(date.year() - 1)
    } else if week > i64::from(iso_weeks_in_year(date.year())) {
        1
    } else {
        week as u32
    }
}

/// 52 or 53: a year has 53 ISO weeks iff it starts on a Thursday, or on
/// a Wednesday when leap.
fn iso_weeks_in_year(year: i32) -> u32 {
    let y = i64::from(year) - 1;
    let jan1 = 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + 1;
    let weekday = Weekday::from_rata_die(jan1);
    if weekday == Weekday::Thursday
        || (types::is_leap_year(year) && weekday == Weekday::Wednesday)
    {
        53
    } else {
        52
    }
}

/// Week rows the month grid is configured to render.
pub fn get_number_of_weeks(config: &MonthViewConfig) -> u8 {
    config.number_of_weeks
}

/// Week rows the current month actually occupies on the rendered page.
///
/// Equals the configured row count except on a full six-week grid with
/// trailing/leading dates hidden, where the grid shrinks to the rows
/// spanned by the display month (the month of the middle visible date).
pub fn get_current_months_weeks(
    config: &MonthViewConfig,
    visible_dates: &[CalendarDate],
    system: CalendarSystem,
    show_trailing_and_leading_dates: bool,
) -> Result<u8, CalendarError> {
    if show_trailing_and_leading_dates || config.number_of_weeks != WEEKS_PER_MONTH_VIEW {
        return Ok(get_number_of_weeks(config));
    }
    let Some(&middle) = visible_dates.get(visible_dates.len() / 2) else {
        return Ok(get_number_of_weeks(config));
    };
    let sys = adapter::to_system_date(middle, system)?;
    let month_start =
        adapter::from_system_date(SystemDate::new(sys.year, sys.month, MIN_DAY), system)?;
    let leading = (i64::from(month_start.weekday().number())
        - i64::from(config.first_day_of_week.number()))
    .rem_euclid(DAYS_PER_WEEK);
    let length = i64::from(adapter::days_in_month(system, sys.year, sys.month)?);
    Ok((leading + length).div_ceil(DAYS_PER_WEEK) as u8)
}
