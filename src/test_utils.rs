//! Shared constructors for tests.

use crate::range::CalendarDateRange;
use crate::types::CalendarDate;

pub(crate) fn date(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("test date must be valid")
}

pub(crate) fn bounded(start: CalendarDate, end: CalendarDate) -> CalendarDateRange {
    CalendarDateRange::bounded(start, end).expect("test range must be ordered")
}
