//! Pure date calculus for multi-view calendar controls: period
//! boundaries and paging across Month/Year/Decade/Century views, week
//! numbering, range interception, and cell labels, normalized over seven
//! calendar systems (Gregorian, Hijri, Persian, Korean, Taiwan,
//! ThaiBuddhist, UmAlQura). Every operation is a stateless function of
//! its inputs; the host control owns rendering, gestures, and locale
//! data.

mod adapter;
mod boundary;
mod consts;
mod hijri;
mod label;
mod persian;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;
mod umalqura;
mod view;
mod week;

pub use adapter::{
    CalendarError, SystemDate, days_in_month, days_in_year, from_absolute_day, from_system_date,
    is_leap_year, months_in_year, supported_years, to_absolute_day, to_system_date,
};
pub use boundary::{
    add_months, add_years, get_last_date, get_offset, get_start_date, get_view_last_date,
    is_greater_date,
};
pub use consts::*;
pub use label::{get_language, get_year_cell_text, month_abbreviation};
pub use range::{
    CalendarDateRange, RangeError, are_ranges_intercept, clone_selected_ranges,
    is_date_within_date_range,
};
pub use types::{CalendarDate, CalendarSystem, DateError, ViewGranularity, Weekday};
pub use view::{CalendarContext, is_interactable_date};
pub use week::{
    MonthViewConfig, get_current_months_weeks, get_number_of_weeks, get_week_number,
    get_week_number_of_year,
};
