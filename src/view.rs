//! Interaction context shared with the host control.

use crate::adapter;
use crate::consts::WEEKS_PER_MONTH_VIEW;
use crate::types::{CalendarDate, CalendarSystem, ViewGranularity};
use serde::{Deserialize, Serialize};

/// What the control is currently displaying.
///
/// Passed into cell labeling and interactivity checks instead of being
/// read from control state, keeping the engine free of ambient
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarContext {
    pub view: ViewGranularity,
    pub system: CalendarSystem,
    /// Whether cells of adjacent periods are rendered on the page
    pub show_trailing_and_leading_dates: bool,
}

impl CalendarContext {
    pub const fn new(view: ViewGranularity, system: CalendarSystem) -> Self {
        Self {
            view,
            system,
            show_trailing_and_leading_dates: true,
        }
    }
}

/// Whether a cell may receive selection input.
///
/// A date is interactable when it lies inside the rendered window and is
/// not disabled. On a full six-week month grid with trailing/leading
/// dates hidden, only cells of the display month (the month of the
/// middle visible date) accept input. Selection-mode legality stays with
/// the caller.
pub fn is_interactable_date(
    date: CalendarDate,
    disabled_dates: &[CalendarDate],
    visible_dates: &[CalendarDate],
    context: &CalendarContext,
    number_of_weeks: u8,
) -> bool {
    if disabled_dates.contains(&date) {
        return false;
    }
    let (Some(&first), Some(&last)) = (visible_dates.first(), visible_dates.last()) else {
        return false;
    };
    if !(first..=last).contains(&date) {
        return false;
    }

    let hides_other_months = context.view == ViewGranularity::Month
        && !context.show_trailing_and_leading_dates
        && number_of_weeks == WEEKS_PER_MONTH_VIEW;
    if hides_other_months {
        let Some(&middle) = visible_dates.get(visible_dates.len() / 2) else {
            return false;
        };
        let Ok(sys) = adapter::to_system_date(date, context.system) else {
            return false;
        };
        let Ok(display) = adapter::to_system_date(middle, context.system) else {
            return false;
        };
        return (sys.year, sys.month) == (display.year, display.month);
    }
    true
}
