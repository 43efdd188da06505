use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::adapter::CalendarError;
use crate::boundary::{get_last_date, get_start_date};
use crate::consts::{OPEN_BOUND, RANGE_SEPARATOR};
use crate::types::{CalendarDate, CalendarSystem, DateError, ViewGranularity};

/// An inclusive date range with optionally open ends.
///
/// An open end (`None`) represents an in-progress range selection whose
/// other bound is not chosen yet. The value is immutable; cloning a
/// collection of ranges yields instances sharing no state with the
/// source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDateRange {
    start_date: Option<CalendarDate>,
    end_date: Option<CalendarDate>,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange {
        start: CalendarDate,
        end: CalendarDate,
    },

    /// Error parsing a bound.
    #[error(transparent)]
    DateError(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl CalendarDateRange {
    /// Creates a new range; bounds left `None` are open.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` when both bounds are present
    /// and start > end.
    pub fn new(
        start_date: Option<CalendarDate>,
        end_date: Option<CalendarDate>,
    ) -> Result<Self, RangeError> {
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                return Err(RangeError::InvalidRange { start, end });
            }
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// A range with both bounds present.
    pub fn bounded(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        Self::new(Some(start), Some(end))
    }

    /// Returns the start bound, `None` when open
    pub const fn start_date(&self) -> Option<CalendarDate> {
        self.start_date
    }

    /// Returns the end bound, `None` when open
    pub const fn end_date(&self) -> Option<CalendarDate> {
        self.end_date
    }

    /// Returns both bounds as a tuple
    pub const fn dates(&self) -> (Option<CalendarDate>, Option<CalendarDate>) {
        (self.start_date, self.end_date)
    }
}

impl fmt::Display for CalendarDateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start_date {
            Some(start) => write!(f, "{start}")?,
            None => f.write_str(OPEN_BOUND)?,
        }
        write!(f, "{RANGE_SEPARATOR}")?;
        match self.end_date {
            Some(end) => write!(f, "{end}"),
            None => f.write_str(OPEN_BOUND),
        }
    }
}

impl FromStr for CalendarDateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
        if separator_count != 1 {
            return Err(RangeError::InvalidFormat(format!(
                "expected exactly one '{RANGE_SEPARATOR}' separator, found {separator_count}: {s}"
            )));
        }
        let Some(pos) = trimmed.find(RANGE_SEPARATOR) else {
            return Err(RangeError::InvalidFormat(s.to_owned()));
        };

        let parse_bound = |text: &str| -> Result<Option<CalendarDate>, RangeError> {
            let text = text.trim();
            if text == OPEN_BOUND {
                Ok(None)
            } else {
                Ok(Some(text.parse::<CalendarDate>()?))
            }
        };

        let start = parse_bound(&trimmed[..pos])?;
        let end = parse_bound(&trimmed[pos + 1..])?;
        Self::new(start, end)
    }
}

impl Serialize for CalendarDateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Inclusive containment check against raw day-level bounds.
///
/// Passing `min > max` is caller misuse; the result is unspecified and
/// the bounds are never swapped on the caller's behalf.
pub fn is_date_within_date_range(
    date: CalendarDate,
    min: CalendarDate,
    max: CalendarDate,
) -> bool {
    min <= date && date <= max
}

/// Whether two ranges overlap once their bounds are snapped to period
/// boundaries at `granularity` in `system`.
///
/// Start bounds snap to the period start and end bounds to the period
/// last date, so two day-level-disjoint ranges inside one period do
/// intercept. Open bounds are unbounded on their side. Constant-time:
/// far-apart ranges at any granularity answer `false` without iterating
/// days.
pub fn are_ranges_intercept(
    granularity: ViewGranularity,
    range_a: &CalendarDateRange,
    range_b: &CalendarDateRange,
    system: CalendarSystem,
) -> Result<bool, CalendarError> {
    let project = |range: &CalendarDateRange| -> Result<_, CalendarError> {
        let start = match range.start_date() {
            Some(date) => Some(get_start_date(date, granularity, system)?),
            None => None,
        };
        let end = match range.end_date() {
            Some(date) => Some(get_last_date(granularity, date, system)?),
            None => None,
        };
        Ok((start, end))
    };

    let (a_start, a_end) = project(range_a)?;
    let (b_start, b_end) = project(range_b)?;

    let starts_before_or_at = |start: Option<CalendarDate>, end: Option<CalendarDate>| {
        match (start, end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    };
    Ok(starts_before_or_at(a_start, b_end) && starts_before_or_at(b_start, a_end))
}

/// Deep-copies a range collection, preserving order.
///
/// The clones share no backing storage with the source; mutating one
/// collection never shows through the other. This is the seam severing
/// the host control's observable collections from engine snapshots.
pub fn clone_selected_ranges(ranges: &[CalendarDateRange]) -> Vec<CalendarDateRange> {
    ranges.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{bounded, date};

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            start: Option<CalendarDate>,
            end: Option<CalendarDate>,
            should_succeed: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                start: Some(date(2001, 1, 4)),
                end: Some(date(2001, 8, 4)),
                should_succeed: true,
                description: "valid range (start < end)",
            },
            TestCase {
                start: Some(date(2001, 8, 4)),
                end: Some(date(2001, 1, 4)),
                should_succeed: false,
                description: "invalid range (start > end)",
            },
            TestCase {
                start: Some(date(2001, 8, 4)),
                end: Some(date(2001, 8, 4)),
                should_succeed: true,
                description: "equal dates (start == end)",
            },
            TestCase {
                start: Some(date(2001, 8, 4)),
                end: None,
                should_succeed: true,
                description: "open end (selection in progress)",
            },
            TestCase {
                start: None,
                end: None,
                should_succeed: true,
                description: "fully open",
            },
        ];

        for case in &cases {
            let range = CalendarDateRange::new(case.start, case.end);
            assert_eq!(range.is_ok(), case.should_succeed, "{}", case.description);
        }
    }

    #[test]
    fn test_accessors() {
        let range = bounded(date(2001, 1, 4), date(2001, 8, 4));
        assert_eq!(range.start_date(), Some(date(2001, 1, 4)));
        assert_eq!(range.end_date(), Some(date(2001, 8, 4)));
        assert_eq!(
            range.dates(),
            (Some(date(2001, 1, 4)), Some(date(2001, 8, 4)))
        );
    }

    #[test]
    fn test_containment_inclusive_bounds() {
        let min = date(2001, 1, 4);
        let max = date(2001, 8, 4);
        assert!(is_date_within_date_range(min, min, max));
        assert!(is_date_within_date_range(max, min, max));
        assert!(is_date_within_date_range(date(2001, 5, 1), min, max));
        assert!(!is_date_within_date_range(date(2001, 1, 3), min, max));
        assert!(!is_date_within_date_range(date(2001, 8, 5), min, max));
    }

    #[test]
    fn test_intercept_month_projection() {
        let a = bounded(date(2001, 1, 4), date(2001, 8, 4));
        let b = bounded(date(2001, 2, 19), date(2001, 8, 4));
        assert!(
            are_ranges_intercept(ViewGranularity::Month, &a, &b, CalendarSystem::Gregorian)
                .unwrap()
        );
    }

    #[test]
    fn test_intercept_far_apart_spans() {
        let a = bounded(date(1700, 2, 19), date(1700, 8, 4));
        let b = bounded(date(2201, 2, 19), date(2201, 8, 4));
        for granularity in [ViewGranularity::Century, ViewGranularity::Decade] {
            assert!(
                !are_ranges_intercept(granularity, &a, &b, CalendarSystem::Gregorian).unwrap(),
                "{granularity:?}"
            );
            assert!(
                !are_ranges_intercept(granularity, &b, &a, CalendarSystem::Gregorian).unwrap(),
                "{granularity:?} swapped"
            );
        }
    }

    #[test]
    fn test_intercept_day_disjoint_same_period() {
        // Disjoint at day level but inside the same month
        let a = bounded(date(2001, 8, 1), date(2001, 8, 10));
        let b = bounded(date(2001, 8, 20), date(2001, 8, 25));
        assert!(
            are_ranges_intercept(ViewGranularity::Month, &a, &b, CalendarSystem::Gregorian)
                .unwrap()
        );
        // Same decade cell at Century granularity
        let a = bounded(date(2001, 1, 1), date(2002, 1, 1));
        let b = bounded(date(2008, 1, 1), date(2009, 1, 1));
        assert!(
            are_ranges_intercept(ViewGranularity::Century, &a, &b, CalendarSystem::Gregorian)
                .unwrap()
        );
        assert!(
            !are_ranges_intercept(ViewGranularity::Decade, &a, &b, CalendarSystem::Gregorian)
                .unwrap(),
            "different years do not intercept at Decade granularity"
        );
    }

    #[test]
    fn test_intercept_order_swap_symmetry() {
        let a = bounded(date(2001, 1, 4), date(2001, 8, 4));
        let b = bounded(date(2001, 2, 19), date(2001, 8, 4));
        for granularity in [
            ViewGranularity::Month,
            ViewGranularity::Year,
            ViewGranularity::Decade,
            ViewGranularity::Century,
        ] {
            assert_eq!(
                are_ranges_intercept(granularity, &a, &b, CalendarSystem::Gregorian).unwrap(),
                are_ranges_intercept(granularity, &b, &a, CalendarSystem::Gregorian).unwrap(),
                "{granularity:?}"
            );
        }
    }

    #[test]
    fn test_intercept_epoch_shifted_year_granularity() {
        // Jumada II 1422 spans 2001-08-20 ..= 2001-09-17: two ranges in
        // different Gregorian months share the Hijri month period.
        let a = bounded(date(2001, 8, 20), date(2001, 8, 25));
        let b = bounded(date(2001, 9, 10), date(2001, 9, 15));
        assert!(
            are_ranges_intercept(ViewGranularity::Year, &a, &b, CalendarSystem::Hijri).unwrap()
        );
        assert!(
            !are_ranges_intercept(ViewGranularity::Year, &a, &b, CalendarSystem::Gregorian)
                .unwrap(),
            "the same ranges sit in different Gregorian months"
        );
    }

    #[test]
    fn test_intercept_open_bounds() {
        let open_end = CalendarDateRange::new(Some(date(2001, 8, 1)), None).unwrap();
        let later = bounded(date(2030, 1, 1), date(2030, 6, 1));
        assert!(
            are_ranges_intercept(
                ViewGranularity::Month,
                &open_end,
                &later,
                CalendarSystem::Gregorian
            )
            .unwrap()
        );
        let earlier = bounded(date(1990, 1, 1), date(1990, 6, 1));
        assert!(
            !are_ranges_intercept(
                ViewGranularity::Month,
                &open_end,
                &earlier,
                CalendarSystem::Gregorian
            )
            .unwrap()
        );
    }

    #[test]
    fn test_clone_independence() {
        let source = vec![
            bounded(date(2001, 1, 4), date(2001, 8, 4)),
            CalendarDateRange::new(Some(date(2002, 3, 1)), None).unwrap(),
        ];
        let mut cloned = clone_selected_ranges(&source);
        assert_eq!(cloned, source);

        cloned[0] = bounded(date(1990, 1, 1), date(1990, 12, 31));
        cloned.pop();
        assert_eq!(source[0], bounded(date(2001, 1, 4), date(2001, 8, 4)));
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_display() {
        let range = bounded(date(2001, 1, 4), date(2001, 8, 4));
        assert_eq!(range.to_string(), "2001-01-04/2001-08-04");

        let open = CalendarDateRange::new(Some(date(2001, 1, 4)), None).unwrap();
        assert_eq!(open.to_string(), "2001-01-04/..");
    }

    #[test]
    fn test_from_str() {
        let range = "2001-01-04/2001-08-04".parse::<CalendarDateRange>().unwrap();
        assert_eq!(range, bounded(date(2001, 1, 4), date(2001, 8, 4)));

        let open = "../2001-08-04".parse::<CalendarDateRange>().unwrap();
        assert_eq!(open.start_date(), None);
        assert_eq!(open.end_date(), Some(date(2001, 8, 4)));
    }

    #[test]
    fn test_from_str_invalid_order() {
        assert!(matches!(
            "2001-08-04/2001-01-04".parse::<CalendarDateRange>(),
            Err(RangeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_from_str_separator_errors() {
        assert!(matches!(
            "2001-01-04".parse::<CalendarDateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2001/2002/2003".parse::<CalendarDateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let range = bounded(date(2001, 1, 4), date(2001, 8, 4));
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#""2001-01-04/2001-08-04""#);
        let parsed: CalendarDateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(range, parsed);

        let open = CalendarDateRange::new(None, Some(date(2001, 8, 4))).unwrap();
        let json = serde_json::to_string(&open).unwrap();
        assert_eq!(json, r#""../2001-08-04""#);
        let parsed: CalendarDateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(open, parsed);
    }
}
