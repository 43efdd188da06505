//! Umm al-Qura calendar arithmetic.
//!
//! Arithmetical rendering of the Saudi civil calendar: the same month
//! layout and era day-count as the tabular Islamic calendar, with the
//! alternate intercalation set {2, 5, 7, 10, 13, 15, 18, 21, 24, 26, 29}.
//! The exact observational month table belongs to the host platform's
//! calendar provider; this module covers the provider's conventional span
//! AH 1318..=1500 (beginning 1900-04-30) and conversions outside it
//! surface `DateOutOfRange` in the adapter.

use crate::hijri::HIJRI_EPOCH;

/// First supported Umm al-Qura year
pub(crate) const MIN_UMALQURA_YEAR: i32 = 1318;

/// Last supported Umm al-Qura year
pub(crate) const MAX_UMALQURA_YEAR: i32 = 1500;

const COMMON_YEAR_DAYS: i64 = 354;
const CYCLE_YEARS: i64 = 30;
const CYCLE_DAYS: i64 = 10_631;

pub(crate) const fn is_leap_year(year: i32) -> bool {
    (11 * year as i64 + 15).rem_euclid(CYCLE_YEARS) < 11
}

pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
    if month % 2 == 1 || (month == 12 && is_leap_year(year)) {
        30
    } else {
        29
    }
}

pub(crate) const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 355 } else { 354 }
}

/// Days preceding `month` within a common year
const fn days_before_month(month: u8) -> i64 {
    29 * (month as i64 - 1) + (month as i64) / 2
}

/// Rata die of an Umm al-Qura date. Inputs must already be field-valid.
pub(crate) const fn to_fixed(year: i32, month: u8, day: u8) -> i64 {
    let y = year as i64;
    HIJRI_EPOCH - 1
        + (y - 1) * COMMON_YEAR_DAYS
        + (11 * y + 4).div_euclid(CYCLE_YEARS)
        + days_before_month(month)
        + day as i64
}

/// Umm al-Qura (year, month, day) of a rata die.
pub(crate) fn from_fixed(rd: i64) -> (i32, u8, u8) {
    let days = rd - HIJRI_EPOCH;
    let mut year = ((CYCLE_YEARS * days + 10_646).div_euclid(CYCLE_DAYS)) as i32;
    while rd < to_fixed(year, 1, 1) {
        year -= 1;
    }
    while rd >= to_fixed(year + 1, 1, 1) {
        year += 1;
    }

    let mut remaining = rd - to_fixed(year, 1, 1);
    let mut month = 1u8;
    while remaining >= i64::from(days_in_month(year, month)) {
        remaining -= i64::from(days_in_month(year, month));
        month += 1;
    }
    (year, month, remaining as u8 + 1)
}
