//! Solar Hijri (Persian) calendar arithmetic.
//!
//! Thirty-three-year arithmetic cycle with eight leap years, using the
//! `(25 * year + 11) mod 33 < 8` rule. The first six months have 31 days,
//! the next five 30, and Esfand 29 (30 in leap years). Epoch: 1 Farvardin
//! AP 1, matching Nowruz of Gregorian year 622.

/// Rata die of 1 Farvardin, AP 1
pub(crate) const PERSIAN_EPOCH: i64 = 226_895;

/// First supported Persian year
pub(crate) const MIN_PERSIAN_YEAR: i32 = 1;

/// Last Persian year that still fits the Gregorian year-9999 axis
pub(crate) const MAX_PERSIAN_YEAR: i32 = 9378;

const COMMON_YEAR_DAYS: i64 = 365;
const CYCLE_YEARS: i64 = 33;
const CYCLE_DAYS: i64 = 12_053;
const FIRST_SHORT_MONTH: u8 = 7;

pub(crate) const fn is_leap_year(year: i32) -> bool {
    (25 * year as i64 + 11).rem_euclid(CYCLE_YEARS) < 8
}

pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
    if month < FIRST_SHORT_MONTH {
        31
    } else if month < 12 {
        30
    } else if is_leap_year(year) {
        30
    } else {
        29
    }
}

pub(crate) const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days preceding `month` within any year
const fn days_before_month(month: u8) -> i64 {
    let m = month as i64;
    if month < FIRST_SHORT_MONTH {
        31 * (m - 1)
    } else {
        186 + 30 * (m - 7)
    }
}

/// Leap years strictly before `year`
const fn leaps_before(year: i32) -> i64 {
    let completed = year as i64 - 1;
    let cycles = completed.div_euclid(CYCLE_YEARS);
    let rem = completed.rem_euclid(CYCLE_YEARS) as i32;
    let mut in_partial = 0;
    let mut residue = 1;
    while residue <= rem {
        if is_leap_year(residue) {
            in_partial += 1;
        }
        residue += 1;
    }
    cycles * 8 + in_partial
}

/// Rata die of a Persian date. Inputs must already be field-valid.
pub(crate) const fn to_fixed(year: i32, month: u8, day: u8) -> i64 {
    PERSIAN_EPOCH - 1
        + (year as i64 - 1) * COMMON_YEAR_DAYS
        + leaps_before(year)
        + days_before_month(month)
        + day as i64
}

/// Persian (year, month, day) of a rata die.
pub(crate) fn from_fixed(rd: i64) -> (i32, u8, u8) {
    let days = rd - PERSIAN_EPOCH;
    let mut year = ((CYCLE_YEARS * days).div_euclid(CYCLE_DAYS)) as i32 + 1;
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
