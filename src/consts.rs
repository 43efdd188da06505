/// Maximum valid proleptic-Gregorian year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Minimum valid proleptic-Gregorian year (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum valid month in every supported calendar system
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for period starts
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days per week, shared by every supported system
pub const DAYS_PER_WEEK: i64 = 7;

/// Cells shown per year/decade/century page (4 x 3 grid)
pub(crate) const CELLS_PER_VIEW: i32 = 12;

/// Years covered by one decade-aligned span
pub(crate) const DECADE_SPAN: i32 = 10;
/// Years covered by one century-aligned span
pub(crate) const CENTURY_SPAN: i32 = 100;

/// Default week rows in a month view grid
pub(crate) const WEEKS_PER_MONTH_VIEW: u8 = 6;

/// Display-year offset of the Korean (Dangi) era relative to the common era
pub(crate) const KOREAN_ERA_OFFSET: i32 = 2333;
/// Display-year offset of the Taiwan (Minguo) era relative to the common era
pub(crate) const TAIWAN_ERA_OFFSET: i32 = -1911;
/// Display-year offset of the Thai Buddhist era relative to the common era
pub(crate) const THAI_BUDDHIST_ERA_OFFSET: i32 = 543;

/// First Gregorian year of the Taiwan calendar (Minguo 1)
pub(crate) const TAIWAN_MIN_GREGORIAN_YEAR: i32 = 1912;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
/// Spelling of an open range bound in the textual range form
pub const OPEN_BOUND: &str = "..";
