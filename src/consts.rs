/// Maximum valid year (inclusive)
pub(crate) const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub(crate) const MAX_MONTH: u8 = 12;

/// First day of month, stored in place of a fuzzy day
pub(crate) const MIN_DAY: u8 = 1;

/// Month number for January, stored in place of a fuzzy month
pub(crate) const JANUARY: u8 = 1;
/// Month number for February
pub(crate) const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub(crate) const DAYS_IN_MONTH: [u8; 13] = [
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
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub(crate) const DATE_SEPARATOR: char = '-';

/// Marker used for fuzzy fields when none is given explicitly
pub(crate) const DEFAULT_MARKER: char = '?';

/// Length of a fuzzy ISO string in characters (`YYYY-MM-DD`)
pub(crate) const ISO_DATE_LEN: usize = 10;

/// Character indices of the two separators in a fuzzy ISO string
pub(crate) const SEPARATOR_INDICES: [usize; 2] = [4, 7];
