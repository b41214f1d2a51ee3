use crate::FuzzyDateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR,
};
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999).
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, or `None` if the value is 0 or > `MAX_YEAR`.
    pub(crate) fn new(value: u16) -> Option<Self> {
        if value > MAX_YEAR {
            return None;
        }
        NonZeroU16::new(value).map(Self)
    }

    /// Returns the year value as u16
    #[inline]
    pub(crate) const fn get(self) -> u16 {
        self.0.get()
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12).
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, or `None` if the value is 0 or > `MAX_MONTH`.
    pub(crate) fn new(value: u8) -> Option<Self> {
        if value > MAX_MONTH {
            return None;
        }
        NonZeroU8::new(value).map(Self)
    }

    /// Returns the month value as u8
    #[inline]
    pub(crate) const fn get(self) -> u8 {
        self.0.get()
    }
}

/// A day value guaranteed to be valid for a given year and month.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, or `None` if the value is 0 or past the end of
    /// the given month. The month must already be validated.
    pub(crate) fn new(value: u8, year: u16, month: u8) -> Option<Self> {
        if value > days_in_month(year, month) {
            return None;
        }
        NonZeroU8::new(value).map(Self)
    }

    /// Returns the day value as u8
    #[inline]
    pub(crate) const fn get(self) -> u8 {
        self.0.get()
    }
}

/// A calendrically valid (year, month, day) triple.
///
/// This is the storage behind every fuzzy date: the components can only be
/// created through [`ExactDate::new`], so a held value is always a real
/// calendar date and comparisons on it behave chronologically (the field
/// order drives the derived `Ord`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct ExactDate {
    year: Year,
    month: Month,
    day: Day,
}

impl ExactDate {
    /// Validates the triple: year range, month range, then day range for
    /// the month/year (including leap years).
    pub(crate) fn new(year: u16, month: u8, day: u8) -> Result<Self, FuzzyDateError> {
        let invalid = || FuzzyDateError::InvalidDate { year, month, day };
        let year_nz = Year::new(year).ok_or_else(invalid)?;
        let month_nz = Month::new(month).ok_or_else(invalid)?;
        let day_nz = Day::new(day, year, month).ok_or_else(invalid)?;
        Ok(Self {
            year: year_nz,
            month: month_nz,
            day: day_nz,
        })
    }

    /// Returns the year component
    #[inline]
    pub(crate) const fn year(self) -> u16 {
        self.year.get()
    }

    /// Returns the month component
    #[inline]
    pub(crate) const fn month(self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    #[inline]
    pub(crate) const fn day(self) -> u8 {
        self.day.get()
    }
}

// Helper functions

pub(crate) const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
