//! Fuzzy date type.
//!
//! Allows instancing date values which can have either an unknown day, or an
//! unknown day and month. In other words, a fuzzy date can represent only a
//! year, or only a year and a month.
//!
//! The missing parts of the date are stored internally as the first of the
//! month or the day, so that anything consuming the stored components keeps
//! functioning correctly. The marker-augmented string form (`2020-06-??`) is
//! the only textual representation that round-trips fuzziness; the strict
//! ISO entry points are deliberately disabled.

mod consts;
mod types;

use crate::consts::{
    DATE_SEPARATOR, DEFAULT_MARKER, ISO_DATE_LEN, JANUARY, MIN_DAY, SEPARATOR_INDICES,
};
use crate::types::ExactDate;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// A calendar date whose month and/or day may be unknown.
///
/// The unknown components are stored as 1, with a flag recording that the
/// stored value is a placeholder, so the value stays usable anywhere an
/// exact date is accepted. A date can omit its day, or its day and month;
/// it can never have a known day under an unknown month.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FuzzyDate {
    date: ExactDate,
    fuzzy_month: bool,
    fuzzy_day: bool,
}

/// Errors raised when constructing, parsing, or formatting a fuzzy date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FuzzyDateError {
    /// Month absent while day present.
    #[error("A date cannot have a fuzzy month and a defined day: ({year}, {month:?}, {day:?})")]
    InvalidCombination {
        year: u16,
        month: Option<u8>,
        day: Option<u8>,
    },

    /// The stored triple is not a real calendar date.
    #[error("Invalid date: ({year}, {month}, {day})")]
    InvalidDate { year: u16, month: u8, day: u8 },

    /// A strict ISO entry point was invoked on a fuzzy date.
    #[error("`{method}` is not supported for fuzzy dates; use `{replacement}` instead")]
    NotSupported {
        method: &'static str,
        replacement: &'static str,
    },

    /// Fuzzy ISO string is not exactly 10 characters.
    #[error("Invalid fuzzy isoformat string: {0}")]
    InvalidLength(String),

    /// Character at a separator position is not `-`.
    #[error("Invalid date separator: {0}")]
    InvalidSeparator(char),

    /// A fuzzy field's two characters differ, or the month and day markers
    /// differ from each other when both fields are fuzzy.
    #[error("Inconsistent marker usage in fuzzy date: {0}")]
    InconsistentMarker(String),

    /// Year field is not integer-parseable.
    #[error("Invalid year: {0}")]
    InvalidYear(String),

    /// Marker is not exactly one character, or is a digit.
    #[error("Invalid fuzzy marker: {0} (must be a single non-digit character)")]
    InvalidMarker(String),
}

impl FuzzyDate {
    /// Creates a new fuzzy date.
    ///
    /// An absent month or day is stored internally as 1 and flagged as
    /// fuzzy. A defined day under an absent month is rejected, since such a
    /// date cannot mean anything.
    ///
    /// # Errors
    /// Returns `FuzzyDateError::InvalidCombination` if `month` is `None`
    /// while `day` is `Some`, or `FuzzyDateError::InvalidDate` if the
    /// resulting triple is not a valid calendar date.
    pub fn new(year: u16, month: Option<u8>, day: Option<u8>) -> Result<Self, FuzzyDateError> {
        if month.is_none() && day.is_some() {
            return Err(FuzzyDateError::InvalidCombination { year, month, day });
        }

        let fuzzy_month = month.is_none();
        let fuzzy_day = day.is_none();
        let date = ExactDate::new(year, month.unwrap_or(JANUARY), day.unwrap_or(MIN_DAY))?;

        Ok(Self {
            date,
            fuzzy_month,
            fuzzy_day,
        })
    }

    /// Strict ISO parsing is disabled for fuzzy dates: it cannot represent
    /// fuzziness and would silently conflate "unknown" with "the 1st".
    ///
    /// # Errors
    /// Always returns `FuzzyDateError::NotSupported`; use
    /// [`FuzzyDate::fuzzy_from_isoformat`] instead.
    pub fn from_isoformat(_date_string: &str) -> Result<Self, FuzzyDateError> {
        Err(FuzzyDateError::NotSupported {
            method: "from_isoformat",
            replacement: "fuzzy_from_isoformat",
        })
    }

    /// Parses a fuzzy ISO string.
    ///
    /// The input is fixed-width `YYYY-MM-DD`, where the month and/or day
    /// field may instead be a doubled non-digit marker character
    /// (`2020-06-??`, `2020-##-##`). The marker is inferred from the input;
    /// when both fields are fuzzy a single consistent marker must be used
    /// across the whole string.
    ///
    /// Equivalent to parsing via [`FromStr`].
    ///
    /// # Errors
    /// Returns `InvalidLength`, `InvalidSeparator`, `InconsistentMarker` or
    /// `InvalidYear` for a malformed string, or a construction error for a
    /// well-formed string denoting an impossible date.
    pub fn fuzzy_from_isoformat(date_string: &str) -> Result<Self, FuzzyDateError> {
        let chars: Vec<char> = date_string.chars().collect();
        if chars.len() != ISO_DATE_LEN {
            return Err(FuzzyDateError::InvalidLength(date_string.to_owned()));
        }
        for idx in SEPARATOR_INDICES {
            if chars[idx] != DATE_SEPARATOR {
                return Err(FuzzyDateError::InvalidSeparator(chars[idx]));
            }
        }

        let inconsistent = || FuzzyDateError::InconsistentMarker(date_string.to_owned());

        // The day field is examined first: when both fields turn out fuzzy,
        // the month's marker has to match the day's, so the day's marker
        // must be known by the time the month field is checked.
        let dd = &chars[8..10];
        let day = match Self::parse_field(dd) {
            Some(day) => Some(day),
            None => {
                if dd[0] != dd[1] {
                    return Err(inconsistent());
                }
                None
            }
        };

        let mm = &chars[5..7];
        let month = match Self::parse_field(mm) {
            Some(month) => Some(month),
            None => {
                // A lone fuzzy month is free to use any marker; it only has
                // to agree with the day's marker when the day is fuzzy too.
                if mm[0] != mm[1] || (day.is_none() && mm[0] != dd[0]) {
                    return Err(inconsistent());
                }
                None
            }
        };

        let yyyy: String = chars[0..4].iter().collect();
        let year = yyyy
            .parse::<u16>()
            .map_err(|_| FuzzyDateError::InvalidYear(yyyy))?;

        Self::new(year, month, day)
    }

    /// Strict ISO formatting is disabled for fuzzy dates: it would render
    /// the stored placeholder 1 as if it were a known component.
    ///
    /// # Errors
    /// Always returns `FuzzyDateError::NotSupported`; use
    /// [`FuzzyDate::fuzzy_isoformat`] instead.
    pub fn isoformat(&self) -> Result<String, FuzzyDateError> {
        Err(FuzzyDateError::NotSupported {
            method: "isoformat",
            replacement: "fuzzy_isoformat",
        })
    }

    /// Formats the date as `YYYY-MM-DD`, with the marker doubled in place
    /// of any fuzzy field (`2020-06-??`).
    ///
    /// # Errors
    /// Returns `FuzzyDateError::InvalidMarker` unless `marker` is exactly
    /// one character and not a decimal digit.
    pub fn fuzzy_isoformat(&self, marker: &str) -> Result<String, FuzzyDateError> {
        let mut chars = marker.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_ascii_digit() => Ok(self.format_with(c)),
            _ => Err(FuzzyDateError::InvalidMarker(marker.to_owned())),
        }
    }

    /// Returns the year component (always known)
    #[inline]
    pub const fn year(&self) -> u16 {
        self.date.year()
    }

    /// Returns the stored month component; 1 when the month is fuzzy
    #[inline]
    pub const fn month(&self) -> u8 {
        self.date.month()
    }

    /// Returns the stored day component; 1 when the day is fuzzy
    #[inline]
    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    /// Returns true if the month was not supplied at construction
    #[inline]
    pub const fn fuzzy_month(&self) -> bool {
        self.fuzzy_month
    }

    /// Returns true if the day was not supplied at construction
    #[inline]
    pub const fn fuzzy_day(&self) -> bool {
        self.fuzzy_day
    }

    /// Returns the logical triple `(year, month, day)`, with `None` in
    /// place of a fuzzy component. Inverse of [`FuzzyDate::new`].
    pub const fn to_parts(&self) -> (u16, Option<u8>, Option<u8>) {
        let month = if self.fuzzy_month {
            None
        } else {
            Some(self.date.month())
        };
        let day = if self.fuzzy_day {
            None
        } else {
            Some(self.date.day())
        };
        (self.date.year(), month, day)
    }

    /// Helper to parse a two-character field; `None` means not numeric
    fn parse_field(field: &[char]) -> Option<u8> {
        field.iter().collect::<String>().parse::<u8>().ok()
    }

    /// Formatter shared by `fuzzy_isoformat` and `Display`; the marker has
    /// been validated by the time this is called.
    fn format_with(&self, marker: char) -> String {
        let yyyy = format!("{:04}", self.date.year());
        let mm = if self.fuzzy_month {
            marker.to_string().repeat(2)
        } else {
            format!("{:02}", self.date.month())
        };
        let dd = if self.fuzzy_day {
            marker.to_string().repeat(2)
        } else {
            format!("{:02}", self.date.day())
        };
        format!("{yyyy}{DATE_SEPARATOR}{mm}{DATE_SEPARATOR}{dd}")
    }

    /// Rank used for ordering ties on the same stored date:
    /// less precise comes first: year-only < month < full.
    #[inline]
    const fn precision_rank(&self) -> u8 {
        match (self.fuzzy_month, self.fuzzy_day) {
            (true, _) => 0,
            (false, true) => 1,
            (false, false) => 2,
        }
    }
}

impl FromStr for FuzzyDate {
    type Err = FuzzyDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::fuzzy_from_isoformat(s)
    }
}

impl TryFrom<(u16, Option<u8>, Option<u8>)> for FuzzyDate {
    type Error = FuzzyDateError;

    fn try_from(value: (u16, Option<u8>, Option<u8>)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl fmt::Display for FuzzyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(DEFAULT_MARKER))
    }
}

impl fmt::Debug for FuzzyDate {
    /// Shows the logical constructor inputs, not the stored placeholders:
    /// a fuzzy field renders as `None`, never as `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.to_parts();
        write!(f, "FuzzyDate({year}, {month:?}, {day:?})")
    }
}

impl PartialOrd for FuzzyDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FuzzyDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare the stored exact dates first…
        match self.date.cmp(&other.date) {
            Ordering::Equal => {
                // …then break ties by precision (less precise first), which
                // keeps the order total and consistent with equality.
                self.precision_rank().cmp(&other.precision_rank())
            }
            ord => ord,
        }
    }
}

impl serde::Serialize for FuzzyDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for FuzzyDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
