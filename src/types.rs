use crate::InvalidDate;
use crate::consts::FEBRUARY_DAYS_LEAP;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve months of the Gregorian calendar.
///
/// Each variant carries its 1-based ordinal as its discriminant and knows its
/// nominal day count. February reports its non-leap length of 28; the leap-day
/// adjustment is applied by [`Month::days`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// All months in canonical ordinal order, January first.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Looks up a month by its 1-based ordinal, returning `None` for any
    /// ordinal outside `1..=12`.
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(Self::January),
            2 => Some(Self::February),
            3 => Some(Self::March),
            4 => Some(Self::April),
            5 => Some(Self::May),
            6 => Some(Self::June),
            7 => Some(Self::July),
            8 => Some(Self::August),
            9 => Some(Self::September),
            10 => Some(Self::October),
            11 => Some(Self::November),
            12 => Some(Self::December),
            _ => None,
        }
    }

    /// Returns the 1-based ordinal (January is 1)
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the nominal day count, with February at its non-leap length
    pub const fn nominal_days(self) -> u8 {
        match self {
            Self::January
            | Self::March
            | Self::May
            | Self::July
            | Self::August
            | Self::October
            | Self::December => 31,
            Self::April | Self::June | Self::September | Self::November => 30,
            Self::February => 28,
        }
    }

    /// Returns the actual day count under the given leap-year flag.
    pub const fn days(self, leap_year: bool) -> u8 {
        if matches!(self, Self::February) && leap_year {
            FEBRUARY_DAYS_LEAP
        } else {
            self.nominal_days()
        }
    }

    /// Returns the capitalized English month name
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidDate;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal).ok_or(InvalidDate::MonthOutOfRange(ordinal))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.ordinal()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
