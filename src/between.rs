use crate::CalendarDate;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_A_LEAP_YEAR, DAYS_IN_A_NON_LEAP_YEAR, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
};

/// Error for misuse of [`try_full_days_between`].
///
/// A missing operand is a caller bug, not a user-input problem, so this is a
/// dedicated type rather than a [`ParseError`](crate::ParseError) variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Both dates are required")]
pub struct MissingDateError;

/// Returns true if the given year is a leap year.
///
/// Defined for any year value, not just the supported date range, since
/// multi-year spans walk over arbitrary intermediate years.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || year % GREGORIAN_CYCLE == 0
}

/// Counts the complete calendar days strictly between two dates.
///
/// Both endpoints are excluded: identical or calendar-adjacent dates yield 0.
/// The arguments may be given in either order.
pub fn full_days_between(first: CalendarDate, second: CalendarDate) -> u32 {
    if first == second {
        return 0;
    }

    let (older, newer) = if first < second {
        (first, second)
    } else {
        (second, first)
    };

    // Within a single year the ordinal positions are directly comparable.
    if older.year() == newer.year() {
        return u32::from(newer.day_of_year() - older.day_of_year() - 1);
    }

    days_in_full_years_between(older.year(), newer.year())
        + u32::from(older.days_this_year() - older.day_of_year())
        + u32::from(newer.day_of_year() - 1)
}

/// Checked variant of [`full_days_between`] for callers holding optional dates.
///
/// # Errors
/// Returns [`MissingDateError`] if either operand is absent.
pub fn try_full_days_between(
    first: Option<CalendarDate>,
    second: Option<CalendarDate>,
) -> Result<u32, MissingDateError> {
    match (first, second) {
        (Some(first), Some(second)) => Ok(full_days_between(first, second)),
        _ => Err(MissingDateError),
    }
}

/// Sums the lengths of every calendar year strictly between the two given
/// years, each under its own leap-year status. Adjacent years contribute 0.
fn days_in_full_years_between(older_year: u16, newer_year: u16) -> u32 {
    ((older_year + 1)..newer_year)
        .map(|year| {
            u32::from(if is_leap_year(year) {
                DAYS_IN_A_LEAP_YEAR
            } else {
                DAYS_IN_A_NON_LEAP_YEAR
            })
        })
        .sum()
}
