//! Shared helpers for unit tests.

use crate::CalendarDate;

/// Parses a known-good date literal, panicking with context on failure.
pub(crate) fn date(text: &str) -> CalendarDate {
    text.parse()
        .unwrap_or_else(|error| panic!("test date {text} failed to parse: {error}"))
}
