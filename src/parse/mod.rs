//! Optional-returning parse attempts for raw text input.
//!
//! Parsing is the only place raw input enters the pipeline, and a failed
//! parse is an expected outcome, never a fault: these helpers return `None`
//! instead of raising. Semantic validation of the parsed value is the job of
//! the [`validators`](crate::validators) module.
//!
//! Prefer converting the returned `Option` to an
//! [`Outcome`](crate::Outcome) immediately via
//! [`Outcome::from_option`](crate::Outcome::from_option), which forces the
//! failure message to be chosen at the boundary.

use core::str::FromStr;

/// Attempts a typed parse of a text field.
///
/// Leading and trailing whitespace is ignored. Returns `None` on any parse
/// failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::parse::try_parse;
///
/// assert_eq!(try_parse::<i32>(" 123 "), Some(123));
/// assert_eq!(try_parse::<i32>("a123"), None);
/// ```
#[must_use]
pub fn try_parse<T: FromStr>(text: &str) -> Option<T> {
    text.trim().parse().ok()
}

/// Attempts to parse a 32-bit integer.
#[must_use]
pub fn try_parse_i32(text: &str) -> Option<i32> {
    try_parse(text)
}

/// Attempts to parse a 64-bit integer.
#[must_use]
pub fn try_parse_i64(text: &str) -> Option<i64> {
    try_parse(text)
}

/// Attempts to parse a 64-bit float.
#[must_use]
pub fn try_parse_f64(text: &str) -> Option<f64> {
    try_parse(text)
}
