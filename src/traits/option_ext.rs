use crate::outcome::core::Outcome;

/// Extension trait converting an `Option` into an `Outcome` at the boundary.
///
/// Absence carries no payload, so the failure message must be supplied at
/// conversion time. This is the preferred alternative to checking presence
/// and unwrapping later.
///
/// # Examples
///
/// ```
/// use outcome_rail::parse::try_parse_i32;
/// use outcome_rail::traits::OptionOutcomeExt;
///
/// let user_id = try_parse_i32("123").into_outcome("Invalid User ID");
/// assert_eq!(user_id.into_value(), Some(123));
/// ```
pub trait OptionOutcomeExt<T> {
    /// Converts a present value to `Success` and absence to a
    /// single-message `Failure`.
    fn into_outcome<E>(self, message: E) -> Outcome<E, T>;
}

impl<T> OptionOutcomeExt<T> for Option<T> {
    #[inline]
    fn into_outcome<E>(self, message: E) -> Outcome<E, T> {
        Outcome::from_option(self, message)
    }
}
