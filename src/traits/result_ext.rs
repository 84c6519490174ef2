use crate::outcome::core::Outcome;

/// Extension trait converting a plain `Result` into an `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ResultOutcomeExt;
///
/// let outcome = Err::<i32, &str>("failed").into_outcome();
/// assert!(outcome.is_failure());
/// ```
pub trait ResultOutcomeExt<T, E> {
    /// Converts `Ok` to `Success` and `Err` to a single-message `Failure`.
    fn into_outcome(self) -> Outcome<E, T>;

    /// Pairs this result with another independent one, accumulating both
    /// errors when both fail.
    ///
    /// This is the join-style surface for combining two independent
    /// computations: both sides are always evaluated, and a double failure
    /// carries this result's message first.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::ResultOutcomeExt;
    /// use outcome_rail::Outcome;
    ///
    /// let joined = Err::<i32, &str>("Invalid User ID").accumulate_with(Err::<i32, &str>("Invalid ID"));
    /// assert_eq!(joined, Outcome::failure_many(["Invalid User ID", "Invalid ID"]));
    ///
    /// let joined = Ok::<_, &str>(40).accumulate_with(Ok::<_, &str>(2));
    /// assert_eq!(joined.map(|(a, b)| a + b).into_value(), Some(42));
    /// ```
    fn accumulate_with<U>(self, other: Result<U, E>) -> Outcome<E, (T, U)>;
}

impl<T, E> ResultOutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<E, T> {
        Outcome::from_result(self)
    }

    #[inline]
    fn accumulate_with<U>(self, other: Result<U, E>) -> Outcome<E, (T, U)> {
        Outcome::from_result(self).zip(Outcome::from_result(other))
    }
}
