//! Validation of every element of a collection with full accumulation.
//!
//! Each element is validated independently; the collection is rebuilt, in its
//! original order, only when every element passed. Failures from all failing
//! elements are concatenated in element order, earlier elements first.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::sequence::validate_each;
//! use outcome_rail::validators::check;
//! use outcome_rail::Outcome;
//!
//! let result = validate_each([1, -2, -3], |n| check(|n: &i32| *n > 0, "not positive")(n));
//! assert_eq!(result.into_errors().unwrap().len(), 2);
//! ```

use crate::curry::curry2;
use crate::outcome::core::Outcome;
use crate::types::alloc_type::Vec;
use crate::types::MessageVec;

/// Validates each item independently, rebuilding the sequence only if every
/// item succeeded.
///
/// Implemented as a left fold through the accumulating applicative: the
/// accumulator starts at `Outcome::pure(Vec::new())` and every step lifts a
/// curried append, applying it first to the accumulator and then to the
/// item's outcome. Appending (rather than prepending and reversing) keeps the
/// rebuilt sequence in input order, and the accumulator-first application
/// order keeps earlier items' messages ahead of later ones.
///
/// # Arguments
///
/// * `items` - The sequence under validation
/// * `validate_one` - Per-item validator
///
/// # Examples
///
/// ```
/// use outcome_rail::sequence::validate_each;
/// use outcome_rail::Outcome;
///
/// fn positive(n: i32) -> Outcome<String, i32> {
///     if n > 0 {
///         Outcome::success(n)
///     } else {
///         Outcome::failure(format!("{n} is not positive"))
///     }
/// }
///
/// assert_eq!(validate_each([1, 2, 3], positive).into_value(), Some(vec![1, 2, 3]));
///
/// let failed = validate_each([1, -2, -3], positive);
/// assert_eq!(
///     failed.into_errors().unwrap().into_vec(),
///     vec!["-2 is not positive".to_string(), "-3 is not positive".to_string()],
/// );
/// ```
#[must_use]
pub fn validate_each<T, E, I, F>(items: I, mut validate_one: F) -> Outcome<E, Vec<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Outcome<E, T>,
{
    items
        .into_iter()
        .map(&mut validate_one)
        .fold(Outcome::pure(Vec::new()), |acc, item| {
            let append = curry2(|mut seq: Vec<T>, value: T| {
                seq.push(value);
                seq
            });
            Outcome::pure(append).apply(acc).apply(item)
        })
}

impl<E, A, C> FromIterator<Outcome<E, A>> for Outcome<E, C>
where
    C: Default + Extend<A>,
{
    /// Collects many outcomes into one, accumulating every failure.
    ///
    /// The rebuilt collection preserves iteration order; once any failure is
    /// seen, remaining successes are discarded but remaining failures are
    /// still drained so the message sequence is complete.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let items = vec![
    ///     Outcome::<&str, i32>::success(1),
    ///     Outcome::failure("bad"),
    ///     Outcome::failure("worse"),
    /// ];
    /// let combined: Outcome<&str, Vec<i32>> = items.into_iter().collect();
    /// assert_eq!(combined.into_errors().unwrap().len(), 2);
    /// ```
    fn from_iter<I: IntoIterator<Item = Outcome<E, A>>>(iter: I) -> Self {
        let mut values = C::default();
        let mut messages: MessageVec<E> = MessageVec::new();
        for item in iter {
            match item {
                Outcome::Success(value) => {
                    if messages.is_empty() {
                        values.extend(core::iter::once(value));
                    }
                }
                Outcome::Failure(errors) => messages.extend(errors),
            }
        }
        if messages.is_empty() {
            Outcome::Success(values)
        } else {
            Outcome::Failure(messages)
        }
    }
}

impl<E, A, C> FromIterator<Result<A, E>> for Outcome<E, C>
where
    C: Default + Extend<A>,
{
    /// Collects plain results into one outcome, accumulating every error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let items = vec![Ok(1), Err("bad"), Err("worse")];
    /// let combined: Outcome<&str, Vec<i32>> = items.into_iter().collect();
    /// assert_eq!(combined.into_errors().unwrap().len(), 2);
    /// ```
    fn from_iter<I: IntoIterator<Item = Result<A, E>>>(iter: I) -> Self {
        iter.into_iter().map(Outcome::from_result).collect()
    }
}
