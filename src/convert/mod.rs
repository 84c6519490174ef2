//! Conversion helpers between `Result`, `Option`, and `Outcome`.
//!
//! These adapters make it straightforward to adopt `outcome-rail`
//! incrementally by bridging plain results and optionals at the boundary and
//! flattening outcomes back into core types when interacting with external
//! APIs.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_success());
//!
//! let outcome = option_to_outcome(None::<i32>, "missing");
//! assert!(outcome.is_failure());
//! ```

use crate::outcome::core::Outcome;
use crate::types::MessageVec;
use core::iter::FusedIterator;

/// Converts an `Outcome` to a `Result`, keeping the first message if failed.
///
/// Accumulation is lost; this is the right bridge after a fail-fast chain,
/// where a single blocking message is the contract.
///
/// # Panics
///
/// Panics if the `Outcome::Failure` variant contains no messages (impossible
/// through the constructors).
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// let failed = Outcome::<&str, i32>::failure_many(["first", "second"]);
/// assert_eq!(outcome_to_result(failed), Err("first"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<E, T>) -> Result<T, E> {
    match outcome {
        Outcome::Success(value) => Ok(value),
        Outcome::Failure(messages) => {
            let message = messages
                .into_iter()
                .next()
                .expect("Outcome::Failure must contain at least one message");
            Err(message)
        }
    }
}

/// Converts a `Result` to an `Outcome` with a singleton message list on error.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Err::<i32, &str>("failed"));
/// assert!(outcome.is_failure());
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<E, T> {
    Outcome::from_result(result)
}

/// Converts an `Option` to an `Outcome`, supplying the absence message.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(option_to_outcome(Some(1), "missing"), Outcome::success(1));
/// assert_eq!(option_to_outcome(None::<i32>, "missing"), Outcome::failure("missing"));
/// ```
#[inline]
pub fn option_to_outcome<T, E>(option: Option<T>, message: E) -> Outcome<E, T> {
    Outcome::from_option(option, message)
}

/// Collects loose failure messages into a single unit `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_failures;
///
/// let outcome = collect_failures(vec!["error1", "error2"]);
/// assert!(outcome.is_failure());
///
/// let outcome = collect_failures(Vec::<&str>::new());
/// assert!(outcome.is_success());
/// ```
#[inline]
pub fn collect_failures<E, I>(messages: I) -> Outcome<E, ()>
where
    I: IntoIterator<Item = E>,
{
    let messages: MessageVec<E> = messages.into_iter().collect();
    if messages.is_empty() {
        Outcome::Success(())
    } else {
        Outcome::Failure(messages)
    }
}

/// Iterator returned by [`split_outcome`].
pub enum SplitOutcomeIter<T, E> {
    Success(Option<T>),
    Failure(<MessageVec<E> as IntoIterator>::IntoIter),
}

impl<T, E> Iterator for SplitOutcomeIter<T, E> {
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Success(value) => value.take().map(Ok),
            Self::Failure(iter) => iter.next().map(Err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Success(value) => {
                let len = usize::from(value.is_some());
                (len, Some(len))
            }
            Self::Failure(iter) => iter.size_hint(),
        }
    }
}

impl<T, E> ExactSizeIterator for SplitOutcomeIter<T, E> {}
impl<T, E> FusedIterator for SplitOutcomeIter<T, E> {}

/// Splits an `Outcome` into individual `Result` values.
///
/// A success yields a single `Ok`; a failure yields one `Err` per message,
/// in accumulation order.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::split_outcome;
/// use outcome_rail::Outcome;
///
/// let failed = Outcome::<&str, i32>::failure_many(["err1", "err2"]);
/// let results: Vec<_> = split_outcome(failed).collect();
/// assert_eq!(results, vec![Err("err1"), Err("err2")]);
/// ```
pub fn split_outcome<T, E>(outcome: Outcome<E, T>) -> SplitOutcomeIter<T, E> {
    match outcome {
        Outcome::Success(value) => SplitOutcomeIter::Success(Some(value)),
        Outcome::Failure(messages) => SplitOutcomeIter::Failure(messages.into_iter()),
    }
}
