use crate::types::MessageVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// A success value or an ordered, non-empty sequence of failure messages.
///
/// `Outcome<E, A>` represents a computation that either succeeded with a value
/// of type `A` or failed with one or more messages of type `E`. It supports
/// both fail-fast sequencing ([`and_then`](Outcome::and_then)) and
/// error-accumulating combination ([`apply`](Outcome::apply)), so dependent
/// and independent validations compose through the same container.
///
/// Every operation consumes the outcome and produces a new one; nothing is
/// mutated in place.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `E` and `A` do.
///
/// # Type Parameters
///
/// * `E` - The failure message type
/// * `A` - The success value type
///
/// # Variants
///
/// * `Success(A)` - Contains a successful value
/// * `Failure(MessageVec<E>)` - Contains one or more failure messages
///
/// The `Failure` payload is never empty when built through the constructors;
/// [`failure_many`](Outcome::failure_many) treats an empty message sequence as
/// a caller defect and panics.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let success = Outcome::<&str, i32>::success(42);
/// assert!(success.is_success());
///
/// let failure = Outcome::<&str, i32>::failure("out of range");
/// assert!(failure.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<E, A> {
    Success(A),
    Failure(MessageVec<E>),
}

impl<E, A> Outcome<E, A> {
    /// Creates a successful outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The success value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::success(42);
    /// assert_eq!(outcome.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Lifts a plain value into a trivially-successful outcome.
    ///
    /// This is the identity of the accumulating pipeline: start from
    /// `Outcome::pure(curried_fn)` and feed each argument through
    /// [`apply`](Outcome::apply).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::curry::curry2;
    /// use outcome_rail::Outcome;
    ///
    /// fn add(a: i32, b: i32) -> i32 {
    ///     a + b
    /// }
    ///
    /// let result = Outcome::<&str, _>::pure(curry2(add))
    ///     .apply(Outcome::success(1))
    ///     .apply(Outcome::success(2));
    /// assert_eq!(result.into_value(), Some(3));
    /// ```
    #[must_use]
    #[inline]
    pub fn pure(value: A) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome from a single message.
    ///
    /// # Arguments
    ///
    /// * `message` - The failure message to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, ()>::failure("missing field");
    /// assert!(outcome.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn failure(message: E) -> Self {
        Self::Failure(smallvec![message])
    }

    /// Creates a failed outcome from an iterator of messages.
    ///
    /// # Arguments
    ///
    /// * `messages` - An iterator yielding at least one message
    ///
    /// # Panics
    ///
    /// Panics if `messages` is empty. A failure with no messages is a
    /// contract violation in the caller, not a recoverable state.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, ()>::failure_many(["missing", "invalid"]);
    /// assert_eq!(outcome.into_errors().unwrap().len(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn failure_many<I>(messages: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let messages: MessageVec<E> = messages.into_iter().collect();
        assert!(
            !messages.is_empty(),
            "Outcome::failure_many requires at least one message"
        );
        Self::Failure(messages)
    }

    /// Bridges an `Option` into the outcome world.
    ///
    /// A present value becomes `Success`; absence becomes a single-message
    /// `Failure`. This forces the failure message to be supplied at the
    /// boundary instead of unwrapping an absent value later.
    ///
    /// # Arguments
    ///
    /// * `option` - The optional value
    /// * `message` - The message reported when the value is absent
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::parse::try_parse_i32;
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::from_option(try_parse_i32("a123"), "Invalid User ID");
    /// assert_eq!(outcome, Outcome::failure("Invalid User ID"));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_option(option: Option<A>, message: E) -> Self {
        match option {
            Some(value) => Self::Success(value),
            None => Self::failure(message),
        }
    }

    /// Wraps a plain `Result`, turning the error side into a singleton message list.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::from_result(Err::<i32, &str>("boom"));
    /// assert!(outcome.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(message) => Self::failure(message),
        }
    }

    /// Returns `true` if the outcome contains a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::success(42);
    /// assert!(outcome.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome contains failure messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::failure("nope");
    /// assert!(outcome.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Maps the success value using the provided function.
    ///
    /// If the outcome is a failure, the messages are preserved unchanged and
    /// `f` is never invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from `A` to `B`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::success(21);
    /// assert_eq!(outcome.map(|x| x * 2).into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<B, F>(self, f: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(messages) => Outcome::Failure(messages),
        }
    }

    /// Chains a dependent computation, stopping at the first failure.
    ///
    /// `f` is invoked only when the current outcome is a success; a failure
    /// short-circuits and is returned with its message sequence untouched.
    /// This is the composition to reach for when a later step needs the
    /// earlier result to even be well-defined.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next outcome from the current value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn halve(n: i32) -> Outcome<&'static str, i32> {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(4).and_then(halve).into_value(), Some(2));
    /// assert!(Outcome::success(3).and_then(halve).is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(messages) => Outcome::Failure(messages),
        }
    }

    /// Calls `op` if the outcome is a failure, otherwise returns the success.
    ///
    /// # Arguments
    ///
    /// * `op` - The recovery function, given the full message sequence
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::failure("nope");
    /// let recovered = outcome.or_else(|_messages| Outcome::success(0));
    /// assert_eq!(recovered.into_value(), Some(0));
    /// ```
    #[must_use]
    #[inline]
    pub fn or_else<F>(self, op: F) -> Outcome<E, A>
    where
        F: FnOnce(MessageVec<E>) -> Outcome<E, A>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(messages) => op(messages),
        }
    }

    /// Maps each failure message while preserving the success branch.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms messages from `E` to `G`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::failure_many(["a", "b"]);
    /// let mapped = outcome.map_err(|m| format!("Error: {m}"));
    /// assert_eq!(mapped.iter_errors().count(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn map_err<F, G>(self, f: F) -> Outcome<G, A>
    where
        F: Fn(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(messages) => Outcome::Failure(messages.into_iter().map(f).collect()),
        }
    }

    /// Total elimination: exactly one of the two handlers runs.
    ///
    /// This is the terminal dispatch of a pipeline. The library performs no
    /// output of its own; printing a success or each accumulated message is
    /// the caller's business inside the supplied handlers, and no further
    /// composition should happen past this point.
    ///
    /// # Arguments
    ///
    /// * `on_success` - Handler for the success value
    /// * `on_failure` - Handler for the full message sequence
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::failure_many(["first", "second"]);
    /// let report = outcome.fold(|v| format!("ok: {v}"), |messages| messages.join("; "));
    /// assert_eq!(report, "first; second");
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(A) -> R,
        F: FnOnce(MessageVec<E>) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(messages) => on_failure(messages),
        }
    }

    /// Converts into a `Result`, keeping the full message sequence on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::success(42);
    /// assert_eq!(outcome.to_result(), Ok(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn to_result(self) -> Result<A, MessageVec<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(messages) => Err(messages),
        }
    }

    /// Returns a reference to the success value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the message list, if any.
    ///
    /// Returns `Some(messages)` if failed, `None` if successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::failure("nope");
    /// assert_eq!(outcome.into_errors().unwrap().len(), 1);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<MessageVec<E>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(messages) => Some(messages),
        }
    }

    /// Extracts the value, if successful.
    ///
    /// Returns `Some(value)` if successful, `None` if failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::success(42);
    /// assert_eq!(outcome.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }
}
