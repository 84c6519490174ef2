use crate::curry::curry2;
use crate::outcome::core::Outcome;

impl<E, F> Outcome<E, F> {
    /// Applies a lifted function to a lifted argument, merging all failures.
    ///
    /// This is the defining operation of accumulating combination. The
    /// receiver holds a single-argument function (usually a curried chain
    /// seeded with [`Outcome::pure`]); `arg` holds one independently-computed
    /// argument. Unlike [`and_then`](Outcome::and_then), a failure on one
    /// side does not suppress the other: when both sides failed, the message
    /// sequences are concatenated with the receiver's messages first.
    ///
    /// Applying fewer arguments than the curried function expects leaves a
    /// partially-applied function inside `Success` - a legal, inspectable
    /// intermediate state, not an error.
    ///
    /// # Arguments
    ///
    /// * `arg` - The outcome holding the next argument
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::curry::curry3;
    /// use outcome_rail::Outcome;
    ///
    /// fn clamp(lo: i32, hi: i32, n: i32) -> i32 {
    ///     n.max(lo).min(hi)
    /// }
    ///
    /// let ok = Outcome::<&str, _>::pure(curry3(clamp))
    ///     .apply(Outcome::success(0))
    ///     .apply(Outcome::success(10))
    ///     .apply(Outcome::success(99));
    /// assert_eq!(ok.into_value(), Some(10));
    ///
    /// let merged = Outcome::<&str, _>::pure(curry3(clamp))
    ///     .apply(Outcome::failure("no lower bound"))
    ///     .apply(Outcome::success(10))
    ///     .apply(Outcome::failure("no input"));
    /// assert_eq!(
    ///     merged.into_errors().unwrap().into_vec(),
    ///     vec!["no lower bound", "no input"],
    /// );
    /// ```
    #[must_use]
    #[inline]
    pub fn apply<A, B>(self, arg: Outcome<E, A>) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, arg) {
            (Outcome::Success(f), Outcome::Success(a)) => Outcome::Success(f(a)),
            (Outcome::Failure(messages), Outcome::Success(_)) => Outcome::Failure(messages),
            (Outcome::Success(_), Outcome::Failure(messages)) => Outcome::Failure(messages),
            (Outcome::Failure(mut left), Outcome::Failure(right)) => {
                left.extend(right);
                Outcome::Failure(left)
            }
        }
    }
}

impl<E, A> Outcome<E, A> {
    /// Combines two independent outcomes into a tuple, accumulating all failures.
    ///
    /// Built on [`apply`](Outcome::apply) over a curried pairing function, so
    /// the merge order is the same: the receiver's messages come first.
    ///
    /// # Arguments
    ///
    /// * `other` - Another outcome to combine with this one
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let surname = Outcome::<&str, _>::success("Smith");
    /// let postcode = Outcome::<&str, _>::success("1424");
    /// assert_eq!(
    ///     surname.zip(postcode).into_value(),
    ///     Some(("Smith", "1424")),
    /// );
    ///
    /// let a = Outcome::<&str, i32>::failure("first");
    /// let b = Outcome::<&str, i32>::failure("second");
    /// assert_eq!(a.zip(b).into_errors().unwrap().len(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn zip<B>(self, other: Outcome<E, B>) -> Outcome<E, (A, B)> {
        Outcome::pure(curry2(|a: A, b: B| (a, b)))
            .apply(self)
            .apply(other)
    }

    /// Combines two independent outcomes with a binary function, accumulating
    /// all failures.
    ///
    /// # Arguments
    ///
    /// * `other` - Another outcome to combine with this one
    /// * `f` - The combining function, called only when both sides succeeded
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let a = Outcome::<&str, i32>::success(40);
    /// let b = Outcome::<&str, i32>::success(2);
    /// assert_eq!(a.zip_with(b, |x, y| x + y).into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn zip_with<B, C, F>(self, other: Outcome<E, B>, f: F) -> Outcome<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Combines three independent outcomes with a ternary function,
    /// accumulating all failures in argument order.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let merged = Outcome::<&str, i32>::failure("bad a").map3(
    ///     Outcome::success(2),
    ///     Outcome::failure("bad c"),
    ///     |a, b, c: i32| a + b + c,
    /// );
    /// assert_eq!(
    ///     merged.into_errors().unwrap().into_vec(),
    ///     vec!["bad a", "bad c"],
    /// );
    /// ```
    #[must_use]
    #[inline]
    pub fn map3<B, C, D, F>(self, b: Outcome<E, B>, c: Outcome<E, C>, f: F) -> Outcome<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.zip(b).zip(c).map(|((a, b), c)| f(a, b, c))
    }
}
