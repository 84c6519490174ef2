//! Conversion of multi-argument functions into single-argument chains.
//!
//! Accumulating application ([`Outcome::apply`](crate::Outcome::apply)) feeds
//! a function one argument at a time, each wrapped in its own outcome.
//! Currying turns a call like `f(a, b, c)` into three single-argument
//! applications that can each be threaded through failure accumulation.
//!
//! Arities 2 through 4 are supported as an explicitly-typed family; there is
//! no unbounded runtime polymorphism over function shape. Functions of higher
//! arity can be reduced by grouping arguments into tuples before currying.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::curry::{apply_next, curry2};
//!
//! fn combine(user_id: i32, id: i32) -> i32 {
//!     user_id + id
//! }
//!
//! let chain = curry2(combine);
//! let partial = apply_next(chain, 40);
//! assert_eq!(apply_next(partial, 2), 42);
//! ```

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

/// Curries a two-argument function.
///
/// # Examples
///
/// ```
/// use outcome_rail::curry::curry2;
///
/// let add = curry2(|a: i32, b: i32| a + b);
/// assert_eq!(add(1)(2), 3);
/// ```
pub fn curry2<'a, A, B, R>(
    f: impl FnOnce(A, B) -> R + 'a,
) -> impl FnOnce(A) -> Box<dyn FnOnce(B) -> R + 'a>
where
    A: 'a,
    B: 'a,
    R: 'a,
{
    move |a| {
        let next: Box<dyn FnOnce(B) -> R + 'a> = Box::new(move |b| f(a, b));
        next
    }
}

/// Curries a three-argument function.
///
/// # Examples
///
/// ```
/// use outcome_rail::curry::curry3;
///
/// let sum = curry3(|a: i32, b: i32, c: i32| a + b + c);
/// assert_eq!(sum(1)(2)(3), 6);
/// ```
#[allow(clippy::type_complexity)]
pub fn curry3<'a, A, B, C, R>(
    f: impl FnOnce(A, B, C) -> R + 'a,
) -> impl FnOnce(A) -> Box<dyn FnOnce(B) -> Box<dyn FnOnce(C) -> R + 'a> + 'a>
where
    A: 'a,
    B: 'a,
    C: 'a,
    R: 'a,
{
    move |a| {
        let next: Box<dyn FnOnce(B) -> Box<dyn FnOnce(C) -> R + 'a> + 'a> =
            Box::new(move |b| {
                let inner: Box<dyn FnOnce(C) -> R + 'a> = Box::new(move |c| f(a, b, c));
                inner
            });
        next
    }
}

/// Curries a four-argument function.
///
/// # Examples
///
/// ```
/// use outcome_rail::curry::curry4;
///
/// let sum = curry4(|a: i32, b: i32, c: i32, d: i32| a + b + c + d);
/// assert_eq!(sum(1)(2)(3)(4), 10);
/// ```
#[allow(clippy::type_complexity)]
pub fn curry4<'a, A, B, C, D, R>(
    f: impl FnOnce(A, B, C, D) -> R + 'a,
) -> impl FnOnce(A) -> Box<dyn FnOnce(B) -> Box<dyn FnOnce(C) -> Box<dyn FnOnce(D) -> R + 'a> + 'a> + 'a>
where
    A: 'a,
    B: 'a,
    C: 'a,
    D: 'a,
    R: 'a,
{
    move |a| {
        let next: Box<
            dyn FnOnce(B) -> Box<dyn FnOnce(C) -> Box<dyn FnOnce(D) -> R + 'a> + 'a> + 'a,
        > = Box::new(move |b| {
            let mid: Box<dyn FnOnce(C) -> Box<dyn FnOnce(D) -> R + 'a> + 'a> =
                Box::new(move |c| {
                    let inner: Box<dyn FnOnce(D) -> R + 'a> = Box::new(move |d| f(a, b, c, d));
                    inner
                });
            mid
        });
        next
    }
}

/// Feeds one argument into a curried chain.
///
/// At the final argument this produces the terminal result; before that it
/// produces the next link of the chain. Plain function-call syntax does the
/// same thing; this helper exists to name the operation in pipelines.
///
/// # Examples
///
/// ```
/// use outcome_rail::curry::{apply_next, curry3};
///
/// let chain = curry3(|a: i32, b: i32, c: i32| a * b * c);
/// let result = apply_next(apply_next(apply_next(chain, 2), 3), 4);
/// assert_eq!(result, 24);
/// ```
pub fn apply_next<A, R>(chain: impl FnOnce(A) -> R, argument: A) -> R {
    chain(argument)
}

/// Collapses a curried two-argument chain back into a plain binary function.
///
/// # Examples
///
/// ```
/// use outcome_rail::curry::{curry2, uncurry2};
///
/// let add = uncurry2(curry2(|a: i32, b: i32| a + b));
/// assert_eq!(add(1, 2), 3);
/// ```
pub fn uncurry2<A, B, R, G>(f: impl FnOnce(A) -> G) -> impl FnOnce(A, B) -> R
where
    G: FnOnce(B) -> R,
{
    move |a, b| f(a)(b)
}
