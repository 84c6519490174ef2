//! Shorthand macros for accumulating application.
//!
//! [`accumulate!`](crate::accumulate) removes the currying boilerplate from
//! the common case of applying one plain function to several
//! independently-validated arguments. Arities 2 through 4 are supported,
//! matching the [`curry`](crate::curry) family.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{accumulate, Outcome};
//!
//! fn combine(user_id: i32, id: i32) -> i32 {
//!     user_id + id
//! }
//!
//! let result = accumulate!(
//!     combine,
//!     Outcome::<&str, i32>::failure("Invalid User ID"),
//!     Outcome::<&str, i32>::failure("Invalid ID"),
//! );
//! assert_eq!(result, Outcome::failure_many(["Invalid User ID", "Invalid ID"]));
//! ```

/// Applies a plain 2- to 4-argument function across that many `Outcome`
/// arguments with accumulating semantics.
///
/// The function is curried, lifted with [`Outcome::pure`](crate::Outcome::pure)
/// and applied left to right, so failures merge in argument order.
///
/// # Examples
///
/// ```
/// use outcome_rail::{accumulate, Outcome};
///
/// fn volume(x: i32, y: i32, z: i32) -> i32 {
///     x * y * z
/// }
///
/// let result = accumulate!(
///     volume,
///     Outcome::<&str, i32>::success(2),
///     Outcome::<&str, i32>::success(3),
///     Outcome::<&str, i32>::success(4),
/// );
/// assert_eq!(result.into_value(), Some(24));
/// ```
#[macro_export]
macro_rules! accumulate {
    ($f:expr, $a:expr, $b:expr $(,)?) => {
        $crate::Outcome::pure($crate::curry::curry2($f))
            .apply($a)
            .apply($b)
    };
    ($f:expr, $a:expr, $b:expr, $c:expr $(,)?) => {
        $crate::Outcome::pure($crate::curry::curry3($f))
            .apply($a)
            .apply($b)
            .apply($c)
    };
    ($f:expr, $a:expr, $b:expr, $c:expr, $d:expr $(,)?) => {
        $crate::Outcome::pure($crate::curry::curry4($f))
            .apply($a)
            .apply($b)
            .apply($c)
            .apply($d)
    };
}
