//! The [`Outcome`] container and its composition surface.
//!
//! An [`Outcome`] is either a success value or one or more failure messages.
//! Two composition strategies are provided and the caller picks between them
//! by choosing a combinator, never by syntax shape:
//!
//! - **Fail-fast sequencing** via [`Outcome::and_then`]: the first failure
//!   wins and later steps are never attempted. Use this when a later step is
//!   ill-defined without the earlier result.
//! - **Accumulating combination** via [`Outcome::apply`] (and [`Outcome::zip`]):
//!   every independent branch is evaluated and all failures are merged in
//!   left-to-right order. Use this for independent checks that should all
//!   report at once.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let a: Outcome<&str, i32> = Outcome::failure("first");
//! let b: Outcome<&str, i32> = Outcome::failure("second");
//!
//! // Fail-fast: the continuation never runs.
//! let sequenced = a.clone().and_then(|_| b.clone());
//! assert_eq!(sequenced, Outcome::failure("first"));
//!
//! // Accumulating: both failures survive.
//! let combined = a.zip(b);
//! assert_eq!(combined, Outcome::failure_many(["first", "second"]));
//! ```
pub mod apply;
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
