//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`MessageVec`]
//! - **Currying**: [`curry2`], [`curry3`], [`curry4`]
//! - **Validators**: [`check`], [`required`], [`not_equal`], [`greater_than`]
//! - **Sequences**: [`validate_each`]
//! - **Traits**: [`OptionOutcomeExt`], [`ResultOutcomeExt`]
//! - **Macros**: [`accumulate!`](crate::accumulate)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn combine(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let result = accumulate!(
//!     combine,
//!     Some(40).into_outcome("missing a"),
//!     Some(2).into_outcome("missing b"),
//! );
//! assert_eq!(result.into_value(), Some(42));
//! ```

pub use crate::accumulate;

pub use crate::outcome::Outcome;
pub use crate::types::MessageVec;

pub use crate::curry::{curry2, curry3, curry4};
pub use crate::sequence::validate_each;
pub use crate::validators::{check, greater_than, not_equal, required};

pub use crate::traits::{OptionOutcomeExt, ResultOutcomeExt};
