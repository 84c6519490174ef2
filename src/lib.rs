//! A success-or-failure container with two selectable composition
//! strategies: fail-fast sequencing for dependent steps and accumulating
//! combination for independent checks that should all report at once.
//!
//! # Examples
//!
//! ## Fail-Fast Sequencing
//!
//! ```
//! use outcome_rail::Outcome;
//! use outcome_rail::parse::try_parse_i32;
//!
//! let result = Outcome::from_option(try_parse_i32("a123"), "Invalid User ID")
//!     .and_then(|user_id| {
//!         Outcome::from_option(try_parse_i32("b999"), "Invalid ID").map(|id| user_id + id)
//!     });
//!
//! // The second parse is never attempted; the first failure wins.
//! assert_eq!(result, Outcome::failure("Invalid User ID"));
//! ```
//!
//! ## Accumulating Combination
//!
//! ```
//! use outcome_rail::curry::curry2;
//! use outcome_rail::parse::try_parse_i32;
//! use outcome_rail::Outcome;
//!
//! fn combine(user_id: i32, id: i32) -> i32 {
//!     user_id + id
//! }
//!
//! let user_id = Outcome::from_option(try_parse_i32("a123"), "Invalid User ID");
//! let id = Outcome::from_option(try_parse_i32("b999"), "Invalid ID");
//!
//! let result = Outcome::pure(curry2(combine)).apply(user_id).apply(id);
//!
//! // Both parses ran; both failures are collected, left argument first.
//! assert_eq!(result, Outcome::failure_many(["Invalid User ID", "Invalid ID"]));
//! ```
//!
//! ## Validating a Collection
//!
//! ```
//! use outcome_rail::sequence::validate_each;
//! use outcome_rail::validators::check;
//! use outcome_rail::Outcome;
//!
//! let numbers = vec![2, 3, 4];
//! let result = validate_each(numbers, |n| check(|n: &i32| n % 2 == 0, "must be even")(n));
//!
//! assert_eq!(result, Outcome::failure("must be even"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result`, `Option`, and `Outcome`
pub mod convert;
/// Currying of 2- to 4-argument functions into single-argument chains
pub mod curry;
/// Shorthand macros for accumulating application
pub mod macros;
/// The `Outcome` container and its core, applicative, and iterator surface
pub mod outcome;
/// Optional-returning parse attempts for raw text input
pub mod parse;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Validation of every element of a collection with full error accumulation
pub mod sequence;
/// Extension traits bridging `Option` and `Result` into `Outcome`
pub mod traits;
/// Shared storage aliases
pub mod types;
/// Predicate-based validator combinators
pub mod validators;

/// Tracing integration for the failure path (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use outcome::Outcome;
pub use traits::*;
pub use types::MessageVec;
