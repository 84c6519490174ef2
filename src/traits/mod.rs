//! Extension traits bridging `Option` and `Result` into `Outcome`.
//!
//! These traits put the boundary conversions on the values themselves, so a
//! pipeline reads left to right instead of nesting calls:
//!
//! ```
//! use outcome_rail::parse::try_parse_i32;
//! use outcome_rail::traits::OptionOutcomeExt;
//!
//! let outcome = try_parse_i32("a123").into_outcome("Invalid User ID");
//! assert!(outcome.is_failure());
//! ```
pub mod option_ext;
pub mod result_ext;

pub use option_ext::OptionOutcomeExt;
pub use result_ext::ResultOutcomeExt;
