//! Shared storage aliases for accumulated failure messages.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::MessageVec;
//!
//! let mut messages: MessageVec<&str> = MessageVec::new();
//! messages.push("Invalid User ID");
//! messages.push("Invalid ID");
//! assert_eq!(messages.len(), 2);
//! ```
use smallvec::SmallVec;

#[doc(hidden)]
pub mod alloc_type;

/// Ordered failure-message storage, backed by `SmallVec`.
///
/// Inline storage holds up to 2 elements, so the single-message result of a
/// validator combinator and the common two-sided merge of
/// [`Outcome::apply`](crate::Outcome::apply) stay off the heap.
pub type MessageVec<E> = SmallVec<[E; 2]>;
