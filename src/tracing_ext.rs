//! Tracing integration for the failure path.
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! The library itself never performs output; [`Outcome::traced`] is an
//! opt-in tap that emits one `warn` event per accumulated message and hands
//! the outcome back unchanged, so it can sit anywhere in a pipeline.

use crate::outcome::core::Outcome;
use core::fmt::Display;

impl<E: Display, A> Outcome<E, A> {
    /// Emits a `tracing` warning for every accumulated failure message.
    ///
    /// Successful outcomes emit nothing. Returns the outcome unchanged.
    ///
    /// # Arguments
    ///
    /// * `context` - A short label identifying the pipeline stage
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, i32>::failure("Invalid User ID")
    ///     .traced("request validation");
    /// assert!(outcome.is_failure());
    /// ```
    #[must_use]
    pub fn traced(self, context: &str) -> Self {
        if let Outcome::Failure(messages) = &self {
            for message in messages {
                tracing::warn!(context, %message, "validation failure");
            }
        }
        self
    }
}
