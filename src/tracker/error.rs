//! Tracker error types.

use thiserror::Error;

/// Errors that can occur while classifying attach/detach events
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A page had to be compared against the current one before any item
    /// equality was configured. This is an integration bug, not a runtime
    /// condition.
    #[error("Item equality must be set with set_item_equality() before pages can be classified")]
    MissingItemEquality,

    /// A detached surface matched neither the current nor the pending page.
    /// Only returned under `UnmatchedDetachPolicy::Reject`. `item` is the
    /// `Debug` rendering of the detached item, for display only; do not parse it.
    #[error("Detached surface matches neither the current nor the pending page (item: {item})")]
    UnmatchedDetach { item: String },

    /// The host handed over a view that carries no item or surface binding.
    #[error("View has no page binding (item or surface missing)")]
    UnboundView,

    #[error(transparent)]
    Listener(#[from] ListenerError),
}

/// Failure reported by a page change listener.
///
/// The tracker applies its state change before notifying, so a listener
/// failure never leaves the tracker half-updated. The error is handed back to
/// whoever delivered the event.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Page change listener failed: {message}")]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
