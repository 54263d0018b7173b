//! Serializable view of tracker state for diagnostics.

use serde::{Deserialize, Serialize};

/// Point-in-time summary of a tracker.
///
/// Carries items only; surfaces are live objects owned by the host and are
/// not meaningful outside the process.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackerSnapshot<I> {
    /// Name of the tracker state (`Empty`, `Active`, ...)
    pub state: String,
    pub current_item: Option<I>,
    pub pending_item: Option<I>,
    /// Page changes currently retained in history
    pub page_changes: usize,
}
