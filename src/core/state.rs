//! Page tracker state.
//!
//! The tracker's bookkeeping is a sum type rather than a pair of nullable
//! fields, so every row of the transition table corresponds to one match arm.

use super::page::Page;
use serde::{Deserialize, Serialize};

/// Where the tracker stands with respect to the visible pages.
///
/// # Example
///
/// ```rust
/// use pager_track::core::{Page, PageState, SurfaceId};
///
/// let state = PageState::ActivePending {
///     current: Page::new(1, SurfaceId(1)),
///     pending: Page::new(2, SurfaceId(2)),
/// };
///
/// assert_eq!(state.name(), "ActivePending");
/// assert_eq!(state.current().map(|p| p.list_item), Some(1));
/// assert_eq!(state.pending().map(|p| p.list_item), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PageState<I, S> {
    /// No surface has ever attached
    Empty,

    /// One dominant page, no successor in sight
    Active { current: Page<I, S> },

    /// A successor surface attached while the current page is still showing
    ActivePending {
        current: Page<I, S>,
        pending: Page<I, S>,
    },

    /// The current page left with no successor; the list has gone blank
    Drained,
}

impl<I, S> Default for PageState<I, S> {
    fn default() -> Self {
        PageState::Empty
    }
}

impl<I, S> PageState<I, S> {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Active { .. } => "Active",
            Self::ActivePending { .. } => "ActivePending",
            Self::Drained => "Drained",
        }
    }

    pub fn current(&self) -> Option<&Page<I, S>> {
        match self {
            Self::Active { current } | Self::ActivePending { current, .. } => Some(current),
            Self::Empty | Self::Drained => None,
        }
    }

    pub fn pending(&self) -> Option<&Page<I, S>> {
        match self {
            Self::ActivePending { pending, .. } => Some(pending),
            _ => None,
        }
    }

    /// True until the very first surface attaches.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True if the tracker has seen pages before but none is current now.
    pub fn is_drained(&self) -> bool {
        matches!(self, Self::Drained)
    }
}
