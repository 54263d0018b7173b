//! Classification of a single attach or detach event.

use serde::{Deserialize, Serialize};

/// What the tracker made of one attach or detach event.
///
/// Only `FirstPageAttached`, `PageChanged` and `PageRestored` correspond to a
/// listener notification; `PageRestored` is delivered through
/// `on_first_page_attached`. Everything else is bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageEvent {
    /// The very first surface attached and became the current page
    FirstPageAttached,

    /// A surface for the current item attached again (holder swap, rebind)
    SurfaceRecreated,

    /// A different item attached and is now the pending page
    PendingAttached,

    /// A different item attached on the current page's own surface; ignored
    SurfaceConflict,

    /// The pending page detached before it ever became current
    PendingAbandoned,

    /// The current page detached and its successor (if any) took over
    PageChanged,

    /// A page attached after the list had been drained; reported to the
    /// listener as a first page
    PageRestored,

    /// A detach matched neither tracked page and was ignored
    UnmatchedDetach,
}

impl PageEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstPageAttached => "FirstPageAttached",
            Self::SurfaceRecreated => "SurfaceRecreated",
            Self::PendingAttached => "PendingAttached",
            Self::SurfaceConflict => "SurfaceConflict",
            Self::PendingAbandoned => "PendingAbandoned",
            Self::PageChanged => "PageChanged",
            Self::PageRestored => "PageRestored",
            Self::UnmatchedDetach => "UnmatchedDetach",
        }
    }

    /// Whether the event changed which page is current.
    pub fn is_transition(&self) -> bool {
        matches!(
            self,
            Self::FirstPageAttached | Self::PageChanged | Self::PageRestored
        )
    }
}
