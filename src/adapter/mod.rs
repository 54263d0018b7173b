//! Glue between a host recycling list and the page tracker.
//!
//! The host reports per-row "child attached" / "child detached" callbacks
//! with its own view type. A `PageBinding` recovers the item and surface the
//! view was bound with, and `PagerAdapter` forwards the pair to the tracker.

mod binding;
mod pager;

pub use binding::{FnBinding, PageBinding};
pub use pager::{ChildAttachStateListener, PagerAdapter};
