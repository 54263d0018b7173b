//! Core page tracking types.
//!
//! This module contains the value types the tracker is built from:
//! - `Page`, an item bound to a surface
//! - `PageState`, the tracker's state as a sum type
//! - `ItemEquality` and `SurfaceHandle`, the two identity capabilities
//! - `PageHistory`, a bounded log of page changes
//!
//! Nothing in here performs side effects or logging; that lives in the
//! tracker.

mod equality;
mod history;
mod page;
mod state;
mod surface;

pub use equality::ItemEquality;
pub use history::{PageChange, PageHistory};
pub use page::Page;
pub use state::PageState;
pub use surface::{SurfaceHandle, SurfaceId};
