//! Pager Track: which page of a recycling list is showing
//!
//! A recycling list attaches and detaches item surfaces as the user scrolls,
//! often redundantly (a surface recreated for the same item) and
//! speculatively (a neighbour attached during a fling that then reverses).
//! Pager Track reconciles that stream into a clean sequence of page changes
//! using only item equality and surface identity.
//!
//! # Core Concepts
//!
//! - **Page**: a list item bound to a rendering surface
//! - **Tracker**: the state machine holding the current and pending pages
//! - **Adapter**: glue from the host list's per-row callbacks to the tracker
//!
//! # Example
//!
//! ```rust
//! use pager_track::builder::PageTrackerBuilder;
//! use pager_track::core::SurfaceId;
//! use pager_track::tracker::PageEvent;
//!
//! let mut tracker = PageTrackerBuilder::<u32, SurfaceId>::new()
//!     .items_by_key(|item| *item)
//!     .build()
//!     .unwrap();
//!
//! tracker.on_surface_attached(1, SurfaceId(1)).unwrap();
//! tracker.on_surface_attached(2, SurfaceId(2)).unwrap();
//! let event = tracker.on_surface_detached(1, SurfaceId(1)).unwrap();
//!
//! assert_eq!(event, PageEvent::PageChanged);
//! assert_eq!(tracker.current_item(), Some(&2));
//! ```

pub mod adapter;
pub mod builder;
pub mod core;
pub mod tracker;

// Re-export commonly used types
pub use crate::core::{ItemEquality, Page, PageState, SurfaceHandle, SurfaceId};
pub use crate::tracker::{PageChangeCallback, PageEvent, PageTracker, TrackerError};
