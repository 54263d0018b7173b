//! Builder API for page tracker construction.
//!
//! `PageTracker::new` gives an unconfigured tracker whose collaborators are
//! set later; the builder assembles everything up front and validates it.

pub mod error;
pub mod tracker;

pub use error::BuildError;
pub use tracker::PageTrackerBuilder;

use crate::core::ItemEquality;
use crate::tracker::PageTracker;

/// Build a tracker that compares items with their own `PartialEq` and uses
/// the default configuration.
///
/// # Example
///
/// ```
/// use pager_track::builder::tracker_by_eq;
/// use pager_track::core::SurfaceId;
///
/// let mut tracker = tracker_by_eq::<u32, SurfaceId>();
/// tracker.on_surface_attached(1, SurfaceId(10)).unwrap();
/// assert_eq!(tracker.current_item(), Some(&1));
/// ```
pub fn tracker_by_eq<I, S>() -> PageTracker<I, S>
where
    I: PartialEq + 'static,
{
    let mut tracker = PageTracker::new();
    tracker.set_item_equality(ItemEquality::by_eq());
    tracker
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SurfaceId;

    #[test]
    fn tracker_by_eq_is_ready_to_classify() {
        let mut tracker = tracker_by_eq::<&str, SurfaceId>();

        tracker.on_surface_attached("a", SurfaceId(1)).unwrap();
        tracker.on_surface_attached("b", SurfaceId(2)).unwrap();
        tracker.on_surface_detached("a", SurfaceId(1)).unwrap();

        assert!(tracker.has_item_equality());
        assert_eq!(tracker.current_item(), Some(&"b"));
    }
}
