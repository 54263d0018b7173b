//! Host-facing listener that drives a `PageTracker`.

use super::binding::PageBinding;
use crate::core::SurfaceHandle;
use crate::tracker::{PageEvent, PageTracker, TrackerError};
use std::fmt::Debug;
use tracing::debug;

/// Per-row attach/detach callbacks as delivered by a recycling list.
pub trait ChildAttachStateListener<V: ?Sized> {
    fn on_child_attached(&mut self, view: &V) -> Result<PageEvent, TrackerError>;

    fn on_child_detached(&mut self, view: &V) -> Result<PageEvent, TrackerError>;
}

/// Feeds a host list's child attach/detach callbacks into a `PageTracker`.
///
/// # Example
///
/// ```rust
/// use pager_track::adapter::{ChildAttachStateListener, FnBinding, PagerAdapter};
/// use pager_track::builder::tracker_by_eq;
/// use pager_track::core::SurfaceId;
///
/// struct Row {
///     item: u32,
///     holder: u64,
/// }
///
/// let binding = FnBinding::new(
///     |row: &Row| Some(row.item),
///     |row: &Row| Some(SurfaceId(row.holder)),
/// );
/// let mut adapter = PagerAdapter::new(tracker_by_eq::<u32, SurfaceId>(), binding);
///
/// adapter.on_child_attached(&Row { item: 1, holder: 1 }).unwrap();
/// adapter.on_child_attached(&Row { item: 2, holder: 2 }).unwrap();
/// adapter.on_child_detached(&Row { item: 1, holder: 1 }).unwrap();
///
/// assert_eq!(adapter.tracker().current_item(), Some(&2));
/// ```
pub struct PagerAdapter<B, I, S> {
    tracker: PageTracker<I, S>,
    binding: B,
}

impl<B, I, S> PagerAdapter<B, I, S> {
    pub fn new(tracker: PageTracker<I, S>, binding: B) -> Self {
        Self { tracker, binding }
    }

    pub fn tracker(&self) -> &PageTracker<I, S> {
        &self.tracker
    }

    /// Mutable access for (un)registering listeners or setting equality.
    pub fn tracker_mut(&mut self) -> &mut PageTracker<I, S> {
        &mut self.tracker
    }

    pub fn into_tracker(self) -> PageTracker<I, S> {
        self.tracker
    }
}

impl<V, B, I, S> ChildAttachStateListener<V> for PagerAdapter<B, I, S>
where
    V: ?Sized,
    B: PageBinding<V, I, S>,
    I: Clone + Debug,
    S: SurfaceHandle + Debug,
{
    fn on_child_attached(&mut self, view: &V) -> Result<PageEvent, TrackerError> {
        let Some((item, surface)) = self.binding.page_of(view) else {
            debug!("attached view carries no page binding");
            return Err(TrackerError::UnboundView);
        };
        self.tracker.on_surface_attached(item, surface)
    }

    fn on_child_detached(&mut self, view: &V) -> Result<PageEvent, TrackerError> {
        let Some((item, surface)) = self.binding.page_of(view) else {
            debug!("detached view carries no page binding");
            return Err(TrackerError::UnboundView);
        };
        self.tracker.on_surface_detached(item, surface)
    }
}
