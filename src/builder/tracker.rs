//! Builder for constructing page trackers.

use crate::builder::error::BuildError;
use crate::core::ItemEquality;
use crate::tracker::{PageChangeCallback, PageTracker, TrackerConfig, UnmatchedDetachPolicy};

/// Builder for constructing page trackers with a fluent API.
///
/// Unlike `PageTracker::new`, the builder refuses to produce a tracker
/// without an item equality, so the configuration error surfaces at setup
/// instead of on the first scroll.
pub struct PageTrackerBuilder<I, S> {
    item_equality: Option<ItemEquality<I>>,
    callback: Option<Box<dyn PageChangeCallback<I, S>>>,
    config: TrackerConfig,
}

impl<I, S> PageTrackerBuilder<I, S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            item_equality: None,
            callback: None,
            config: TrackerConfig::default(),
        }
    }

    /// Set the item equality (required).
    pub fn item_equality(mut self, item_equality: ItemEquality<I>) -> Self {
        self.item_equality = Some(item_equality);
        self
    }

    /// Compare items by a derived key.
    pub fn items_by_key<K, F>(self, key: F) -> Self
    where
        K: PartialEq,
        F: Fn(&I) -> K + 'static,
    {
        self.item_equality(ItemEquality::by_key(key))
    }

    /// Set the page change listener.
    pub fn callback<C>(mut self, callback: C) -> Self
    where
        C: PageChangeCallback<I, S> + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn unmatched_detach(mut self, policy: UnmatchedDetachPolicy) -> Self {
        self.config.unmatched_detach = policy;
        self
    }

    /// Bound the page change history; `None` keeps every change.
    pub fn history_limit(mut self, limit: Option<usize>) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Build the tracker.
    /// Returns an error if the item equality is missing or the config is invalid.
    pub fn build(self) -> Result<PageTracker<I, S>, BuildError> {
        let item_equality = self.item_equality.ok_or(BuildError::MissingItemEquality)?;
        self.config.validate()?;

        let mut tracker = PageTracker::with_config(self.config);
        tracker.set_item_equality(item_equality);
        if let Some(callback) = self.callback {
            tracker.set_boxed_page_change_callback(callback);
        }

        Ok(tracker)
    }
}

impl<I, S> Default for PageTrackerBuilder<I, S> {
    fn default() -> Self {
        Self::new()
    }
}
