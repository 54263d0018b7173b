//! Page tracker that turns surface attach/detach events into page changes.

use super::callback::PageChangeCallback;
use super::config::{TrackerConfig, UnmatchedDetachPolicy};
use super::error::TrackerError;
use super::event::PageEvent;
use super::snapshot::TrackerSnapshot;
use crate::core::{ItemEquality, Page, PageChange, PageHistory, PageState, SurfaceHandle};
use chrono::Utc;
use std::fmt::{self, Debug};
use std::mem;
use tracing::{debug, trace, warn};

/// Tracks which page of a recycled list is the dominant one.
///
/// The tracker is driven exclusively by the host list's surface lifecycle
/// callbacks, on a single thread. It never looks at scroll positions: a page
/// becomes current only when its predecessor's surface detaches.
pub struct PageTracker<I, S> {
    state: PageState<I, S>,
    item_equality: Option<ItemEquality<I>>,
    callback: Option<Box<dyn PageChangeCallback<I, S>>>,
    history: PageHistory<I>,
    config: TrackerConfig,
}

impl<I, S> Default for PageTracker<I, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, S> PageTracker<I, S> {
    /// Create an empty tracker with the default configuration.
    pub fn new() -> Self {
        Self::with_config(TrackerConfig::default())
    }

    /// Create an empty tracker with the given configuration.
    ///
    /// The configuration is taken as-is; use `PageTrackerBuilder` or
    /// `TrackerConfig::validate` to reject a zero history limit.
    pub fn with_config(config: TrackerConfig) -> Self {
        Self {
            state: PageState::Empty,
            item_equality: None,
            callback: None,
            history: PageHistory::with_limit(config.history_limit),
            config,
        }
    }

    /// Replace the page change listener.
    pub fn set_page_change_callback<C>(&mut self, callback: C)
    where
        C: PageChangeCallback<I, S> + 'static,
    {
        self.set_boxed_page_change_callback(Box::new(callback));
    }

    pub fn set_boxed_page_change_callback(&mut self, callback: Box<dyn PageChangeCallback<I, S>>) {
        self.callback = Some(callback);
    }

    /// Drop the page change listener; later transitions go unreported.
    pub fn unset_page_change_callback(&mut self) {
        self.callback = None;
    }

    pub fn has_page_change_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Set the equality used to decide whether two pages show the same item.
    pub fn set_item_equality(&mut self, item_equality: ItemEquality<I>) {
        self.item_equality = Some(item_equality);
    }

    pub fn has_item_equality(&self) -> bool {
        self.item_equality.is_some()
    }

    pub fn state(&self) -> &PageState<I, S> {
        &self.state
    }

    pub fn current_page(&self) -> Option<&Page<I, S>> {
        self.state.current()
    }

    pub fn pending_page(&self) -> Option<&Page<I, S>> {
        self.state.pending()
    }

    /// Item of the current page, if any.
    pub fn current_item(&self) -> Option<&I> {
        self.state.current().map(|page| &page.list_item)
    }

    /// Item of the pending page, if any.
    pub fn pending_item(&self) -> Option<&I> {
        self.state.pending().map(|page| &page.list_item)
    }

    pub fn history(&self) -> &PageHistory<I> {
        &self.history
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    fn same_item(&self, a: &I, b: &I) -> Result<bool, TrackerError> {
        self.item_equality
            .as_ref()
            .map(|eq| eq.check(a, b))
            .ok_or(TrackerError::MissingItemEquality)
    }
}

impl<I, S> PageTracker<I, S>
where
    I: Clone + Debug,
    S: SurfaceHandle + Debug,
{
    /// Handle a surface bound to `item` attaching to the list.
    ///
    /// Re-attaching the current item is a recreation and changes nothing.
    /// An attach while no page is current (never attached, or drained)
    /// becomes the current page and is reported as a first page; any other
    /// item becomes the pending page until the current one leaves.
    pub fn on_surface_attached(&mut self, item: I, surface: S) -> Result<PageEvent, TrackerError> {
        if let Some(current) = self.state.current() {
            if self.same_item(&current.list_item, &item)? {
                trace!(?item, ?surface, "surface recreated for current page");
                return Ok(PageEvent::SurfaceRecreated);
            }
            if current.is_on_surface(&surface) {
                warn!(
                    ?item,
                    ?surface,
                    current = ?current.list_item,
                    "different item attached on the current page's surface, ignoring"
                );
                return Ok(PageEvent::SurfaceConflict);
            }
        }

        let candidate = Page::new(item, surface);

        match mem::take(&mut self.state) {
            PageState::Empty => {
                debug!(item = ?candidate.list_item, "first page attached");
                self.state = PageState::Active { current: candidate };
                if let (Some(callback), Some(page)) = (self.callback.as_mut(), self.state.current())
                {
                    callback.on_first_page_attached(page)?;
                }
                Ok(PageEvent::FirstPageAttached)
            }
            PageState::Drained => {
                debug!(item = ?candidate.list_item, "page attached after drain");
                self.state = PageState::Active { current: candidate };
                if let (Some(callback), Some(page)) = (self.callback.as_mut(), self.state.current())
                {
                    callback.on_first_page_attached(page)?;
                }
                Ok(PageEvent::PageRestored)
            }
            PageState::Active { current } | PageState::ActivePending { current, .. } => {
                trace!(item = ?candidate.list_item, "pending page attached");
                self.state = PageState::ActivePending {
                    current,
                    pending: candidate,
                };
                Ok(PageEvent::PendingAttached)
            }
        }
    }

    /// Handle a surface bound to `item` detaching from the list.
    ///
    /// A detach of the pending surface abandons it silently. A detach of the
    /// current item hands over to the pending page (or drains the list) and
    /// notifies the listener. Anything else is handled per
    /// `UnmatchedDetachPolicy`.
    pub fn on_surface_detached(&mut self, item: I, surface: S) -> Result<PageEvent, TrackerError> {
        if self
            .state
            .pending()
            .is_some_and(|pending| pending.is_on_surface(&surface))
        {
            if let PageState::ActivePending { current, pending } = mem::take(&mut self.state) {
                debug!(item = ?pending.list_item, "pending page abandoned");
                self.state = PageState::Active { current };
            }
            return Ok(PageEvent::PendingAbandoned);
        }

        let leaving = match self.state.current() {
            Some(current) => self.same_item(&current.list_item, &item)?,
            None => false,
        };
        if !leaving {
            return self.unmatched_detach(item, surface);
        }

        let old_page = match mem::take(&mut self.state) {
            PageState::Active { current } => {
                self.state = PageState::Drained;
                current
            }
            PageState::ActivePending { current, pending } => {
                self.state = PageState::Active { current: pending };
                current
            }
            other => {
                self.state = other;
                return self.unmatched_detach(item, surface);
            }
        };

        let new_item = self.current_item().cloned();
        debug!(from = ?old_page.list_item, to = ?new_item, "page changed");
        self.history.record(PageChange {
            from: old_page.list_item.clone(),
            to: new_item,
            timestamp: Utc::now(),
        });

        if let Some(callback) = self.callback.as_mut() {
            callback.on_page_changed(&old_page, self.state.current())?;
        }
        Ok(PageEvent::PageChanged)
    }

    /// Serializable summary of the current bookkeeping.
    pub fn snapshot(&self) -> TrackerSnapshot<I> {
        TrackerSnapshot {
            state: self.state.name().to_string(),
            current_item: self.current_item().cloned(),
            pending_item: self.pending_item().cloned(),
            page_changes: self.history.len(),
        }
    }

    fn unmatched_detach(&self, item: I, surface: S) -> Result<PageEvent, TrackerError> {
        match self.config.unmatched_detach {
            UnmatchedDetachPolicy::Log => {
                warn!(
                    ?item,
                    ?surface,
                    state = self.state.name(),
                    "detached surface matches neither current nor pending page"
                );
                Ok(PageEvent::UnmatchedDetach)
            }
            UnmatchedDetachPolicy::Reject => Err(TrackerError::UnmatchedDetach {
                item: format!("{item:?}"),
            }),
        }
    }
}

impl<I: Debug, S: Debug> Debug for PageTracker<I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageTracker")
            .field("state", &self.state)
            .field("has_item_equality", &self.item_equality.is_some())
            .field("has_callback", &self.callback.is_some())
            .field("page_changes", &self.history.len())
            .field("config", &self.config)
            .finish()
    }
}
