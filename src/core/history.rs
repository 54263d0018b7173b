//! Page change history tracking.
//!
//! Keeps a bounded, ordered log of the real page transitions the tracker has
//! reported. Recreations and abandoned pending pages never show up here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single page change.
///
/// # Example
///
/// ```rust
/// use pager_track::core::PageChange;
/// use chrono::Utc;
///
/// let change = PageChange {
///     from: "intro",
///     to: Some("chapter-1"),
///     timestamp: Utc::now(),
/// };
/// assert!(!change.drained());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageChange<I> {
    /// Item of the page that stopped being current
    pub from: I,
    /// Item of the page that became current, if any
    pub to: Option<I>,
    /// When the change was observed
    pub timestamp: DateTime<Utc>,
}

impl<I> PageChange<I> {
    /// Whether this change left the list without a current page.
    pub fn drained(&self) -> bool {
        self.to.is_none()
    }
}

/// Ordered history of page changes, oldest first.
///
/// With a limit set, recording past the limit drops the oldest entry.
///
/// # Example
///
/// ```rust
/// use pager_track::core::{PageChange, PageHistory};
/// use chrono::Utc;
///
/// let mut history = PageHistory::with_limit(Some(8));
/// history.record(PageChange { from: 1, to: Some(2), timestamp: Utc::now() });
/// history.record(PageChange { from: 2, to: Some(3), timestamp: Utc::now() });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&1, &2, &3]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageHistory<I> {
    changes: VecDeque<PageChange<I>>,
    limit: Option<usize>,
}

impl<I> Default for PageHistory<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> PageHistory<I> {
    /// Create an unbounded empty history.
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    /// Create an empty history keeping at most `limit` changes.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            changes: VecDeque::new(),
            limit,
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a change, evicting the oldest entries beyond the limit.
    pub fn record(&mut self, change: PageChange<I>) {
        self.changes.push_back(change);
        if let Some(limit) = self.limit {
            while self.changes.len() > limit {
                self.changes.pop_front();
            }
        }
    }

    /// Get the path of items traversed.
    ///
    /// Returns the `from` item of the oldest retained change followed by the
    /// `to` item of every change that landed on a page. Drains are skipped.
    pub fn get_path(&self) -> Vec<&I> {
        let mut path = Vec::new();
        if let Some(first) = self.changes.front() {
            path.push(&first.from);
        }
        for change in &self.changes {
            if let Some(to) = &change.to {
                path.push(to);
            }
        }
        path
    }

    /// Time between the oldest and newest retained change.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.changes.front()?, self.changes.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn changes(&self) -> impl ExactSizeIterator<Item = &PageChange<I>> {
        self.changes.iter()
    }

    pub fn last(&self) -> Option<&PageChange<I>> {
        self.changes.back()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
