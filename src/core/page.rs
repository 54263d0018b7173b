//! A logical list item bound to a rendering surface.

use super::surface::SurfaceHandle;
use serde::{Deserialize, Serialize};

/// One visible unit of a recycled list: the item and the surface it is
/// currently bound to.
///
/// Pages are immutable values. The tracker creates one per attach or detach
/// event and keeps at most two of them (current and pending).
///
/// # Example
///
/// ```rust
/// use pager_track::core::{Page, SurfaceId};
///
/// let page = Page::new("intro", SurfaceId(1));
/// assert_eq!(page.list_item, "intro");
/// assert!(page.is_on_surface(&SurfaceId(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<I, S> {
    /// The logical item shown by this page
    pub list_item: I,
    /// The surface the item is bound to
    pub surface: S,
}

impl<I, S> Page<I, S> {
    pub fn new(list_item: I, surface: S) -> Self {
        Self { list_item, surface }
    }

    /// Split the page back into its parts.
    pub fn into_parts(self) -> (I, S) {
        (self.list_item, self.surface)
    }
}

impl<I, S: SurfaceHandle> Page<I, S> {
    /// Whether this page is bound to exactly `surface` (identity, not value).
    pub fn is_on_surface(&self, surface: &S) -> bool {
        self.surface.is_same_surface(surface)
    }
}
