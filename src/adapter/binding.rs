//! Extraction of (item, surface) pairs from host views.

/// Reads back the item and surface a host view was bound with.
///
/// Hosts usually stash both on the view at bind time. A view that was never
/// bound (or whose binding was cleared) yields `None`.
pub trait PageBinding<V: ?Sized, I, S> {
    fn item_of(&self, view: &V) -> Option<I>;

    fn surface_of(&self, view: &V) -> Option<S>;

    /// Both halves of the binding, or `None` if either is missing.
    fn page_of(&self, view: &V) -> Option<(I, S)> {
        Some((self.item_of(view)?, self.surface_of(view)?))
    }
}

/// `PageBinding` built from two extraction closures.
///
/// # Example
///
/// ```rust
/// use pager_track::adapter::{FnBinding, PageBinding};
/// use pager_track::core::SurfaceId;
///
/// struct Row {
///     payload: Option<u32>,
///     holder: u64,
/// }
///
/// let binding = FnBinding::new(
///     |row: &Row| row.payload,
///     |row: &Row| Some(SurfaceId(row.holder)),
/// );
///
/// let row = Row { payload: Some(4), holder: 9 };
/// assert_eq!(binding.page_of(&row), Some((4, SurfaceId(9))));
///
/// let blank = Row { payload: None, holder: 9 };
/// assert_eq!(binding.page_of(&blank), None);
/// ```
pub struct FnBinding<FI, FS> {
    item_of: FI,
    surface_of: FS,
}

impl<FI, FS> FnBinding<FI, FS> {
    pub fn new(item_of: FI, surface_of: FS) -> Self {
        Self {
            item_of,
            surface_of,
        }
    }
}

impl<V, I, S, FI, FS> PageBinding<V, I, S> for FnBinding<FI, FS>
where
    V: ?Sized,
    FI: Fn(&V) -> Option<I>,
    FS: Fn(&V) -> Option<S>,
{
    fn item_of(&self, view: &V) -> Option<I> {
        (self.item_of)(view)
    }

    fn surface_of(&self, view: &V) -> Option<S> {
        (self.surface_of)(view)
    }
}
