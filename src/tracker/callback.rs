//! Page change listener.

use super::error::ListenerError;
use crate::core::Page;

/// Receiver of page transition notifications.
///
/// Callbacks run inline on the thread delivering the attach/detach event,
/// after the tracker has already moved to its new state. The tracker is
/// mutably borrowed for the whole call, so a listener must not deliver
/// attach/detach events back into it. One that reaches the tracker through
/// shared ownership (say an `Rc<RefCell<PagerAdapter>>`) panics with a
/// `BorrowMutError` at runtime rather than corrupting state.
///
/// # Example
///
/// ```rust
/// use pager_track::core::{Page, SurfaceId};
/// use pager_track::tracker::{ListenerError, PageChangeCallback};
///
/// struct Title(Option<String>);
///
/// impl PageChangeCallback<String, SurfaceId> for Title {
///     fn on_first_page_attached(
///         &mut self,
///         page: &Page<String, SurfaceId>,
///     ) -> Result<(), ListenerError> {
///         self.0 = Some(page.list_item.clone());
///         Ok(())
///     }
///
///     fn on_page_changed(
///         &mut self,
///         _old: &Page<String, SurfaceId>,
///         new: Option<&Page<String, SurfaceId>>,
///     ) -> Result<(), ListenerError> {
///         self.0 = new.map(|p| p.list_item.clone());
///         Ok(())
///     }
/// }
/// ```
pub trait PageChangeCallback<I, S> {
    /// A page became current while none was: the first attach of the
    /// tracker's lifetime, or the first attach after the list went blank.
    fn on_first_page_attached(&mut self, page: &Page<I, S>) -> Result<(), ListenerError>;

    /// The current page left. `new_page` is its successor, or `None` if the
    /// list went blank.
    fn on_page_changed(
        &mut self,
        old_page: &Page<I, S>,
        new_page: Option<&Page<I, S>>,
    ) -> Result<(), ListenerError>;
}
