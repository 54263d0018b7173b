//! Identity of rendering surfaces.
//!
//! A recycling list reuses surfaces for different items over time, so two
//! surfaces are only "the same" when they are the same object. Value equality
//! of whatever the surface happens to display is meaningless here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Handle to a rendering surface that can be compared by identity.
///
/// # Example
///
/// ```rust
/// use pager_track::core::{SurfaceHandle, SurfaceId};
/// use std::rc::Rc;
///
/// let a = Rc::new("holder");
/// let b = Rc::clone(&a);
/// let c = Rc::new("holder");
///
/// assert!(a.is_same_surface(&b));
/// assert!(!a.is_same_surface(&c));
///
/// assert!(SurfaceId(7).is_same_surface(&SurfaceId(7)));
/// ```
pub trait SurfaceHandle {
    /// Returns `true` if both handles refer to the same surface object.
    fn is_same_surface(&self, other: &Self) -> bool;
}

impl<T: ?Sized> SurfaceHandle for Rc<T> {
    fn is_same_surface(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SurfaceHandle for Arc<T> {
    fn is_same_surface(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SurfaceHandle for &T {
    fn is_same_surface(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

/// Opaque numeric surface handle, for hosts that hand out surface ids
/// rather than references.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SurfaceId(pub u64);

impl SurfaceHandle for SurfaceId {
    fn is_same_surface(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rc_handles_compare_by_pointer() {
        let a = Rc::new(1);
        let b = Rc::new(1);

        assert!(a.is_same_surface(&Rc::clone(&a)));
        assert!(!a.is_same_surface(&b));
    }

    #[test]
    fn arc_handles_compare_by_pointer() {
        let a = Arc::new(String::from("view"));
        let b = Arc::new(String::from("view"));

        assert!(a.is_same_surface(&a.clone()));
        assert!(!a.is_same_surface(&b));
    }

    #[test]
    fn references_compare_by_address() {
        let first = [0u8; 4];
        let second = [0u8; 4];

        assert!((&first).is_same_surface(&&first));
        assert!(!(&first).is_same_surface(&&second));
    }

    #[test]
    fn surface_ids_compare_by_value() {
        assert!(SurfaceId(3).is_same_surface(&SurfaceId(3)));
        assert!(!SurfaceId(3).is_same_surface(&SurfaceId(4)));
        assert_eq!(SurfaceId(3).to_string(), "surface#3");
    }
}
