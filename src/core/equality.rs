//! Logical item equality.
//!
//! The tracker never assumes anything about item identity on its own. Two
//! surfaces show the same page exactly when the injected equality says their
//! items are the same, which is usually a comparison of stable ids rather than
//! full structural equality.

use std::fmt;

/// Injected equality over list items.
///
/// Must be total, reflexive and symmetric. The tracker calls it on every
/// attach while a page is current and on every detach that is not a pending
/// abandonment.
///
/// # Example
///
/// ```rust
/// use pager_track::core::ItemEquality;
///
/// #[derive(Debug)]
/// struct Article {
///     id: u32,
///     title: String,
/// }
///
/// let same_article = ItemEquality::by_key(|a: &Article| a.id);
///
/// let first = Article { id: 1, title: "draft".into() };
/// let edited = Article { id: 1, title: "final".into() };
/// let other = Article { id: 2, title: "draft".into() };
///
/// assert!(same_article.check(&first, &edited));
/// assert!(!same_article.check(&first, &other));
/// ```
pub struct ItemEquality<I> {
    predicate: Box<dyn Fn(&I, &I) -> bool>,
}

impl<I> ItemEquality<I> {
    /// Create an equality from an arbitrary predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&I, &I) -> bool + 'static,
    {
        ItemEquality {
            predicate: Box::new(predicate),
        }
    }

    /// Compare items by a derived key, typically a stable id.
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: PartialEq,
        F: Fn(&I) -> K + 'static,
    {
        Self::new(move |a, b| key(a) == key(b))
    }

    /// Check whether two items denote the same logical page.
    pub fn check(&self, a: &I, b: &I) -> bool {
        (self.predicate)(a, b)
    }
}

impl<I: PartialEq + 'static> ItemEquality<I> {
    /// Use the item type's own `PartialEq`.
    ///
    /// ```rust
    /// use pager_track::core::ItemEquality;
    ///
    /// let eq = ItemEquality::<u32>::by_eq();
    /// assert!(eq.check(&4, &4));
    /// assert!(!eq.check(&4, &5));
    /// ```
    pub fn by_eq() -> Self {
        Self::new(|a: &I, b: &I| a == b)
    }
}

impl<I> fmt::Debug for ItemEquality<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemEquality").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Item {
        id: u32,
        revision: u32,
    }

    #[test]
    fn by_eq_uses_partial_eq() {
        let eq = ItemEquality::<&str>::by_eq();

        assert!(eq.check(&"a", &"a"));
        assert!(!eq.check(&"a", &"b"));
    }

    #[test]
    fn by_key_ignores_other_fields() {
        let eq = ItemEquality::by_key(|i: &Item| i.id);
        let old = Item { id: 9, revision: 1 };
        let new = Item { id: 9, revision: 2 };

        assert!(eq.check(&old, &new));
        assert_ne!(old.revision, new.revision);
    }

    #[test]
    fn custom_predicate_is_symmetric_when_written_so() {
        let eq = ItemEquality::new(|a: &i32, b: &i32| a.abs() == b.abs());

        assert!(eq.check(&-3, &3));
        assert!(eq.check(&3, &-3));
        assert!(!eq.check(&3, &4));
    }

    #[test]
    fn check_is_deterministic() {
        let eq = ItemEquality::by_key(|i: &Item| i.id);
        let a = Item { id: 1, revision: 0 };
        let b = Item { id: 2, revision: 0 };

        assert_eq!(eq.check(&a, &b), eq.check(&a, &b));
    }
}
