//! End-to-end tests driving the tracker through a simulated recycling list.
//!
//! Surfaces are `Rc` holders compared by identity, items are bound to views
//! through side-channel tags, just like a real host list would do.

use pager_track::adapter::{ChildAttachStateListener, FnBinding, PageBinding, PagerAdapter};
use pager_track::builder::PageTrackerBuilder;
use pager_track::core::Page;
use pager_track::tracker::{ListenerError, PageChangeCallback, PageEvent, TrackerError};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
struct Article {
    id: u32,
    title: String,
}

fn article(id: u32) -> Article {
    Article {
        id,
        title: format!("article {id}"),
    }
}

#[derive(Debug)]
struct Holder {
    name: &'static str,
}

/// A row view as handed out by the host: tags set at bind time.
struct RowView {
    payload_tag: Option<Article>,
    holder_tag: Option<Rc<Holder>>,
}

impl RowView {
    fn bound(item: Article, holder: &Rc<Holder>) -> Self {
        Self {
            payload_tag: Some(item),
            holder_tag: Some(Rc::clone(holder)),
        }
    }
}

type Flip = (u32, Option<u32>);

#[derive(Clone, Default)]
struct Flips {
    first: Rc<RefCell<Vec<u32>>>,
    changes: Rc<RefCell<Vec<Flip>>>,
}

impl PageChangeCallback<Article, Rc<Holder>> for Flips {
    fn on_first_page_attached(
        &mut self,
        page: &Page<Article, Rc<Holder>>,
    ) -> Result<(), ListenerError> {
        self.first.borrow_mut().push(page.list_item.id);
        Ok(())
    }

    fn on_page_changed(
        &mut self,
        old_page: &Page<Article, Rc<Holder>>,
        new_page: Option<&Page<Article, Rc<Holder>>>,
    ) -> Result<(), ListenerError> {
        self.changes
            .borrow_mut()
            .push((old_page.list_item.id, new_page.map(|p| p.list_item.id)));
        Ok(())
    }
}

fn host() -> (
    PagerAdapter<impl PageBinding<RowView, Article, Rc<Holder>>, Article, Rc<Holder>>,
    Flips,
) {
    let flips = Flips::default();
    let tracker = PageTrackerBuilder::new()
        .items_by_key(|a: &Article| a.id)
        .callback(flips.clone())
        .build()
        .unwrap();
    let binding = FnBinding::new(
        |v: &RowView| v.payload_tag.clone(),
        |v: &RowView| v.holder_tag.clone(),
    );
    (PagerAdapter::new(tracker, binding), flips)
}

#[test]
fn first_attach_reports_first_page() {
    let (mut host, flips) = host();
    let a = Rc::new(Holder { name: "A" });

    let event = host.on_child_attached(&RowView::bound(article(1), &a)).unwrap();

    assert_eq!(event, PageEvent::FirstPageAttached);
    assert_eq!(*flips.first.borrow(), vec![1]);
    let current = host.tracker().current_page().unwrap();
    assert!(Rc::ptr_eq(&current.surface, &a));
    assert_eq!(current.surface.name, "A");
}

#[test]
fn holder_swap_for_same_article_is_not_a_page_change() {
    let (mut host, flips) = host();
    let a = Rc::new(Holder { name: "A" });
    let a_prime = Rc::new(Holder { name: "A'" });
    host.on_child_attached(&RowView::bound(article(1), &a)).unwrap();

    let mut edited = article(1);
    edited.title = "edited".to_string();
    let event = host
        .on_child_attached(&RowView::bound(edited, &a_prime))
        .unwrap();

    assert_eq!(event, PageEvent::SurfaceRecreated);
    let current = host.tracker().current_page().unwrap();
    assert!(Rc::ptr_eq(&current.surface, &a));
    assert_eq!(current.list_item.title, "article 1");
    assert!(flips.changes.borrow().is_empty());
}

#[test]
fn reversed_fling_abandons_pending_page() {
    let (mut host, flips) = host();
    let a = Rc::new(Holder { name: "A" });
    let b = Rc::new(Holder { name: "B" });
    host.on_child_attached(&RowView::bound(article(1), &a)).unwrap();
    host.on_child_attached(&RowView::bound(article(2), &b)).unwrap();

    let event = host.on_child_detached(&RowView::bound(article(2), &b)).unwrap();

    assert_eq!(event, PageEvent::PendingAbandoned);
    assert_eq!(host.tracker().current_item().map(|a| a.id), Some(1));
    assert!(host.tracker().pending_item().is_none());
    assert!(flips.changes.borrow().is_empty());
}

#[test]
fn completed_swipe_changes_page() {
    let (mut host, flips) = host();
    let a = Rc::new(Holder { name: "A" });
    let b = Rc::new(Holder { name: "B" });
    host.on_child_attached(&RowView::bound(article(1), &a)).unwrap();
    host.on_child_attached(&RowView::bound(article(2), &b)).unwrap();

    let event = host.on_child_detached(&RowView::bound(article(1), &a)).unwrap();

    assert_eq!(event, PageEvent::PageChanged);
    let current = host.tracker().current_page().unwrap();
    assert_eq!(current.list_item.id, 2);
    assert!(Rc::ptr_eq(&current.surface, &b));
    assert!(host.tracker().pending_item().is_none());
    assert_eq!(*flips.changes.borrow(), vec![(1, Some(2))]);
}

#[test]
fn recycled_holder_carries_next_page() {
    let (mut host, flips) = host();
    let a = Rc::new(Holder { name: "A" });
    let b = Rc::new(Holder { name: "B" });

    // 1 on A, swipe to 2 on B, then A is recycled for 3 and we swipe again.
    host.on_child_attached(&RowView::bound(article(1), &a)).unwrap();
    host.on_child_attached(&RowView::bound(article(2), &b)).unwrap();
    host.on_child_detached(&RowView::bound(article(1), &a)).unwrap();
    host.on_child_attached(&RowView::bound(article(3), &a)).unwrap();
    host.on_child_detached(&RowView::bound(article(2), &b)).unwrap();

    assert_eq!(*flips.changes.borrow(), vec![(1, Some(2)), (2, Some(3))]);
    assert_eq!(*flips.first.borrow(), vec![1]);
    let path: Vec<u32> = host
        .tracker()
        .history()
        .get_path()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(path, vec![1, 2, 3]);
}

#[test]
fn list_cleared_reports_no_successor() {
    let (mut host, flips) = host();
    let a = Rc::new(Holder { name: "A" });
    host.on_child_attached(&RowView::bound(article(1), &a)).unwrap();

    host.on_child_detached(&RowView::bound(article(1), &a)).unwrap();

    assert_eq!(*flips.changes.borrow(), vec![(1, None)]);
    assert!(host.tracker().state().is_drained());
}

#[test]
fn refilled_list_reports_a_new_first_page() {
    let (mut host, flips) = host();
    let a = Rc::new(Holder { name: "A" });
    let b = Rc::new(Holder { name: "B" });
    host.on_child_attached(&RowView::bound(article(1), &a)).unwrap();
    host.on_child_detached(&RowView::bound(article(1), &a)).unwrap();

    let event = host.on_child_attached(&RowView::bound(article(2), &b)).unwrap();

    assert_eq!(event, PageEvent::PageRestored);
    assert_eq!(*flips.first.borrow(), vec![1, 2]);
    assert_eq!(*flips.changes.borrow(), vec![(1, None)]);
    assert_eq!(host.tracker().current_item().map(|item| item.id), Some(2));
}

#[test]
fn stray_detach_is_ignored() {
    let (mut host, flips) = host();
    let z = Rc::new(Holder { name: "Z" });

    let event = host.on_child_detached(&RowView::bound(article(99), &z)).unwrap();

    assert_eq!(event, PageEvent::UnmatchedDetach);
    assert!(host.tracker().state().is_empty());
    assert!(flips.first.borrow().is_empty());
}

#[test]
fn view_without_tags_is_rejected() {
    let (mut host, _flips) = host();
    let untagged = RowView {
        payload_tag: None,
        holder_tag: None,
    };

    let result = host.on_child_attached(&untagged);

    assert!(matches!(result, Err(TrackerError::UnboundView)));
}
