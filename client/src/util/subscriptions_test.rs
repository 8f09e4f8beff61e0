use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Counts live fake resources, like a browser's listener registry.
#[derive(Clone, Default)]
struct Registry {
    live: Rc<Cell<usize>>,
}

impl Registry {
    fn acquire(&self, subs: &mut Subscriptions, label: &'static str) {
        self.live.set(self.live.get() + 1);
        let live = Rc::clone(&self.live);
        subs.hold(label, move || live.set(live.get() - 1));
    }

    fn live(&self) -> usize {
        self.live.get()
    }
}

#[test]
fn new_scope_holds_nothing() {
    let subs = Subscriptions::new();
    assert_eq!(subs.live(), 0);
}

#[test]
fn release_all_frees_every_resource() {
    let registry = Registry::default();
    let mut subs = Subscriptions::new();
    registry.acquire(&mut subs, "intersection-observer");
    registry.acquire(&mut subs, "mousemove");
    registry.acquire(&mut subs, "interval");
    assert_eq!(registry.live(), 3);
    assert_eq!(subs.live(), 3);

    subs.release_all();
    assert_eq!(registry.live(), 0);
    assert_eq!(subs.live(), 0);
}

#[test]
fn drop_releases_held_resources() {
    let registry = Registry::default();
    {
        let mut subs = Subscriptions::new();
        registry.acquire(&mut subs, "interval");
        registry.acquire(&mut subs, "scroll");
    }
    assert_eq!(registry.live(), 0);
}

#[test]
fn release_runs_each_callback_once() {
    let calls = Rc::new(Cell::new(0));
    let mut subs = Subscriptions::new();
    let counter = Rc::clone(&calls);
    subs.hold("interval", move || counter.set(counter.get() + 1));
    subs.release_all();
    subs.release_all();
    drop(subs);
    assert_eq!(calls.get(), 1);
}

#[test]
fn release_order_is_newest_first() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut subs = Subscriptions::new();
    for label in ["observer", "listener", "interval"] {
        let order = Rc::clone(&order);
        subs.hold(label, move || order.borrow_mut().push(label));
    }
    subs.release_all();
    assert_eq!(*order.borrow(), vec!["interval", "listener", "observer"]);
}

#[test]
fn labels_list_live_resources_in_acquisition_order() {
    let mut subs = Subscriptions::new();
    subs.hold("observer", || {});
    subs.hold("interval", || {});
    assert_eq!(subs.labels(), vec!["observer", "interval"]);
    assert_eq!(format!("{subs:?}"), r#"Subscriptions { held: ["observer", "interval"] }"#);
}

// =============================================================================
// OWNER SCOPE
// =============================================================================

#[test]
fn owner_cleanup_releases_scoped_resources() {
    let registry = Registry::default();
    let owner = leptos::prelude::Owner::new();
    owner.with(|| {
        let mut subs = Subscriptions::new();
        registry.acquire(&mut subs, "intersection-observer");
        registry.acquire(&mut subs, "interval");
        scope_to_owner(subs);
    });
    assert_eq!(registry.live(), 2);

    owner.cleanup();
    assert_eq!(registry.live(), 0);
}

#[test]
fn early_unmount_mid_animation_leaves_nothing_live() {
    let registry = Registry::default();
    let owner = leptos::prelude::Owner::new();
    let section = owner.child();
    section.with(|| {
        let mut observer = Subscriptions::new();
        registry.acquire(&mut observer, "intersection-observer");
        scope_to_owner(observer);
        // Revealed; the interval starts while the observer is still held.
        let mut timer = Subscriptions::new();
        registry.acquire(&mut timer, "interval");
        scope_to_owner(timer);
    });
    assert_eq!(registry.live(), 2);

    section.cleanup();
    assert_eq!(registry.live(), 0);
    owner.cleanup();
    assert_eq!(registry.live(), 0);
}

#[test]
fn scope_without_owner_releases_at_once() {
    let registry = Registry::default();
    let mut subs = Subscriptions::new();
    registry.acquire(&mut subs, "scroll");
    scope_to_owner(subs);
    assert_eq!(registry.live(), 0);
}
