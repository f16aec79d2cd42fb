use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use super::browser::{BrowserTimers, BrowserViewport};
use super::config::RevealConfig;
use super::items::ItemWatcher;
use super::stagger::{StaggerParams, StaggerSequencer};
use super::state::RevealedSet;
use super::watch::VisibilityWatcher;

type BrowserSequencer = StaggerSequencer<BrowserViewport, BrowserTimers>;

/// Returns a ref to put on the section and whether it has been seen yet.
#[hook]
pub fn use_scroll_reveal(config: RevealConfig) -> (NodeRef, bool) {
    let node_ref = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node_ref = node_ref.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let watcher =
                    VisibilityWatcher::new(BrowserViewport, config, move || visible.set(true));
                watcher.attach(node_ref.cast::<Element>().as_ref());
                move || watcher.teardown()
            },
            (),
        );
    }

    (node_ref, *visible)
}

/// Reveals `item_count` children one by one, `delay_ms` apart, once the
/// group node scrolls into view.
#[hook]
pub fn use_stagger_reveal(item_count: usize, delay_ms: u32) -> (NodeRef, RevealedSet) {
    let node_ref = use_node_ref();
    let revealed = use_reducer(RevealedSet::default);
    let sequencer = use_mut_ref(|| None::<BrowserSequencer>);

    {
        let node_ref = node_ref.clone();
        let revealed = revealed.clone();
        let sequencer = sequencer.clone();
        use_effect_with_deps(
            move |_| {
                let created = StaggerSequencer::new(
                    BrowserViewport,
                    BrowserTimers,
                    StaggerParams::new(item_count, delay_ms),
                    move |index| revealed.dispatch(index),
                );
                created.attach(node_ref.cast::<Element>().as_ref());
                *sequencer.borrow_mut() = Some(created);

                move || {
                    let live = sequencer.borrow_mut().take();
                    if let Some(live) = live {
                        live.teardown();
                    }
                }
            },
            (),
        );
    }

    {
        let sequencer = sequencer.clone();
        use_effect_with_deps(
            move |&(item_count, delay_ms)| {
                if let Some(live) = sequencer.borrow().as_ref() {
                    live.set_params(StaggerParams::new(item_count, delay_ms));
                }
                || ()
            },
            (item_count, delay_ms),
        );
    }

    (node_ref, (*revealed).clone())
}

/// One ref per list item; each item reveals when it is itself in view.
/// A new item count rebuilds the refs and re-observes, keeping what was
/// already revealed.
#[hook]
pub fn use_item_reveal(item_count: usize) -> (Rc<Vec<NodeRef>>, RevealedSet) {
    let refs = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        item_count,
    );
    let revealed = use_reducer(RevealedSet::default);

    {
        let refs = refs.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let watcher = ItemWatcher::new(
                    BrowserViewport,
                    RevealConfig::ITEMS,
                    refs.len(),
                    move |index| revealed.dispatch(index),
                );
                let nodes = refs
                    .iter()
                    .map(|node_ref| node_ref.cast::<Element>())
                    .collect::<Vec<_>>();
                watcher.attach_all(&nodes);
                move || watcher.teardown()
            },
            item_count,
        );
    }

    (refs, (*revealed).clone())
}

/// `true` once `delay_ms` have passed since mount.
#[hook]
pub fn use_mount_reveal(delay_ms: u32) -> bool {
    let loaded = use_state_eq(|| false);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(delay_ms, move || loaded.set(true));
                // Dropping a pending Timeout clears it
                move || drop(timeout)
            },
            (),
        );
    }

    *loaded
}
