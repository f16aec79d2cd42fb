use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use super::config::RevealConfig;
use super::primitives::Viewport;
use super::watch::Phase;

struct Tracked<V: Viewport> {
    phase: Phase,
    observation: Option<V::Observation>,
}

type Slots<V> = RefCell<Box<[Option<Tracked<V>>]>>;

/// Watches each item of a list on its own; every item reveals the first time
/// it is itself in view, regardless of its neighbours.
pub struct ItemWatcher<V: Viewport> {
    viewport: V,
    config: RevealConfig,
    slots: Rc<Slots<V>>,
    on_reveal: Rc<dyn Fn(usize)>,
}

impl<V: Viewport + Clone + 'static> ItemWatcher<V> {
    pub fn new(
        viewport: V,
        config: RevealConfig,
        capacity: usize,
        on_reveal: impl Fn(usize) + 'static,
    ) -> Self {
        let slots = (0..capacity).map(|_| None).collect::<Vec<_>>();
        Self {
            viewport,
            config,
            slots: Rc::new(RefCell::new(slots.into_boxed_slice())),
            on_reveal: Rc::new(on_reveal),
        }
    }

    /// Observes every present node. Absent nodes leave their slot empty.
    pub fn attach_all(&self, nodes: &[Option<V::Node>]) {
        for (index, node) in nodes.iter().enumerate() {
            if let Some(node) = node {
                self.track(index, node);
            }
        }
    }

    pub fn track(&self, index: usize, node: &V::Node) {
        {
            let mut slots = self.slots.borrow_mut();
            let capacity = slots.len();
            let Some(slot) = slots.get_mut(index) else {
                warn!("Item {} is outside the {} tracked slots", index, capacity);
                return;
            };
            if slot.is_some() {
                return;
            }
            *slot = Some(Tracked {
                phase: Phase::Observing,
                observation: None,
            });
        }

        let on_enter = {
            let viewport = self.viewport.clone();
            let slots = Rc::clone(&self.slots);
            let on_reveal = Rc::clone(&self.on_reveal);
            Box::new(move || Self::enter(&viewport, &slots, index, &*on_reveal))
        };

        match self.viewport.observe(node, &self.config, on_enter) {
            Ok(observation) => {
                let mut slots = self.slots.borrow_mut();
                match slots.get_mut(index) {
                    Some(Some(tracked)) => {
                        if tracked.phase != Phase::Observing {
                            self.viewport.unobserve(&observation);
                        }
                        tracked.observation = Some(observation);
                    }
                    _ => self.viewport.unobserve(&observation),
                }
            }
            Err(err) => {
                warn!("{}, revealing item {} without waiting for scroll", err, index);
                Self::enter(&self.viewport, &self.slots, index, &*self.on_reveal);
            }
        }
    }

    fn enter(viewport: &V, slots: &Slots<V>, index: usize, on_reveal: &dyn Fn(usize)) {
        {
            let mut slots = slots.borrow_mut();
            let Some(Some(tracked)) = slots.get_mut(index) else {
                return;
            };
            if tracked.phase != Phase::Observing {
                return;
            }
            tracked.phase = Phase::Fired;
            if let Some(observation) = tracked.observation.as_ref() {
                viewport.unobserve(observation);
            }
        }
        debug!("Item {} entered the viewport", index);
        on_reveal(index);
    }
}

impl<V: Viewport> ItemWatcher<V> {
    /// Cancels every observation that is still registered. Empty slots are
    /// skipped.
    pub fn teardown(&self) {
        let observations = {
            let mut slots = self.slots.borrow_mut();
            slots
                .iter_mut()
                .flatten()
                .filter_map(|tracked| {
                    if tracked.phase == Phase::Observing {
                        tracked.phase = Phase::Released;
                    }
                    tracked.observation.take()
                })
                .collect::<Vec<_>>()
        };
        for observation in &observations {
            self.viewport.unobserve(observation);
        }
    }
}

impl<V: Viewport> Drop for ItemWatcher<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::geometry::Rect;
    use crate::reveal::state::RevealedSet;
    use crate::reveal::testing::{SimNode, SimulatedViewport};

    const CARD_HEIGHT: f64 = 500.0;

    /// Three cards stacked 1000px apart, starting at y = 1000.
    fn cards(viewport: &SimulatedViewport) -> Vec<Option<SimNode>> {
        (0..3u32)
            .map(|i| {
                let top = 1000.0 + f64::from(i) * 1000.0;
                Some(viewport.place(Rect::new(0.0, top, 1000.0, CARD_HEIGHT)))
            })
            .collect()
    }

    fn watcher(
        viewport: &SimulatedViewport,
        capacity: usize,
    ) -> (ItemWatcher<SimulatedViewport>, Rc<RefCell<RevealedSet>>, Rc<RefCell<Vec<usize>>>) {
        let revealed = Rc::new(RefCell::new(RevealedSet::default()));
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let revealed = Rc::clone(&revealed);
            let calls = Rc::clone(&calls);
            move |index| {
                calls.borrow_mut().push(index);
                let next = revealed.borrow().with(index);
                *revealed.borrow_mut() = next;
            }
        };
        let watcher = ItemWatcher::new(viewport.clone(), RevealConfig::ITEMS, capacity, sink);
        (watcher, revealed, calls)
    }

    #[test]
    fn only_the_item_in_view_reveals() {
        let viewport = SimulatedViewport::new(1000.0, 800.0);
        let nodes = cards(&viewport);
        let (watcher, revealed, _) = watcher(&viewport, 3);
        watcher.attach_all(&nodes);
        assert_eq!(viewport.live_observations(), 3);

        // Card 1 spans 2000..2500; the inset test box is 1850..2550
        viewport.scroll_to(1_800.0);
        let revealed = revealed.borrow().clone();
        assert!(revealed.contains(1));
        assert!(!revealed.contains(0));
        assert!(!revealed.contains(2));
        assert_eq!(viewport.live_observations(), 2);
    }

    #[test]
    fn items_reveal_out_of_order() {
        let viewport = SimulatedViewport::new(1000.0, 800.0);
        let nodes = cards(&viewport);
        let (watcher, revealed, calls) = watcher(&viewport, 3);
        watcher.attach_all(&nodes);

        viewport.scroll_to(2_800.0);
        viewport.scroll_to(800.0);
        viewport.scroll_to(1_800.0);

        assert_eq!(*calls.borrow(), vec![2, 0, 1]);
        assert_eq!(revealed.borrow().len(), 3);
        assert_eq!(viewport.live_observations(), 0);
    }

    #[test]
    fn inset_margin_needs_the_item_well_inside() {
        let viewport = SimulatedViewport::new(1000.0, 800.0);
        let nodes = cards(&viewport);
        let (watcher, revealed, _) = watcher(&viewport, 3);
        watcher.attach_all(&nodes);

        // Card 0 peeks 190px above the fold: 38% visible but only 140px of it
        // inside the inset box, which is under the 0.3 threshold
        viewport.scroll_to(390.0);
        assert!(revealed.borrow().is_empty());

        viewport.scroll_to(500.0);
        assert!(revealed.borrow().contains(0));
    }

    #[test]
    fn touching_the_inset_box_is_not_enough() {
        let viewport = SimulatedViewport::new(1000.0, 800.0);
        let nodes = cards(&viewport);
        let (watcher, revealed, calls) = watcher(&viewport, 3);
        watcher.attach_all(&nodes);

        // 10px of card 0 inside the inset box, then 149px
        viewport.scroll_to(260.0);
        viewport.scroll_to(399.0);
        assert!(calls.borrow().is_empty());
        assert_eq!(viewport.live_observations(), 3);

        // Exactly 150px of 500px
        viewport.scroll_to(400.0);
        assert_eq!(*calls.borrow(), vec![0]);
        assert!(revealed.borrow().contains(0));
    }

    #[test]
    fn repeated_reports_are_ignored() {
        let viewport = SimulatedViewport::new(1000.0, 800.0);
        let nodes = cards(&viewport);
        let (watcher, revealed, calls) = watcher(&viewport, 3);
        watcher.attach_all(&nodes);

        let card = nodes[1].unwrap();
        viewport.scroll_to(1_800.0);
        viewport.deliver_stale(card);
        viewport.scroll_to(1_900.0);
        viewport.deliver_stale(card);

        assert_eq!(*calls.borrow(), vec![1]);
        assert_eq!(revealed.borrow().len(), 1);
    }

    #[test]
    fn empty_slots_are_never_observed_or_cancelled() {
        let viewport = SimulatedViewport::new(1000.0, 800.0);
        let mut nodes = cards(&viewport);
        nodes[0] = None;
        nodes[2] = None;
        let present = nodes[1].unwrap();

        let (watcher, revealed, _) = watcher(&viewport, 3);
        watcher.attach_all(&nodes);
        assert_eq!(viewport.observed_nodes(), vec![present]);

        watcher.teardown();
        assert_eq!(viewport.unobserve_calls(), 1);
        assert_eq!(viewport.live_observations(), 0);
        viewport.scroll_to(1_800.0);
        assert!(revealed.borrow().is_empty());
    }

    #[test]
    fn teardown_only_cancels_live_observations() {
        let viewport = SimulatedViewport::new(1000.0, 800.0);
        let nodes = cards(&viewport);
        let (watcher, revealed, _) = watcher(&viewport, 3);
        watcher.attach_all(&nodes);

        viewport.scroll_to(800.0);
        assert_eq!(viewport.unobserve_calls(), 1);

        // Card 0 already fired; the other two are still live. The fired
        // observation is released once more, which is a no-op.
        drop(watcher);
        assert_eq!(viewport.live_observations(), 0);
        viewport.scroll_to(1_800.0);
        viewport.scroll_to(2_800.0);
        for node in nodes.iter().flatten() {
            viewport.deliver_stale(*node);
        }
        assert_eq!(revealed.borrow().len(), 1);
    }

    #[test]
    fn nodes_beyond_capacity_are_ignored() {
        let viewport = SimulatedViewport::new(1000.0, 800.0);
        let nodes = cards(&viewport);
        let (watcher, _, _) = watcher(&viewport, 2);
        watcher.attach_all(&nodes);
        assert_eq!(viewport.observed_nodes().len(), 2);
    }

    #[test]
    fn item_already_in_view_reveals_on_attach() {
        let viewport = SimulatedViewport::new(1000.0, 800.0);
        let first = viewport.place(Rect::new(0.0, 100.0, 1000.0, 300.0));
        let (watcher, revealed, _) = watcher(&viewport, 1);
        watcher.attach_all(&[Some(first)]);

        assert!(revealed.borrow().contains(0));
        assert_eq!(viewport.live_observations(), 0);
    }
}
