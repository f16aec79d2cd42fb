//! Deterministic stand-ins for the browser's intersection observer and timers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::config::{RevealConfig, RevealError};
use super::geometry::{crosses_threshold, Rect};
use super::primitives::{Timers, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimNode(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationId(usize);

type EnterCallback = Rc<RefCell<Box<dyn FnMut()>>>;

struct SimObservation {
    node: SimNode,
    config: RevealConfig,
    on_enter: EnterCallback,
    live: bool,
}

struct Sim {
    root: Rect,
    layout: HashMap<SimNode, Rect>,
    observations: Vec<SimObservation>,
    fail_observe: bool,
    unobserve_calls: usize,
}

/// A scrollable page with fixed node boxes. Observations fire synchronously:
/// on `observe` when the node is already in view, and on every `scroll_to`
/// that leaves it in view.
#[derive(Clone)]
pub struct SimulatedViewport {
    sim: Rc<RefCell<Sim>>,
}

impl SimulatedViewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            sim: Rc::new(RefCell::new(Sim {
                root: Rect::new(0.0, 0.0, width, height),
                layout: HashMap::new(),
                observations: Vec::new(),
                fail_observe: false,
                unobserve_calls: 0,
            })),
        }
    }

    pub fn place(&self, rect: Rect) -> SimNode {
        let mut sim = self.sim.borrow_mut();
        let node = SimNode(sim.layout.len());
        sim.layout.insert(node, rect);
        node
    }

    pub fn fail_observe(&self) {
        self.sim.borrow_mut().fail_observe = true;
    }

    pub fn scroll_to(&self, top: f64) {
        let due = {
            let mut sim = self.sim.borrow_mut();
            sim.root.y = top;
            let sim = &*sim;
            sim.observations
                .iter()
                .filter(|o| o.live && Self::in_view(sim, o.node, &o.config))
                .map(|o| Rc::clone(&o.on_enter))
                .collect::<Vec<_>>()
        };
        for callback in due {
            let mut on_enter = callback.borrow_mut();
            (*on_enter)();
        }
    }

    /// Replays an intersection report for `node` to every observation ever made
    /// on it, unobserved or not, the way an already queued batch would arrive.
    pub fn deliver_stale(&self, node: SimNode) {
        let all = self
            .sim
            .borrow()
            .observations
            .iter()
            .filter(|o| o.node == node)
            .map(|o| Rc::clone(&o.on_enter))
            .collect::<Vec<_>>();
        for callback in all {
            let mut on_enter = callback.borrow_mut();
            (*on_enter)();
        }
    }

    pub fn live_observations(&self) -> usize {
        self.sim.borrow().observations.iter().filter(|o| o.live).count()
    }

    pub fn observed_nodes(&self) -> Vec<SimNode> {
        self.sim
            .borrow()
            .observations
            .iter()
            .map(|o| o.node)
            .collect()
    }

    pub fn unobserve_calls(&self) -> usize {
        self.sim.borrow().unobserve_calls
    }

    fn in_view(sim: &Sim, node: SimNode, config: &RevealConfig) -> bool {
        sim.layout
            .get(&node)
            .map_or(false, |rect| crosses_threshold(rect, &sim.root, config))
    }
}

impl Viewport for SimulatedViewport {
    type Node = SimNode;
    type Observation = ObservationId;

    fn observe(
        &self,
        node: &SimNode,
        config: &RevealConfig,
        on_enter: Box<dyn FnMut()>,
    ) -> Result<ObservationId, RevealError> {
        let (id, on_enter, in_view) = {
            let mut sim = self.sim.borrow_mut();
            if sim.fail_observe {
                return Err(RevealError::Observe("observer unavailable".to_string()));
            }
            let on_enter: EnterCallback = Rc::new(RefCell::new(on_enter));
            let in_view = Self::in_view(&sim, *node, config);
            sim.observations.push(SimObservation {
                node: *node,
                config: *config,
                on_enter: Rc::clone(&on_enter),
                live: true,
            });
            (ObservationId(sim.observations.len() - 1), on_enter, in_view)
        };
        if in_view {
            let mut on_enter = on_enter.borrow_mut();
            (*on_enter)();
        }
        Ok(id)
    }

    fn unobserve(&self, observation: &ObservationId) {
        let mut sim = self.sim.borrow_mut();
        sim.unobserve_calls += 1;
        if let Some(o) = sim.observations.get_mut(observation.0) {
            o.live = false;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(usize);

struct Scheduled {
    id: TimerId,
    due: u64,
    action: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: usize,
    queue: Vec<Scheduled>,
}

/// Virtual clock. Nothing fires until `advance`; due actions run in order of
/// due time, then schedule order.
#[derive(Clone, Default)]
pub struct ManualTimers {
    clock: Rc<RefCell<Clock>>,
}

impl ManualTimers {
    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let earliest = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.due <= target)
                    .min_by_key(|(_, s)| (s.due, s.id.0))
                    .map(|(i, _)| i);
                earliest.map(|i| {
                    let scheduled = clock.queue.remove(i);
                    clock.now = scheduled.due;
                    scheduled.action
                })
            };
            match next {
                Some(action) => action(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Timers for ManualTimers {
    type Handle = TimerId;

    fn schedule(&self, delay_ms: u32, action: Box<dyn FnOnce()>) -> TimerId {
        let mut clock = self.clock.borrow_mut();
        let id = TimerId(clock.next_id);
        clock.next_id += 1;
        let due = clock.now + u64::from(delay_ms);
        clock.queue.push(Scheduled { id, due, action });
        id
    }

    fn cancel(&self, handle: TimerId) {
        self.clock.borrow_mut().queue.retain(|s| s.id != handle);
    }
}

/// Records reveal callbacks together with the virtual time they arrived at.
#[derive(Clone, Default)]
pub struct RevealLog {
    entries: Rc<RefCell<Vec<(usize, u64)>>>,
}

impl RevealLog {
    pub fn sink(&self, timers: &ManualTimers) -> impl Fn(usize) + 'static {
        let entries = Rc::clone(&self.entries);
        let timers = timers.clone();
        move |index| entries.borrow_mut().push((index, timers.now()))
    }

    pub fn entries(&self) -> Vec<(usize, u64)> {
        self.entries.borrow().clone()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.entries.borrow().iter().map(|(i, _)| *i).collect()
    }
}
