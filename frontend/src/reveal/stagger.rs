use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use super::config::RevealConfig;
use super::primitives::{Timers, Viewport};
use super::watch::Phase;

pub const DEFAULT_STAGGER_MS: u32 = 150;

/// Longest delay a browser timer honours; setTimeout takes a signed 32-bit
/// millisecond count and larger values fire immediately.
pub const MAX_TIMER_DELAY_MS: u32 = i32::MAX as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerParams {
    pub item_count: usize,
    pub delay_ms: u32,
}

impl StaggerParams {
    pub fn new(item_count: usize, delay_ms: u32) -> Self {
        Self {
            item_count,
            delay_ms,
        }
    }

    /// Delay before item `index` is revealed, counted from the trigger.
    /// Capped at [`MAX_TIMER_DELAY_MS`], so capped items share the last slot
    /// and still fire in index order.
    pub fn delay_for(&self, index: usize) -> u32 {
        u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.delay_ms)
            .min(MAX_TIMER_DELAY_MS)
    }

    /// Whether every item gets its full `index * delay_ms` without capping.
    pub fn fits_timer(&self) -> bool {
        let last = u64::try_from(self.item_count.saturating_sub(1)).unwrap_or(u64::MAX);
        last.saturating_mul(u64::from(self.delay_ms)) <= u64::from(MAX_TIMER_DELAY_MS)
    }
}

struct StaggerState<V: Viewport, T: Timers> {
    params: StaggerParams,
    phase: Phase,
    node: Option<V::Node>,
    observation: Option<V::Observation>,
    pending: Vec<T::Handle>,
}

/// Reveals the items of a group one after another once the group anchor
/// enters the viewport.
pub struct StaggerSequencer<V: Viewport, T: Timers> {
    viewport: V,
    timers: T,
    state: Rc<RefCell<StaggerState<V, T>>>,
    on_reveal: Rc<dyn Fn(usize)>,
}

impl<V, T> StaggerSequencer<V, T>
where
    V: Viewport + Clone + 'static,
    T: Timers + Clone + 'static,
{
    pub fn new(
        viewport: V,
        timers: T,
        params: StaggerParams,
        on_reveal: impl Fn(usize) + 'static,
    ) -> Self {
        Self {
            viewport,
            timers,
            state: Rc::new(RefCell::new(StaggerState {
                params,
                phase: Phase::Idle,
                node: None,
                observation: None,
                pending: Vec::new(),
            })),
            on_reveal: Rc::new(on_reveal),
        }
    }

    pub fn attach(&self, node: Option<&V::Node>) {
        let Some(node) = node else {
            debug!("Stagger anchor has no node, items stay hidden");
            return;
        };
        {
            let mut state = self.state.borrow_mut();
            if state.phase != Phase::Idle {
                return;
            }
            state.node = Some(node.clone());
        }
        self.arm();
    }

    /// Applies a new item count or interval. Before the trigger this re-arms
    /// the observation; afterwards the running schedule is left alone.
    /// Indices that are already revealed stay revealed either way.
    pub fn set_params(&self, params: StaggerParams) {
        let rearm = {
            let mut state = self.state.borrow_mut();
            if state.params == params {
                return;
            }
            match state.phase {
                Phase::Fired | Phase::Released => {
                    debug!("Stagger already triggered, ignoring {:?}", params);
                    return;
                }
                Phase::Idle => {
                    state.params = params;
                    false
                }
                Phase::Observing => {
                    state.params = params;
                    true
                }
            }
        };
        if rearm {
            self.disarm();
            self.arm();
        }
    }

    fn arm(&self) {
        let node = {
            let mut state = self.state.borrow_mut();
            let Some(node) = state.node.clone() else {
                return;
            };
            state.phase = Phase::Observing;
            node
        };

        let on_enter = {
            let viewport = self.viewport.clone();
            let timers = self.timers.clone();
            let state = Rc::clone(&self.state);
            let on_reveal = Rc::clone(&self.on_reveal);
            Box::new(move || Self::trigger(&viewport, &timers, &state, &on_reveal))
        };

        match self.viewport.observe(&node, &RevealConfig::DEFAULT, on_enter) {
            Ok(observation) => {
                let mut state = self.state.borrow_mut();
                if state.phase != Phase::Observing {
                    self.viewport.unobserve(&observation);
                }
                state.observation = Some(observation);
            }
            Err(err) => {
                warn!("{}, revealing items without waiting for scroll", err);
                Self::trigger(&self.viewport, &self.timers, &self.state, &self.on_reveal);
            }
        }
    }

    fn trigger(
        viewport: &V,
        timers: &T,
        state: &RefCell<StaggerState<V, T>>,
        on_reveal: &Rc<dyn Fn(usize)>,
    ) {
        let params = {
            let mut state = state.borrow_mut();
            if state.phase != Phase::Observing {
                return;
            }
            state.phase = Phase::Fired;
            if let Some(observation) = state.observation.as_ref() {
                viewport.unobserve(observation);
            }
            state.params
        };

        debug!(
            "Stagger anchor entered the viewport, scheduling {} items every {}ms",
            params.item_count, params.delay_ms
        );
        if !params.fits_timer() {
            warn!("Stagger delays past {}ms are capped", MAX_TIMER_DELAY_MS);
        }
        let handles = (0..params.item_count)
            .map(|index| {
                let on_reveal = Rc::clone(on_reveal);
                timers.schedule(params.delay_for(index), Box::new(move || on_reveal(index)))
            })
            .collect::<Vec<_>>();
        state.borrow_mut().pending.extend(handles);
    }
}

impl<V: Viewport, T: Timers> StaggerSequencer<V, T> {
    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    pub fn params(&self) -> StaggerParams {
        self.state.borrow().params
    }

    /// Drops the current observation and any scheduled reveals.
    fn disarm(&self) {
        let (observation, pending) = {
            let mut state = self.state.borrow_mut();
            (state.observation.take(), std::mem::take(&mut state.pending))
        };
        if let Some(observation) = observation {
            self.viewport.unobserve(&observation);
        }
        for handle in pending {
            self.timers.cancel(handle);
        }
    }

    /// Cancels the observation and every reveal that has not fired yet.
    pub fn teardown(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.phase == Phase::Observing || state.phase == Phase::Idle {
                state.phase = Phase::Released;
            }
        }
        self.disarm();
    }
}

impl<V: Viewport, T: Timers> Drop for StaggerSequencer<V, T> {
    fn drop(&mut self) {
        self.teardown();
    }
}
