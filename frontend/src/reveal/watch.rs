use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use super::config::RevealConfig;
use super::primitives::Viewport;

/// Lifecycle of one observed anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No node bound yet, nothing observed.
    Idle,
    Observing,
    /// The qualifying intersection happened and the observation was dropped.
    Fired,
    /// Torn down before firing.
    Released,
}

struct WatchState<V: Viewport> {
    phase: Phase,
    observation: Option<V::Observation>,
}

/// Flips a visibility flag the first time its anchor enters the viewport.
pub struct VisibilityWatcher<V: Viewport> {
    viewport: V,
    config: RevealConfig,
    state: Rc<RefCell<WatchState<V>>>,
    on_reveal: Rc<dyn Fn()>,
}

impl<V: Viewport + Clone + 'static> VisibilityWatcher<V> {
    pub fn new(viewport: V, config: RevealConfig, on_reveal: impl Fn() + 'static) -> Self {
        Self {
            viewport,
            config,
            state: Rc::new(RefCell::new(WatchState {
                phase: Phase::Idle,
                observation: None,
            })),
            on_reveal: Rc::new(on_reveal),
        }
    }

    /// Starts observing `node`. Without a node the watcher stays idle for good.
    pub fn attach(&self, node: Option<&V::Node>) {
        let Some(node) = node else {
            debug!("Reveal anchor has no node, staying hidden");
            return;
        };
        {
            let mut state = self.state.borrow_mut();
            if state.phase != Phase::Idle {
                return;
            }
            state.phase = Phase::Observing;
        }

        let on_enter = {
            let viewport = self.viewport.clone();
            let state = Rc::clone(&self.state);
            let on_reveal = Rc::clone(&self.on_reveal);
            Box::new(move || Self::enter(&viewport, &state, &*on_reveal))
        };

        // Deliveries may happen inside observe, before the observation is stored
        match self.viewport.observe(node, &self.config, on_enter) {
            Ok(observation) => {
                let mut state = self.state.borrow_mut();
                if state.phase != Phase::Observing {
                    self.viewport.unobserve(&observation);
                }
                state.observation = Some(observation);
            }
            Err(err) => {
                warn!("{}, revealing without waiting for scroll", err);
                Self::enter(&self.viewport, &self.state, &*self.on_reveal);
            }
        }
    }

    fn enter(viewport: &V, state: &RefCell<WatchState<V>>, on_reveal: &dyn Fn()) {
        {
            let mut state = state.borrow_mut();
            if state.phase != Phase::Observing {
                return;
            }
            state.phase = Phase::Fired;
            if let Some(observation) = state.observation.as_ref() {
                viewport.unobserve(observation);
            }
        }
        debug!("Reveal anchor entered the viewport");
        on_reveal();
    }
}

impl<V: Viewport> VisibilityWatcher<V> {
    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    /// Cancels any live observation. Safe to call more than once.
    pub fn teardown(&self) {
        let observation = {
            let mut state = self.state.borrow_mut();
            if state.phase == Phase::Observing || state.phase == Phase::Idle {
                state.phase = Phase::Released;
            }
            state.observation.take()
        };
        if let Some(observation) = observation {
            self.viewport.unobserve(&observation);
        }
    }
}

impl<V: Viewport> Drop for VisibilityWatcher<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}
