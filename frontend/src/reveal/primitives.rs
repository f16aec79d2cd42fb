use super::config::{RevealConfig, RevealError};

/// Something that can tell when a node enters the viewport.
///
/// Every `observe` call creates an independent observation; the watcher keeps
/// the returned value for as long as it may still need to `unobserve` it.
pub trait Viewport {
    type Node: Clone + 'static;
    type Observation: 'static;

    /// Starts watching `node`. `on_enter` runs every time the node is reported
    /// visible at or above `config.threshold` inside the margin-adjusted root,
    /// until the observation is unobserved. Reports below the threshold never
    /// reach it.
    fn observe(
        &self,
        node: &Self::Node,
        config: &RevealConfig,
        on_enter: Box<dyn FnMut()>,
    ) -> Result<Self::Observation, RevealError>;

    /// Stops deliveries for `observation`. Calling this more than once is a no-op.
    fn unobserve(&self, observation: &Self::Observation);
}

/// Delayed one-shot actions.
pub trait Timers {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, action: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancelling a handle that already fired, or was cancelled before, is a no-op.
    fn cancel(&self, handle: Self::Handle);
}
