use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::config::{RevealConfig, RevealError};
use super::geometry::meets_threshold;
use super::primitives::{Timers, Viewport};

/// `IntersectionObserver` backed viewport, one observer per observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

pub struct BrowserObservation {
    observer: IntersectionObserver,
    node: Element,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for BrowserObservation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl Viewport for BrowserViewport {
    type Node = Element;
    type Observation = BrowserObservation;

    fn observe(
        &self,
        node: &Element,
        config: &RevealConfig,
        mut on_enter: Box<dyn FnMut()>,
    ) -> Result<BrowserObservation, RevealError> {
        let threshold = config.threshold;
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                // isIntersecting flips on the first touching pixel, so the
                // ratio has to be checked as well
                let entered = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| {
                        meets_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold)
                    });
                if entered {
                    on_enter();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin.to_string());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| RevealError::Observe(format!("{:?}", err)))?;
        observer.observe(node);

        Ok(BrowserObservation {
            observer,
            node: node.clone(),
            _callback: callback,
        })
    }

    fn unobserve(&self, observation: &BrowserObservation) {
        observation.observer.unobserve(&observation.node);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, action: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, action)
    }

    fn cancel(&self, handle: Timeout) {
        // Dropping clears it; clearing an id that already fired does nothing
        drop(handle);
    }
}
