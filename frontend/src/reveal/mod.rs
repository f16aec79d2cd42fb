//! Scroll-driven entrance animations.
//!
//! A section attaches a watcher to one of its nodes and gets back a signal it
//! maps onto a `visible`/`revealed` CSS class:
//!
//! - [`VisibilityWatcher`]: one node, one flag, flipped the first time the node
//!   enters the viewport.
//! - [`StaggerSequencer`]: one group node; once it enters, item `i` is revealed
//!   `i * delay` after the trigger.
//! - [`ItemWatcher`]: one node per list item, each revealed on its own.
//!
//! Every watcher observes until its first qualifying intersection and then
//! unobserves. Teardown cancels whatever is still live (observations and
//! pending timers), after which no callback can touch the section again.
//!
//! The watchers only talk to the page through [`Viewport`] and [`Timers`], so
//! they run against the browser ([`browser`]) or against deterministic fakes
//! in tests.

pub mod browser;
pub mod config;
pub mod geometry;
pub mod hooks;
pub mod items;
pub mod primitives;
pub mod stagger;
pub mod state;
pub mod watch;

#[cfg(test)]
pub mod testing;

pub use config::{RevealConfig, RevealError};
pub use hooks::{use_item_reveal, use_mount_reveal, use_scroll_reveal, use_stagger_reveal};
pub use items::ItemWatcher;
pub use primitives::{Timers, Viewport};
pub use stagger::{StaggerSequencer, DEFAULT_STAGGER_MS};
pub use state::RevealedSet;
pub use watch::VisibilityWatcher;
