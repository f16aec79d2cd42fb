use std::collections::BTreeSet;
use std::rc::Rc;

use yew::prelude::*;

/// Snapshot of revealed item indices. Adding an index produces a new snapshot;
/// existing snapshots never change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealedSet {
    indices: Rc<BTreeSet<usize>>,
}

impl RevealedSet {
    pub fn with(&self, index: usize) -> Self {
        if self.contains(index) {
            return self.clone();
        }
        let mut indices = (*self.indices).clone();
        indices.insert(index);
        Self {
            indices: Rc::new(indices),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Reducible for RevealedSet {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        if self.contains(index) {
            // Same Rc, so the component does not re-render
            self
        } else {
            Rc::new(self.with(index))
        }
    }
}
