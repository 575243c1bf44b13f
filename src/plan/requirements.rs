//! The barriers each mode needs.
//!
//! Concurrent (SATB) marking needs the previous value of an overwritten reference to keep its
//! snapshot intact, so it needs [`Barrier::SATBEnqueue`]. Incremental-update marking re-scans
//! updated locations instead, so it needs [`Barrier::StoreValEnqueue`]. Both concurrent modes
//! evacuate while mutators run, which makes load-reference, CAS and clone interception
//! load-bearing regardless of heuristics. Passive mode never runs concurrently with the
//! mutator, so it needs nothing.

use super::barriers::Barrier;
use super::mode::{GCMode, Heuristic};

const SATB_BARRIERS: &[Barrier] = &[
    Barrier::LoadReference,
    Barrier::SATBEnqueue,
    Barrier::CompareAndSwap,
    Barrier::Clone,
];

const IU_BARRIERS: &[Barrier] = &[
    Barrier::LoadReference,
    Barrier::StoreValEnqueue,
    Barrier::CompareAndSwap,
    Barrier::Clone,
];

const NO_BARRIERS: &[Barrier] = &[];

/// The barriers a `(mode, heuristic)` pair needs, in table order.
///
/// Diagnostics are reported in this order, so it is fixed per mode and does not depend on
/// how the barriers were disabled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RequirementSet {
    barriers: &'static [Barrier],
}

impl RequirementSet {
    pub fn iter(&self) -> impl Iterator<Item = Barrier> + 'static {
        self.barriers.iter().copied()
    }

    pub fn contains(&self, barrier: Barrier) -> bool {
        self.barriers.contains(&barrier)
    }

    pub fn is_empty(&self) -> bool {
        self.barriers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.barriers.len()
    }

    pub fn as_slice(&self) -> &'static [Barrier] {
        self.barriers
    }
}

/// Look up the barriers required by `mode` under `heuristic`.
///
/// The match is exhaustive on purpose: a new mode or heuristic does not compile until it has a
/// row here.
pub fn required_barriers(mode: GCMode, heuristic: Heuristic) -> RequirementSet {
    let barriers = match (mode, heuristic) {
        (
            GCMode::Concurrent,
            Heuristic::Adaptive | Heuristic::Static | Heuristic::Compact | Heuristic::Aggressive,
        ) => SATB_BARRIERS,
        // Heuristics do not apply to the remaining modes.
        (GCMode::IncrementalUpdate, _) => IU_BARRIERS,
        (GCMode::Passive, _) => NO_BARRIERS,
    };
    RequirementSet { barriers }
}
