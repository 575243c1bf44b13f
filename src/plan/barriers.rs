//! Barrier kinds and the per-barrier enable flags.

use enum_map::{Enum, EnumMap};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// A barrier the collector may install around a mutator memory operation.
///
/// The set of barrier kinds is closed. The `Display`/`FromStr` form is the flag
/// identifier used on the command line and in diagnostics, e.g. `LoadRefBarrier`.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enum, Display, EnumString, EnumIter,
    IntoStaticStr,
)]
pub enum Barrier {
    /// Intercepts reference loads so that forwarded objects are resolved.
    #[strum(to_string = "LoadRefBarrier")]
    LoadReference,
    /// Snapshot-at-the-beginning: records the previous value of a reference field at first write.
    #[strum(to_string = "SATBBarrier")]
    SATBEnqueue,
    /// Incremental update: records the new value written to a reference field.
    #[strum(to_string = "StoreValEnqueueBarrier")]
    StoreValEnqueue,
    /// Intercepts compare-and-swap on reference fields.
    #[strum(to_string = "CASBarrier")]
    CompareAndSwap,
    /// Intercepts bulk object clone/copy.
    #[strum(to_string = "CloneBarrier")]
    Clone,
}

impl Barrier {
    /// The identifier of this barrier as it appears in option names and diagnostics.
    pub fn flag_name(self) -> &'static str {
        self.into()
    }
}

/// The resolved on/off state of every barrier.
///
/// Built once from the options at startup and read-only afterwards. Every barrier is
/// enabled unless it is explicitly disabled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarrierConfig {
    enabled: EnumMap<Barrier, bool>,
}

impl BarrierConfig {
    /// A configuration with every barrier enabled.
    pub fn all_enabled() -> Self {
        Self {
            enabled: EnumMap::from_fn(|_| true),
        }
    }

    /// A configuration with every barrier enabled except those in `disabled`.
    pub fn with_disabled<I: IntoIterator<Item = Barrier>>(disabled: I) -> Self {
        let mut config = Self::all_enabled();
        for barrier in disabled {
            config.enabled[barrier] = false;
        }
        config
    }

    pub fn from_map(enabled: EnumMap<Barrier, bool>) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self, barrier: Barrier) -> bool {
        self.enabled[barrier]
    }

    pub fn is_disabled(&self, barrier: Barrier) -> bool {
        !self.is_enabled(barrier)
    }

    /// Disabled barriers, in declaration order.
    pub fn disabled(&self) -> impl Iterator<Item = Barrier> + '_ {
        self.enabled
            .iter()
            .filter(|(_, enabled)| !**enabled)
            .map(|(barrier, _)| barrier)
    }
}

impl Default for BarrierConfig {
    fn default() -> Self {
        Self::all_enabled()
    }
}
