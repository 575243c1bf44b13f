use std::fmt;

use super::barriers::{Barrier, BarrierConfig};
use super::mode::{GCMode, Heuristic};
use super::requirements::required_barriers;

/// A barrier the active mode needs but the configuration disabled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MissingBarrier {
    pub barrier: Barrier,
    pub mode: GCMode,
}

impl fmt::Display for MissingBarrier {
    // The "GC mode needs <flag> ... to work correctly" wording is matched by external harnesses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GC mode needs {} to work correctly ({} mode)",
            self.barrier, self.mode
        )
    }
}

/// The outcome of checking a barrier configuration against a mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Pass,
    /// Never empty. Ordered by the requirement table.
    Fail(Vec<MissingBarrier>),
}

impl ValidationResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, ValidationResult::Pass)
    }

    pub fn missing(&self) -> &[MissingBarrier] {
        match self {
            ValidationResult::Pass => &[],
            ValidationResult::Fail(missing) => missing,
        }
    }
}

/// Check that every barrier `mode` needs under `heuristic` is enabled in `config`.
///
/// Barriers outside the required set may be disabled freely.
pub fn validate(mode: GCMode, heuristic: Heuristic, config: &BarrierConfig) -> ValidationResult {
    let missing: Vec<MissingBarrier> = required_barriers(mode, heuristic)
        .iter()
        .filter(|barrier| config.is_disabled(*barrier))
        .map(|barrier| MissingBarrier { barrier, mode })
        .collect();

    if missing.is_empty() {
        ValidationResult::Pass
    } else {
        ValidationResult::Fail(missing)
    }
}
