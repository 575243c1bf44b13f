//! Startup-time barrier checks for a concurrent garbage collector.
//!
//! A concurrent collector depends on barriers around mutator memory operations. Which barriers
//! are load-bearing depends on the GC mode: disabling one the mode relies on would silently
//! corrupt the heap. This crate resolves the mode, heuristics and barrier flags from options,
//! and refuses to start when a required barrier is disabled.
//!
//! * [`plan`]: barrier kinds, modes, the requirement table and the validator.
//! * [`util::options`]: option processing from the command line and `GCBARRIER_*` environment
//!   variables.
//! * [`memory_manager`]: the entry points a host calls during startup.

pub mod build_info;
pub mod error;
pub mod memory_manager;
pub mod plan;
mod startup;
pub mod util;

pub use crate::error::{OptionError, StartupError};
pub use crate::plan::{Barrier, BarrierConfig, GCMode, Heuristic, MissingBarrier, ValidationResult};
pub use crate::startup::{GCBuilder, UnvalidatedStartup, ValidatedStartup};
