//! Host-to-collector interface for startup.
//!
//! A host is expected to start the collector in the following steps:
//!
//! 1. Create a [`GCBuilder`] with [`GCBuilder::new`], which also picks up `GCBARRIER_*`
//!    environment variables.
//! 2. Set command line options with [`process`] or [`process_bulk`].
//! 3. Call [`gc_init`]. It checks that the selected GC mode has every barrier it needs. On
//!    failure the host must stop initialization before any collection phase can run, print each
//!    line of [`StartupError::diagnostics`] and exit with [`StartupError::exit_code`].
//!
//! Option errors are reported by steps 1 and 2 and never fall back to a default value.

use itertools::Itertools;

use crate::error::{OptionError, Result, StartupError};
use crate::startup::{GCBuilder, ValidatedStartup};
use crate::util::log::{debug, error, info};

/// Process an option by its camel case name, e.g. `GCMode` or `LoadRefBarrier`.
pub fn process(builder: &mut GCBuilder, name: &str, value: &str) -> Result<(), OptionError> {
    builder.options.set_from_camelcase_str(name, value)
}

/// Process a whitespace-separated list of snake case `name=value` pairs.
pub fn process_bulk(builder: &mut GCBuilder, options: &str) -> Result<(), OptionError> {
    builder.set_options_bulk_by_str(options)
}

/// Resolve and check the configuration held by `builder`.
///
/// This attempts to initialize a logger. A host that wants its own logger should install it
/// before calling this.
pub fn gc_init(builder: &GCBuilder) -> Result<ValidatedStartup> {
    match crate::util::logger::try_init() {
        Ok(_) => debug!("Initialized the logger."),
        Err(_) => debug!(
            "Failed to initialize the logger. Possibly a logger has been initialized by user."
        ),
    }

    let unvalidated = builder.build();
    info!(
        "GC mode: {}, heuristics: {}, disabled barriers: [{}]",
        unvalidated.mode(),
        unvalidated.heuristic(),
        unvalidated.barriers().disabled().join(", ")
    );
    if !unvalidated.mode().is_concurrent() {
        debug!(
            "Heuristics {} are not used in {} mode",
            unvalidated.heuristic(),
            unvalidated.mode()
        );
    }

    let result = unvalidated.validate();
    match &result {
        Ok(startup) => debug!(
            "Barrier check passed. Required: [{}]",
            startup.required_barriers().iter().join(", ")
        ),
        Err(StartupError::MissingBarriers(missing)) => {
            for m in missing {
                error!("{}", m);
            }
        }
        Err(e) => error!("{}", e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{Barrier, GCMode, Heuristic, MissingBarrier};

    #[test]
    fn process_camelcase_options() {
        let mut builder = GCBuilder::new_no_env_vars();
        process(&mut builder, "GCMode", "iu").unwrap();
        process(&mut builder, "LoadRefBarrier", "false").unwrap();
        let err = gc_init(&builder).unwrap_err();
        assert_eq!(
            err,
            StartupError::MissingBarriers(vec![MissingBarrier {
                barrier: Barrier::LoadReference,
                mode: GCMode::IncrementalUpdate,
            }])
        );
        assert_eq!(err.exit_code(), 1);
        assert!(err.diagnostics()[0].contains("GC mode needs LoadRefBarrier"));
    }

    #[test]
    fn process_bulk_options() {
        let mut builder = GCBuilder::new_no_env_vars();
        process_bulk(
            &mut builder,
            "gc_mode=passive gc_heuristics=compact satb_barrier=false",
        )
        .unwrap();
        let startup = gc_init(&builder).unwrap();
        assert_eq!(startup.mode(), GCMode::Passive);
        assert_eq!(startup.heuristic(), Heuristic::Compact);
    }

    #[test]
    fn unknown_option_is_reported() {
        let mut builder = GCBuilder::new_no_env_vars();
        assert_eq!(
            process(&mut builder, "ReadBarrier", "false"),
            Err(OptionError::UnknownOption {
                name: "read_barrier".to_string()
            })
        );
    }

    #[test]
    fn every_missing_barrier_reported() {
        let mut builder = GCBuilder::new_no_env_vars();
        process_bulk(
            &mut builder,
            "clone_barrier=false cas_barrier=false load_ref_barrier=false",
        )
        .unwrap();
        let err = gc_init(&builder).unwrap_err();
        let lines = err.diagnostics();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("LoadRefBarrier"));
        assert!(lines[1].contains("CASBarrier"));
        assert!(lines[2].contains("CloneBarrier"));
        assert!(lines.iter().all(|l| l.contains("to work correctly")));
    }
}
