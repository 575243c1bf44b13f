use std::ffi::OsString;

use heck::ToSnakeCase;

use crate::error::OptionError;
use crate::plan::{Barrier, BarrierConfig, GCMode, Heuristic};
use crate::util::log::trace;
use enum_map::EnumMap;

/// Environment variables starting with this prefix are read as options, e.g.
/// `GCBARRIER_GC_MODE=iu` or `GCBARRIER_SATB_BARRIER=false`.
pub const ENV_VAR_PREFIX: &str = "GCBARRIER_";

fn always_valid<T>(_: &T) -> bool {
    true
}

macro_rules! options {
    ($($(#[$outer:meta])* $name:ident: $type:ty[$validator:expr] = $default:expr),* $(,)?) => [
        #[derive(Clone, Debug)]
        pub struct Options {
            $($(#[$outer])* pub $name: $type),*
        }
        impl Options {
            /// Set an option by its snake case name, e.g. `gc_mode`.
            /// The option is left unchanged if the value does not parse or is rejected.
            pub fn set_from_str(&mut self, s: &str, val: &str) -> Result<(), OptionError> {
                match s {
                    // Parse the given value from str (by env vars or by the command line) to the right type
                    $(stringify!($name) => {
                        let parsed = val.parse::<$type>().map_err(|_| OptionError::InvalidValue {
                            name: s.to_string(),
                            value: val.to_string(),
                        })?;
                        let validate_fn = $validator;
                        if !validate_fn(&parsed) {
                            return Err(OptionError::ValidationFailed {
                                name: s.to_string(),
                                value: val.to_string(),
                            });
                        }
                        self.$name = parsed;
                        Ok(())
                    })*
                    _ => Err(OptionError::UnknownOption { name: s.to_string() }),
                }
            }

            /// Whether `s` is the snake case name of an option.
            pub fn is_option(s: &str) -> bool {
                matches!(s, $(stringify!($name))|*)
            }
        }
        impl Default for Options {
            fn default() -> Self {
                Options {
                    $($name: $default),*
                }
            }
        }
    ]
}

options! {
    /// The GC mode. Decides which barriers are load-bearing.
    gc_mode:                   GCMode    [always_valid] = GCMode::default(),
    /// The heuristics that pace concurrent cycles.
    gc_heuristics:             Heuristic [always_valid] = Heuristic::default(),
    /// Enable the load-reference barrier.
    load_ref_barrier:          bool      [always_valid] = true,
    /// Enable SATB enqueueing on reference writes.
    satb_barrier:              bool      [always_valid] = true,
    /// Enable incremental-update enqueueing of stored values.
    store_val_enqueue_barrier: bool      [always_valid] = true,
    /// Enable the compare-and-swap barrier.
    cas_barrier:               bool      [always_valid] = true,
    /// Enable the clone barrier.
    clone_barrier:             bool      [always_valid] = true,
}

impl Options {
    /// Set an option by a camel case name such as `GCMode` or `SATBBarrier`.
    pub fn set_from_camelcase_str(&mut self, s: &str, val: &str) -> Result<(), OptionError> {
        trace!("Trying to process option pair: ({}, {})", s, val);

        let sr = s.to_snake_case();
        let result = self.set_from_str(sr.as_str(), val);

        if result.is_ok() {
            trace!("Validation passed: {}={}", sr, val);
        } else {
            trace!("Validation failed: {}={}", sr, val);
        }
        result
    }

    /// Set options from a whitespace-separated list of `name=value` pairs, e.g.
    /// `"gc_mode=iu clone_barrier=false"`. Stops at the first error. Options set before the
    /// error keep their new values.
    pub fn set_bulk_from_command_line(&mut self, options: &str) -> Result<(), OptionError> {
        for opt in options.split_ascii_whitespace() {
            let (key, val) = opt.split_once('=').ok_or_else(|| OptionError::Malformed {
                arg: opt.to_string(),
            })?;
            self.set_from_str(key, val)?;
        }
        Ok(())
    }

    /// Apply every `GCBARRIER_*` environment variable. Variables with the prefix that do not
    /// name an option are ignored. A malformed value for a known option is an error.
    pub fn read_env_var_settings(&mut self) -> Result<(), OptionError> {
        self.read_env_vars(std::env::vars_os())
    }

    fn read_env_vars<I: IntoIterator<Item = (OsString, OsString)>>(
        &mut self,
        vars: I,
    ) -> Result<(), OptionError> {
        for (key, val) in vars {
            // Variables from the rest of the process may hold anything. Only ours must be UTF-8.
            let Some(key) = key.to_str() else {
                continue;
            };
            // strip the prefix, and get the lower case string
            if let Some(rest_of_key) = key.strip_prefix(ENV_VAR_PREFIX) {
                let lowercase: &str = &rest_of_key.to_lowercase();
                if Self::is_option(lowercase) {
                    let val = val.to_str().ok_or_else(|| OptionError::InvalidValue {
                        name: lowercase.to_string(),
                        value: val.to_string_lossy().into_owned(),
                    })?;
                    self.set_from_str(lowercase, val)?;
                }
            }
        }
        Ok(())
    }

    pub fn barrier_enabled(&self, barrier: Barrier) -> bool {
        match barrier {
            Barrier::LoadReference => self.load_ref_barrier,
            Barrier::SATBEnqueue => self.satb_barrier,
            Barrier::StoreValEnqueue => self.store_val_enqueue_barrier,
            Barrier::CompareAndSwap => self.cas_barrier,
            Barrier::Clone => self.clone_barrier,
        }
    }

    /// Snapshot the barrier flags.
    pub fn barrier_config(&self) -> BarrierConfig {
        BarrierConfig::from_map(EnumMap::from_fn(|b| self.barrier_enabled(b)))
    }
}
