use crate::error::{OptionError, Result, StartupError};
use crate::plan::{
    required_barriers, validate, BarrierConfig, GCMode, Heuristic, RequirementSet,
    ValidationResult,
};
use crate::util::options::Options;

/// Collects options before startup. The options are only resolved into a mode and a barrier
/// configuration when [`GCBuilder::build`] is called.
pub struct GCBuilder {
    pub options: Options,
}

impl GCBuilder {
    /// Create a builder with default options, then apply `GCBARRIER_*` environment variables.
    pub fn new() -> Result<Self, OptionError> {
        let mut builder = Self::new_no_env_vars();
        builder.options.read_env_var_settings()?;
        Ok(builder)
    }

    /// Create a builder with default options and ignore environment variables.
    pub fn new_no_env_vars() -> Self {
        GCBuilder {
            options: Options::default(),
        }
    }

    /// Set an option by its snake case name.
    pub fn set_option(&mut self, name: &str, val: &str) -> Result<(), OptionError> {
        self.options.set_from_str(name, val)
    }

    /// Set options from a whitespace-separated list of `name=value` pairs.
    pub fn set_options_bulk_by_str(&mut self, options: &str) -> Result<(), OptionError> {
        self.options.set_bulk_from_command_line(options)
    }

    /// Resolve the options. The result still has to be validated before collection may start.
    pub fn build(&self) -> UnvalidatedStartup {
        UnvalidatedStartup::new(
            self.options.gc_mode,
            self.options.gc_heuristics,
            self.options.barrier_config(),
        )
    }
}

/// A resolved configuration whose barriers have not been checked yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedStartup {
    mode: GCMode,
    heuristic: Heuristic,
    barriers: BarrierConfig,
}

impl UnvalidatedStartup {
    pub fn new(mode: GCMode, heuristic: Heuristic, barriers: BarrierConfig) -> Self {
        Self {
            mode,
            heuristic,
            barriers,
        }
    }

    pub fn mode(&self) -> GCMode {
        self.mode
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn barriers(&self) -> &BarrierConfig {
        &self.barriers
    }

    /// Check the barriers. This consumes the configuration, so the check runs exactly once and
    /// a failed configuration cannot be used afterwards.
    pub fn validate(self) -> Result<ValidatedStartup> {
        match validate(self.mode, self.heuristic, &self.barriers) {
            ValidationResult::Pass => Ok(ValidatedStartup {
                mode: self.mode,
                heuristic: self.heuristic,
                barriers: self.barriers,
            }),
            ValidationResult::Fail(missing) => Err(StartupError::MissingBarriers(missing)),
        }
    }
}

/// A configuration whose mode has every barrier it needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedStartup {
    mode: GCMode,
    heuristic: Heuristic,
    barriers: BarrierConfig,
}

impl ValidatedStartup {
    pub fn mode(&self) -> GCMode {
        self.mode
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn barriers(&self) -> &BarrierConfig {
        &self.barriers
    }

    pub fn required_barriers(&self) -> RequirementSet {
        required_barriers(self.mode, self.heuristic)
    }
}
