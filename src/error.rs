//! Error types for option processing and startup.
//!
//! # Error Categories
//!
//! - [`OptionError`]: malformed configuration input. Raised while options are being set,
//!   before any barrier check runs. Unknown modes and heuristics end up here and are never
//!   replaced by a default.
//! - [`StartupError::MissingBarriers`]: the configuration is well formed but disables a barrier
//!   the selected mode needs.
//!
//! Neither is recoverable at runtime. The operator has to change the options and restart.

use itertools::Itertools;
use thiserror::Error;

use crate::plan::MissingBarrier;

/// Result type for option processing and startup.
pub type Result<T, E = StartupError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// No option has this name.
    #[error("Unknown option: {name}")]
    UnknownOption { name: String },

    /// The value does not parse as the option's type.
    #[error("Invalid value for option {name}: {value:?}")]
    InvalidValue { name: String, value: String },

    /// The value parses but the option's validator rejects it.
    #[error("Value {value:?} is not allowed for option {name}")]
    ValidationFailed { name: String, value: String },

    /// A command-line argument that is not of the form `name=value`.
    #[error("Malformed option argument: {arg:?}")]
    Malformed { arg: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartupError {
    #[error(transparent)]
    Option(#[from] OptionError),

    /// Non-empty, in requirement-table order.
    #[error("{}", .0.iter().join("\n"))]
    MissingBarriers(Vec<MissingBarrier>),
}

impl StartupError {
    /// The process exit status a host reports for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// One line per problem, for hosts that print each on its own line.
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            StartupError::Option(e) => vec![e.to_string()],
            StartupError::MissingBarriers(missing) => {
                missing.iter().map(|m| m.to_string()).collect()
            }
        }
    }
}
