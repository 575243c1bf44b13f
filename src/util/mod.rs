//! Utilities shared by the rest of the crate: options, logging and test helpers.

/// Logger initialization
pub mod logger;
/// Wrappers around the `log` crate's macros.
pub(crate) mod log;
/// Options processing
pub mod options;

#[cfg(test)]
pub(crate) mod test_util;

pub use self::options::Options;
