//! GC modes, the barriers they rely on, and the startup check that ties them together.
//!
//! * [`Barrier`] names each barrier kind and [`BarrierConfig`] records which ones are enabled.
//! * [`GCMode`] and [`Heuristic`] select how the collector runs.
//! * [`required_barriers`] is the requirement table, and [`validate`] compares it against a
//!   [`BarrierConfig`].

mod barriers;
pub use barriers::Barrier;
pub use barriers::BarrierConfig;

mod mode;
pub use mode::GCMode;
pub use mode::Heuristic;

mod requirements;
pub use requirements::required_barriers;
pub use requirements::RequirementSet;

mod validate;
pub use validate::validate;
pub use validate::MissingBarrier;
pub use validate::ValidationResult;
