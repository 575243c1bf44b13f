mod raw {
    // See https://docs.rs/built/latest/built/index.html for the full list of constants in built.rs.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Crate version such as 0.4.0
pub const PKG_VERSION: &str = raw::PKG_VERSION;

/// Comma separated features enabled for this build
pub const FEATURES: &str = raw::FEATURES_STR;

/// `release` for release builds, `debug` for other builds.
pub const PROFILE: &str = raw::PROFILE;

/// One-line description of this build, as printed by `gc-probe -version`.
pub fn version_string() -> String {
    format!("gcbarrier {} ({}) [{}]", PKG_VERSION, PROFILE, FEATURES)
}
