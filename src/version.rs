//! Version of the running build.
//!
//! Both values are fixed at compile time. Packaging can inject them with
//! `TRYRELEASE_SHORT_VERSION` (e.g. "v0.0.9") and `TRYRELEASE_FULL_VERSION`
//! (e.g. the output of `git describe --tags --dirty`); otherwise they fall
//! back to the Cargo package version.

/// Release tag of this build, the form compared against published releases
pub fn short_version() -> &'static str {
    match option_env!("TRYRELEASE_SHORT_VERSION") {
        Some(version) => version,
        None => concat!("v", env!("CARGO_PKG_VERSION")),
    }
}

/// Detailed build identifier shown by `--version`
pub fn full_version() -> &'static str {
    match option_env!("TRYRELEASE_FULL_VERSION") {
        Some(version) => version,
        None => short_version(),
    }
}
