//! Helpers for reporting the compiled version of the library, both to calling applications and in
//! the log line emitted when the WASM module loads.

/// Reports the full version and various useful build settings as a well-formatted and
/// semi-structured string.
pub fn full_version() -> String {
    format!(
        "build-profile={} build-timestamp={} features={} repo-version={}",
        env!("BUILD_PROFILE"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_FEATURES"),
        env!("REPO_VERSION"),
    )
}

/// Only the core version information from the build, for places where the full string is too
/// noisy.
pub fn minimal_version() -> String {
    format!("repo-version={}", env!("REPO_VERSION"))
}
