#![allow(clippy::vec_init_then_push)]

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

fn report_build_profile() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=BUILD_PROFILE={profile}");
}

fn report_enabled_features() {
    let mut enabled_features: Vec<&str> = Vec::new();

    #[cfg(feature = "default")]
    enabled_features.push("default");

    #[cfg(feature = "local-store")]
    enabled_features.push("local-store");

    #[cfg(feature = "strict")]
    enabled_features.push("strict");

    if enabled_features.is_empty() {
        enabled_features.push("none");
    }

    println!(
        "cargo:rustc-env=BUILD_FEATURES={}",
        enabled_features.join(",")
    );
}

fn report_repository_version() {
    // Source tarballs and sandboxed builds have no git metadata available
    let git_describe = std::process::Command::new("git")
        .args(["describe", "--always", "--dirty", "--long", "--tags"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|desc| desc.trim().to_string())
        .filter(|desc| !desc.is_empty());

    let long_version = git_describe.unwrap_or_else(|| {
        format!("v{}", std::env::var("CARGO_PKG_VERSION").unwrap_or_default())
    });
    println!("cargo:rustc-env=REPO_VERSION={long_version}");

    let build_timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=BUILD_TIMESTAMP={build_timestamp}");
}

fn main() {
    report_repository_version();
    report_build_profile();
    report_enabled_features();
}
