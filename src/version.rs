//! Build-time metadata helpers used by the CLI.

/// Short git hash determined at compile time when available.
#[must_use]
pub fn commit_hash() -> &'static str {
    option_env!("DLCONFIG_GIT_HASH").unwrap_or("unknown")
}

/// Cargo build profile associated with the binary.
#[must_use]
pub fn build_profile() -> &'static str {
    option_env!("DLCONFIG_BUILD_PROFILE").unwrap_or("unknown")
}

/// Target triple the binary was built for.
#[must_use]
pub fn build_target() -> &'static str {
    option_env!("DLCONFIG_BUILD_TARGET").unwrap_or("unknown")
}

/// Unix timestamp (seconds since epoch) recorded at build time.
#[must_use]
pub fn build_timestamp() -> &'static str {
    option_env!("DLCONFIG_BUILD_UNIX").unwrap_or("unknown")
}

/// Render the `--version` line.
#[must_use]
pub fn render() -> String {
    format!(
        "dlconfig {} ({} {} {})",
        env!("CARGO_PKG_VERSION"),
        commit_hash(),
        build_profile(),
        build_target(),
    )
}
