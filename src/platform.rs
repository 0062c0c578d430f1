//! Host platform facts baked into the configuration.
//!
//! Mirrors the platform-header probe of a configure step: whether the OS
//! header providing system primitives (`windows.h`) is available. A value
//! forced into the build via `DLCONFIG_HAVE_WINDOWS_H` is honoured as-is;
//! the probe never overrides a predefined setting.

use std::env;

/// Operating system the configuration was generated for.
#[must_use]
pub fn host_os() -> &'static str {
    env::consts::OS
}

/// Architecture the configuration was generated for.
#[must_use]
pub fn host_arch() -> &'static str {
    env::consts::ARCH
}

/// Whether the platform header providing OS primitives is available.
///
/// Resolution is idempotent: a forced override equal to the derived value
/// changes nothing, and repeated queries always agree.
#[must_use]
pub fn windows_headers() -> bool {
    resolve_windows_headers(
        option_env!("DLCONFIG_HAVE_WINDOWS_H"),
        cfg!(target_family = "windows"),
    )
}

fn resolve_windows_headers(forced: Option<&str>, target_windows: bool) -> bool {
    match forced.map(str::trim) {
        Some("1" | "true") => true,
        Some("0" | "false") => false,
        // Unset or unrecognised: derive from the compile target.
        _ => target_windows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_from_target_when_unset() {
        assert!(resolve_windows_headers(None, true));
        assert!(!resolve_windows_headers(None, false));
    }

    #[test]
    fn forced_value_wins_over_target() {
        assert!(resolve_windows_headers(Some("1"), false));
        assert!(resolve_windows_headers(Some("true"), false));
        assert!(!resolve_windows_headers(Some("0"), true));
        assert!(!resolve_windows_headers(Some("false"), true));
    }

    #[test]
    fn forcing_the_derived_value_is_a_no_op() {
        assert_eq!(
            resolve_windows_headers(Some("1"), true),
            resolve_windows_headers(None, true)
        );
        assert_eq!(
            resolve_windows_headers(Some("0"), false),
            resolve_windows_headers(None, false)
        );
    }

    #[test]
    fn unrecognised_override_falls_back_to_target() {
        assert!(resolve_windows_headers(Some("maybe"), true));
        assert!(!resolve_windows_headers(Some(""), false));
    }

    #[test]
    fn host_facts_are_nonempty() {
        assert!(!host_os().is_empty());
        assert!(!host_arch().is_empty());
    }
}
