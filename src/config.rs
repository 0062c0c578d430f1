//! Aggregated capability snapshot for the binding layer.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

use crate::limits;
use crate::marshal::{self, MarshalType};
use crate::passing::ArgPassing;
use crate::platform;

/// Everything a binding generator needs to know about this build, in one
/// serialisable value. Fixed at build time; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BindConfig {
    pub max_arg: usize,
    pub max_callback: usize,
    pub callback_types: usize,
    pub passing: ArgPassing,
    pub types: Vec<MarshalType>,
    pub windows_headers: bool,
    pub os: String,
    pub arch: String,
}

static CURRENT: Lazy<BindConfig> = Lazy::new(|| {
    let config = BindConfig::snapshot();
    tracing::debug!(
        passing = %config.passing,
        types = config.types.len(),
        windows_headers = config.windows_headers,
        "resolved binding configuration"
    );
    config
});

impl BindConfig {
    /// The process-wide configuration, computed once on first use.
    #[must_use]
    pub fn current() -> &'static BindConfig {
        &CURRENT
    }

    /// Resolved argument limit; `None` means unbounded.
    #[must_use]
    pub fn max_args(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.max_arg)
    }

    fn snapshot() -> Self {
        Self {
            max_arg: limits::MAX_ARG,
            max_callback: limits::MAX_CALLBACK,
            callback_types: limits::CALLBACK_TYPES,
            passing: ArgPassing::active(),
            types: marshal::enabled_types(),
            windows_headers: platform::windows_headers(),
            os: platform::host_os().to_string(),
            arch: platform::host_arch().to_string(),
        }
    }
}

impl fmt::Display for BindConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_arg = match self.max_args() {
            Some(limit) => limit.to_string(),
            None => "unbounded".to_string(),
        };
        let types: Vec<&str> = self.types.iter().map(|ty| ty.c_type()).collect();
        write!(
            f,
            "args={max_arg} callbacks={} signatures={} passing={} types=[{}] windows-headers={} ({}/{})",
            self.max_callback,
            self.callback_types,
            self.passing,
            types.join(", "),
            self.windows_headers,
            self.os,
            self.arch,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_reflects_compiled_limits() {
        let config = BindConfig::current();
        assert_eq!(config.max_callback, 10);
        assert_eq!(config.callback_types, 8);
        assert_eq!(config.max_arg, limits::MAX_ARG);
        assert!(config.max_args().is_none());
    }

    #[test]
    fn current_is_stable_across_calls() {
        let first = BindConfig::current();
        let second = BindConfig::current();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn snapshot_matches_module_surface() {
        let config = BindConfig::snapshot();
        assert_eq!(config.passing, ArgPassing::active());
        assert_eq!(config.types, marshal::enabled_types());
        assert_eq!(config.windows_headers, platform::windows_headers());
    }

    #[test]
    fn json_round_trips() {
        let config = BindConfig::current();
        let encoded = match serde_json::to_string(config) {
            Ok(text) => text,
            Err(err) => panic!("encode should succeed: {err}"),
        };
        let decoded: BindConfig = match serde_json::from_str(&encoded) {
            Ok(value) => value,
            Err(err) => panic!("decode should succeed: {err}"),
        };
        assert_eq!(&decoded, config);
    }

    #[test]
    fn display_summarises_the_surface() {
        let text = BindConfig::current().to_string();
        assert!(text.contains("callbacks=10"));
        assert!(text.contains("signatures=8"));
        assert!(text.contains("args=unbounded"));
    }
}
