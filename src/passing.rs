//! Argument marshalling strategy selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How call arguments travel into the foreign function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArgPassing {
    /// Call-stack-based marshalling (the `dlstack` strategy).
    DlStack,
    /// Direct per-argument conversion without a staged stack.
    Direct,
}

impl ArgPassing {
    /// Strategy compiled into this build, selected by the `dlstack` feature.
    #[must_use]
    pub const fn active() -> Self {
        if cfg!(feature = "dlstack") {
            ArgPassing::DlStack
        } else {
            ArgPassing::Direct
        }
    }

    /// Canonical string for diagnostics and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ArgPassing::DlStack => "dlstack",
            ArgPassing::Direct => "direct",
        }
    }
}

impl fmt::Display for ArgPassing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
