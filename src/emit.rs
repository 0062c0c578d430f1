//! Renders the active configuration for external consumers.
//!
//! The C header block is the canonical textual form of the configuration:
//! non-Rust consumers of the binding layer include it directly. The JSON
//! form carries the same facts for tooling.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::config::BindConfig;
use crate::error::Result;
use crate::limits;
use crate::passing::ArgPassing;

/// Include-guard symbol of the emitted header.
pub const HEADER_GUARD: &str = "DLCONFIG_H";

/// Render the configuration as a C header block.
///
/// Output is deterministic for a given build: flags render in canonical
/// order and the include guard makes the header re-inclusion safe.
#[must_use]
pub fn render_header() -> String {
    let config = BindConfig::current();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "/* Generated by dlconfig {} for {}-{}; do not edit. */",
        env!("CARGO_PKG_VERSION"),
        config.arch,
        config.os,
    );
    let _ = writeln!(out, "#ifndef {HEADER_GUARD}");
    let _ = writeln!(out, "#define {HEADER_GUARD}");
    let _ = writeln!(out);
    let _ = writeln!(out, "#define MAX_ARG {}", limits::MAX_ARG);
    let _ = writeln!(out, "#define MAX_CALLBACK {}", limits::MAX_CALLBACK);
    let _ = writeln!(out, "#define CALLBACK_TYPES {}", limits::CALLBACK_TYPES);
    if config.passing == ArgPassing::DlStack {
        let _ = writeln!(out, "#define USE_DLSTACK");
    }
    if !config.types.is_empty() {
        let _ = writeln!(out);
        for ty in &config.types {
            let _ = writeln!(out, "#define {}", ty.define_symbol());
        }
    }
    if config.windows_headers {
        // Do not redefine the symbol when the including build already set it.
        let _ = writeln!(out);
        let _ = writeln!(out, "#ifndef HAVE_WINDOWS_H");
        let _ = writeln!(out, "#define HAVE_WINDOWS_H");
        let _ = writeln!(out, "#endif");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "#endif /* {HEADER_GUARD} */");
    out
}

/// Render the configuration as a pretty-printed JSON capability report.
///
/// # Errors
/// Returns [`crate::Error::Encode`] when serialisation fails.
pub fn render_json() -> Result<String> {
    let mut out = serde_json::to_string_pretty(BindConfig::current())?;
    out.push('\n');
    Ok(out)
}

/// Write the header block to `path`. The parent directory must exist.
///
/// # Errors
/// Returns [`crate::Error::Io`] when the file cannot be written.
pub fn write_header(path: &Path) -> Result<()> {
    fs::write(path, render_header())?;
    tracing::info!(path = %path.display(), "wrote binding-layer header");
    Ok(())
}

/// Write the JSON capability report to `path`.
///
/// # Errors
/// Returns [`crate::Error::Encode`] when serialisation fails and
/// [`crate::Error::Io`] when the file cannot be written.
pub fn write_json(path: &Path) -> Result<()> {
    fs::write(path, render_json()?)?;
    tracing::info!(path = %path.display(), "wrote capability report");
    Ok(())
}
