#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic, clippy::perf, clippy::suspicious)]
#![deny(clippy::unwrap_used, clippy::expect_used)]

//! Configuration surface for the dynamic-library foreign-call binding layer.
//!
//! The crate exposes the build-time capability set consumed by binding
//! generators: argument and callback limits, the marshalling strategy, the
//! primitive types that can be marshalled, and platform-header availability.
//! The `emit` module renders the same facts as the canonical C header block
//! or a JSON capability report.

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod limits;
pub mod logging;
pub mod marshal;
pub mod passing;
pub mod platform;
pub mod version;

pub use config::BindConfig;
pub use error::{Error, Result};
pub use marshal::MarshalType;
pub use passing::ArgPassing;
