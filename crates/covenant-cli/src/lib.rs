//! Covenant command-line front end
//!
//! Library half of the `covenant` binary: configuration, bindings documents
//! and the subcommand implementations.

#![allow(missing_docs)]

pub mod commands;
pub mod config;

pub use commands::{run_inspect, run_specialize, FunctionSummary, InspectReport, SpecializeOutcome};
pub use config::{load_bindings, parse_bindings, BindingsFormat, ConfigError, SpecializeConfig};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "COVENANT_LOG";
