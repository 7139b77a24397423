#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Inkwell platform
//!
//! Process-level plumbing shared by Inkwell binaries:
//!
//! - [`PlatformConfig`] - layered configuration (defaults, YAML, environment)
//! - [`logging`] - `tracing` subscriber bootstrap
//! - [`PlatformContext`] - build metadata, uptime, memory and the active configuration

pub mod build_info;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod process;

pub use build_info::BuildInfo;
pub use config::{LogFormat, LoggingConfig, PlatformConfig};
pub use context::PlatformContext;
pub use error::PlatformError;
pub use process::{MemoryUsage, Uptime};
