//! Configuration module for Gatewarden
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `firewall`: Appliance connection settings
//! - `blocking`: Blocklist behaviour (method, group capacity)
//! - `api_paths`: REST path templates of the appliance API
//! - `server`: HTTP API binding
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod api_paths;
pub mod blocking;
pub mod errors;
pub mod firewall;
pub mod logging;
pub mod root;
pub mod server;

pub use api_paths::ApiPathsConfig;
pub use blocking::BlockingConfig;
pub use errors::ConfigError;
pub use firewall::FirewallConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
