//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (EnvSource)
//!     → loader.rs (lookup, defaults, precedence)
//!     → validation.rs (typed parsing & range checks)
//!     → EndpointConfig / DashboardConfig / LoggingConfig (once, at startup)
//!     → ProbeConfig (at the start of every render)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; nothing is cached across renders
//! - Every setting has a default, so an empty environment is valid
//! - Empty variables count as unset
//! - Startup settings fail fast; probe settings degrade instead of failing

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{
    load_dashboard_config, load_endpoint_config, load_logging_config, resolve_probe_config,
    ConfigError, EnvSource, MapEnv, ProcessEnv,
};
pub use schema::{DashboardConfig, EndpointConfig, LogFormat, LoggingConfig, ProbeConfig};
pub use validation::ValidationError;
