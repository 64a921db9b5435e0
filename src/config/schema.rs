//! Configuration schema definitions.
//!
//! Every binary resolves its settings from environment variables into one of
//! these structs. All types have defaults so an empty environment is a valid
//! configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Probe target used when `BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://backend:8080";

/// Environment label used when neither `APP_ENV` nor `NODE_ENV` is set.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Status endpoint listening port.
pub const DEFAULT_ENDPOINT_PORT: u16 = 8080;

/// Dashboard listening port.
pub const DEFAULT_DASHBOARD_PORT: u16 = 3000;

/// Settings for a single backend probe.
///
/// Resolved from the environment at the start of every render and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Address the probe issues its `GET` against.
    pub target_address: String,

    /// Label shown on the dashboard's environment card.
    pub environment_label: String,

    /// Optional deadline for the whole request. `None` leaves the
    /// transport's own defaults in charge.
    pub timeout: Option<Duration>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            target_address: DEFAULT_BACKEND_URL.to_string(),
            environment_label: DEFAULT_ENVIRONMENT.to_string(),
            timeout: None,
        }
    }
}

/// Status endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// TCP port to listen on (all interfaces).
    pub port: u16,

    /// Label echoed by `GET /`.
    pub environment_label: String,
}

impl EndpointConfig {
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_ENDPOINT_PORT,
            environment_label: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

/// Dashboard server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// TCP port to listen on (all interfaces).
    pub port: u16,

    /// Prometheus exporter bind address. Metrics are disabled when unset.
    pub metrics_address: Option<SocketAddr>,
}

impl DashboardConfig {
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_DASHBOARD_PORT,
            metrics_address: None,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, for local development.
    #[default]
    Pretty,
    /// One JSON object per line, for log aggregation.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,

    /// `tracing` filter directives (`RUST_LOG` syntax).
    pub filter: Option<String>,
}
