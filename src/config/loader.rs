//! Configuration loading from the environment.

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::{
    DashboardConfig, EndpointConfig, LoggingConfig, ProbeConfig, DEFAULT_BACKEND_URL,
    DEFAULT_DASHBOARD_PORT, DEFAULT_ENDPOINT_PORT, DEFAULT_ENVIRONMENT,
};
use crate::config::validation::{
    parse_log_format, parse_port, parse_socket_address, parse_timeout_secs, ValidationError,
};

pub const PORT: &str = "PORT";
pub const NODE_ENV: &str = "NODE_ENV";
pub const APP_ENV: &str = "APP_ENV";
pub const BACKEND_URL: &str = "BACKEND_URL";
pub const PROBE_TIMEOUT_SECS: &str = "PROBE_TIMEOUT_SECS";
pub const METRICS_ADDRESS: &str = "METRICS_ADDRESS";
pub const LOG_FORMAT: &str = "LOG_FORMAT";
pub const RUST_LOG: &str = "RUST_LOG";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Source of environment variables.
///
/// Loaders never touch the process environment directly so that tests can
/// inject a fixed set of variables.
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Look up a variable, treating empty and whitespace-only values as unset.
fn lookup(env: &dyn EnvSource, key: &str) -> Option<String> {
    env.var(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Label of the running environment: `NODE_ENV`, else `development`.
pub fn runtime_environment(env: &dyn EnvSource) -> String {
    lookup(env, NODE_ENV).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

/// Resolve the settings for one probe.
///
/// Never fails: this runs on the render path, where a bad value must degrade
/// the outcome rather than abort the page. An unusable timeout is dropped
/// with a warning and the target is checked when the probe runs.
pub fn resolve_probe_config(env: &dyn EnvSource) -> ProbeConfig {
    let target_address =
        lookup(env, BACKEND_URL).unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

    let environment_label = lookup(env, APP_ENV).unwrap_or_else(|| runtime_environment(env));

    let timeout = lookup(env, PROBE_TIMEOUT_SECS).and_then(|raw| {
        parse_timeout_secs(PROBE_TIMEOUT_SECS, &raw)
            .map_err(|e| tracing::warn!(error = %e, "Ignoring probe timeout"))
            .ok()
    });

    ProbeConfig {
        target_address,
        environment_label,
        timeout,
    }
}

/// Load the status endpoint configuration.
pub fn load_endpoint_config(env: &dyn EnvSource) -> Result<EndpointConfig, ConfigError> {
    let mut errors = Vec::new();

    let port = match lookup(env, PORT) {
        Some(raw) => parse_port(PORT, &raw).unwrap_or_else(|e| {
            errors.push(e);
            DEFAULT_ENDPOINT_PORT
        }),
        None => DEFAULT_ENDPOINT_PORT,
    };

    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }

    Ok(EndpointConfig {
        port,
        environment_label: runtime_environment(env),
    })
}

/// Load the dashboard server configuration.
pub fn load_dashboard_config(env: &dyn EnvSource) -> Result<DashboardConfig, ConfigError> {
    let mut errors = Vec::new();

    let port = match lookup(env, PORT) {
        Some(raw) => parse_port(PORT, &raw).unwrap_or_else(|e| {
            errors.push(e);
            DEFAULT_DASHBOARD_PORT
        }),
        None => DEFAULT_DASHBOARD_PORT,
    };

    let metrics_address = lookup(env, METRICS_ADDRESS).and_then(|raw| {
        parse_socket_address(METRICS_ADDRESS, &raw)
            .map_err(|e| errors.push(e))
            .ok()
    });

    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }

    Ok(DashboardConfig {
        port,
        metrics_address,
    })
}

/// Load the logging configuration.
pub fn load_logging_config(env: &dyn EnvSource) -> Result<LoggingConfig, ConfigError> {
    let format = match lookup(env, LOG_FORMAT) {
        Some(raw) => parse_log_format(LOG_FORMAT, &raw)
            .map_err(|e| ConfigError::Validation(vec![e]))?,
        None => Default::default(),
    };

    Ok(LoggingConfig {
        format,
        filter: lookup(env, RUST_LOG),
    })
}
