//! Configuration validation.
//!
//! # Responsibilities
//! - Turn raw environment strings into typed values
//! - Validate value ranges (ports non-zero, timeouts > 0)
//! - Check the probe target is an absolute http(s) URL
//!
//! # Design Decisions
//! - Loaders collect every validation error, not just the first
//! - Each check is a pure function: raw `&str` → `Result<T, ValidationError>`

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::config::schema::LogFormat;

/// A single invalid setting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{key} must be a port number between 1 and 65535, got '{value}'")]
    InvalidPort { key: &'static str, value: String },

    #[error("{key} must be a socket address such as 0.0.0.0:9090, got '{value}'")]
    InvalidSocketAddress { key: &'static str, value: String },

    #[error("'{value}' is not a valid URL: {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("'{value}' uses unsupported scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { value: String, scheme: String },

    #[error("{key} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { key: &'static str, value: String },

    #[error("{key} must be 'pretty' or 'json', got '{value}'")]
    InvalidLogFormat { key: &'static str, value: String },
}

pub fn parse_port(key: &'static str, raw: &str) -> Result<u16, ValidationError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ValidationError::InvalidPort {
            key,
            value: raw.to_string(),
        }),
    }
}

pub fn parse_socket_address(key: &'static str, raw: &str) -> Result<SocketAddr, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidSocketAddress {
            key,
            value: raw.to_string(),
        })
}

/// Parse a probe target. Only absolute `http` and `https` URLs are accepted.
pub fn parse_target(raw: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(raw.trim()).map_err(|e| ValidationError::InvalidUrl {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ValidationError::UnsupportedScheme {
            value: raw.to_string(),
            scheme: other.to_string(),
        }),
    }
}

pub fn parse_timeout_secs(key: &'static str, raw: &str) -> Result<Duration, ValidationError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ValidationError::InvalidTimeout {
            key,
            value: raw.to_string(),
        }),
    }
}

pub fn parse_log_format(key: &'static str, raw: &str) -> Result<LogFormat, ValidationError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pretty" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        _ => Err(ValidationError::InvalidLogFormat {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("PORT", "8080"), Ok(8080));
        assert_eq!(parse_port("PORT", " 3000 "), Ok(3000));
        assert!(parse_port("PORT", "0").is_err());
        assert!(parse_port("PORT", "70000").is_err());
        assert!(parse_port("PORT", "http").is_err());
    }

    #[test]
    fn test_parse_target() {
        let url = parse_target("http://backend:8080").unwrap();
        assert_eq!(url.host_str(), Some("backend"));
        assert_eq!(url.port(), Some(8080));

        assert!(parse_target("https://status.example.com/").is_ok());
        assert!(matches!(
            parse_target("backend:8080"),
            Err(ValidationError::UnsupportedScheme { .. })
        ));
        assert!(matches!(
            parse_target("ftp://backend"),
            Err(ValidationError::UnsupportedScheme { .. })
        ));
        assert!(matches!(
            parse_target("not a url"),
            Err(ValidationError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(
            parse_timeout_secs("PROBE_TIMEOUT_SECS", "5"),
            Ok(Duration::from_secs(5))
        );
        assert!(parse_timeout_secs("PROBE_TIMEOUT_SECS", "0").is_err());
        assert!(parse_timeout_secs("PROBE_TIMEOUT_SECS", "-1").is_err());
    }

    #[test]
    fn test_parse_log_format() {
        assert_eq!(parse_log_format("LOG_FORMAT", "JSON"), Ok(LogFormat::Json));
        assert_eq!(parse_log_format("LOG_FORMAT", "pretty"), Ok(LogFormat::Pretty));
        assert!(parse_log_format("LOG_FORMAT", "xml").is_err());
    }
}
