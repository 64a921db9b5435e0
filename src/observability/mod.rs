//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Servers and the prober produce:
//!     → logging.rs (structured log events, pretty or JSON)
//!     → metrics.rs (probe counters and latency histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields instead of formatted strings
//! - Request ID recorded on every HTTP span
//! - Metrics are recorded even when no exporter is installed (no-op)

pub mod logging;
pub mod metrics;
