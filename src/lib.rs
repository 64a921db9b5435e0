//! Backend status dashboard.
//!
//! A minimal status endpoint plus a server-rendered dashboard that probes it
//! on every page render.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser                 DASHBOARD                              STATUS ENDPOINT
//!   ───────────▶  GET /  ─▶ resolve ProbeConfig (env)
//!                           │
//!                           ▼
//!                         Prober ── GET <BACKEND_URL> (no-store) ──▶  GET /      "Hello from backend <env>"
//!                           │                                        GET /health "OK"
//!                           ▼
//!                         classify: Ok | HttpError | Unreachable
//!                           │
//!                           ▼
//!   ◀───────────  HTML ──  StatusView (Online | Offline)
//! ```
//!
//! Cross-cutting: `config` (environment), `http` (request IDs, tracing, panic
//! recovery), `lifecycle` (bind, signals, graceful shutdown), `observability`
//! (logging, metrics).

// Core subsystems
pub mod dashboard;
pub mod endpoint;
pub mod probe;

// Cross-cutting concerns
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ProbeConfig;
pub use dashboard::DashboardServer;
pub use endpoint::EndpointServer;
pub use lifecycle::Shutdown;
pub use probe::{ProbeOutcome, ProbeState, Prober, RenderState};
