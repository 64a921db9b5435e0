//! Status endpoint: the backend being probed.
//!
//! # Routes
//! - `GET /` → `200 Hello from backend <environment>`
//! - `GET /health` → `200 OK`, for infrastructure liveness checks
//!
//! # Design Decisions
//! - Stateless: the environment label is fixed at startup
//! - Panics are caught and answered with `500`, never a dropped connection

pub mod handlers;
pub mod server;

pub use server::EndpointServer;
