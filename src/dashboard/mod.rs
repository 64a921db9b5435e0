//! Server-rendered status dashboard.
//!
//! # Routes
//! - `GET /` → HTML page, probes the backend on every render
//! - `GET /api/status` → the same result as JSON
//! - `GET /health` → `200 OK`, the dashboard's own liveness (no probe)
//!
//! # Data Flow
//! ```text
//! request → resolve ProbeConfig → Prober::probe → StatusView → render_page
//! ```

pub mod render;
pub mod server;
pub mod view;

pub use server::DashboardServer;
pub use view::StatusView;
