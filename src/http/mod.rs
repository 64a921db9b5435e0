//! HTTP plumbing shared by the status endpoint and the dashboard.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → layers.rs (request ID, trace span, panic recovery)
//!     → endpoint / dashboard handlers
//!     → response.rs (fallbacks, fixed error bodies)
//!     → Send to client
//! ```

pub mod layers;
pub mod request;
pub mod response;

pub use layers::with_common_layers;
pub use request::{MakeRequestUuidV4, RequestIdExt, X_REQUEST_ID};
