//! Backend status aggregation.
//!
//! # Data Flow
//! ```text
//! Page render
//!     → ProbeConfig resolved from the environment
//!     → prober.rs (one uncached GET, bounded only by the transport)
//!     → classify.rs (response / transport failure → ProbeOutcome)
//!     → outcome.rs (Ok | HttpError | Unreachable → Online | Offline)
//!     → dashboard render
//! ```
//!
//! # Design Decisions
//! - Outcomes are values, never errors: the render path cannot fail
//! - Transport detail goes to the logs, not the page
//! - Nothing is memoized; each render observes the backend afresh

pub mod classify;
pub mod outcome;
pub mod prober;

pub use classify::{classify, ProbeResponse, TransportFailure};
pub use outcome::{ProbeOutcome, ProbeState, RenderState, UNREACHABLE_MESSAGE};
pub use prober::Prober;
