//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init observability → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight → Exit 0
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, observability next, listener last
//! - Ordered shutdown: stop accept, drain, exit
//! - Drain is bounded: forced exit after the configured timeout

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
