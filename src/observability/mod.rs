//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! logging.rs     → structured JSON records on stdout (one object per line)
//! correlation.rs → request ID generated/propagated, span wraps the handler
//!
//! Consumers:
//!     → log aggregation (any line-delimited JSON processor)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing; human-readable startup
//!   and shutdown notices go to plain stdout instead
//! - Request ID flows from middleware through the handler via the span

pub mod correlation;
pub mod logging;
