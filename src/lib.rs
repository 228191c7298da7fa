//! trace-echo
//!
//! A minimal HTTP service demonstrating automatic request tracing and log
//! correlation. Every request, regardless of method or path, is answered
//! with a pretty-printed JSON echo of its headers and produces exactly one
//! structured JSON log record carrying the request's correlation ID.
//!
//! ```text
//!     Client Request      ┌──────────────────────────────────────────┐
//!     ────────────────────┼─▶ set request ID ─▶ trace span ─▶ echo   │
//!                         │        (observability)        (http)     │
//!     Client Response     │                                          │
//!     ◀───────────────────┼── JSON echo + x-request-id ◀─────────────┤
//!                         └──────────────────────────────────────────┘
//!
//!     Cross-cutting: config (TOML + defaults), lifecycle (signals,
//!     graceful drain), observability (JSON log sink).
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
