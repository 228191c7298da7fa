//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP listener
//!     → server.rs (axum Router + correlation middleware)
//!     → echo.rs   (drain body, log record, JSON echo response)
//! ```

pub mod echo;
pub mod server;

pub use server::HttpServer;
