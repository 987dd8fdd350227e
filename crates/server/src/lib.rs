//! HTTP server infrastructure for Closeline
//!
//! Provides an Axum-based HTTP server with unified lifecycle management and
//! graceful shutdown.
//!
//! # Architecture
//!
//! Servers implement the [`Server`] trait, which provides a consistent
//! interface for running and monitoring. The [`ServerExt`] trait adds
//! convenience methods like `spawn()` and `run_with_ctrl_c()`.
//!
//! Shutdown coordination uses `CancellationToken` from `tokio_util`, allowing
//! hierarchical shutdown where cancelling a parent token automatically cancels
//! all child tokens.
//!
//! # Quick Start
//!
//! ```ignore
//! use server::{HttpServer, ServerConfig, Server, ServerExt};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::new("0.0.0.0", 8080);
//!     let server = HttpServer::new(config, router);
//!     server.run_with_ctrl_c().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod shutdown;
pub mod traits;

pub use config::{ports, ServerConfig};
pub use error::{Result, ServerError};
pub use http::HttpServer;
pub use shutdown::ShutdownController;
pub use traits::{Server, ServerExt};
