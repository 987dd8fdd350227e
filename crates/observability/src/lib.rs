//! Observability infrastructure for Closeline
//!
//! This crate provides:
//! - Structured logging via tracing
//! - Prometheus metrics export
//!
//! # Quick Start
//!
//! ```ignore
//! use observability::{init_logging, LogFormat};
//!
//! init_logging("closeline", LogFormat::Pretty)?;
//! observability::metrics::init_metrics(9090)?;
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{init_default_logging, init_logging, LogFormat};
pub use metrics::init_metrics;
