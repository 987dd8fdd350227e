//! Configuration for the Closeline service
//!
//! Configuration is a single YAML file with `${VAR}` environment variable
//! substitution, loaded and validated before the service starts.

use serde::{Deserialize, Serialize};

pub mod parser;
pub mod substitution;
pub mod validator;

pub use parser::{generate_default_config, load_config, save_config};
pub use substitution::{has_unresolved_env_vars, substitute_env_vars};
pub use validator::{validate_config, ValidationError, ValidationReport, ValidationWarning};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    #[serde(default)]
    pub server: HttpServerConfig,
    #[serde(default)]
    pub orders: OrdersConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Service identity metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub version: String,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Prometheus exporter port; metrics are disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
            metrics_port: None,
        }
    }
}

/// Order store settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrdersConfig {
    /// Id counter seed; the first order gets `id_seed + 1`. Keep it above
    /// the fixture id range.
    #[serde(default = "default_id_seed")]
    pub id_seed: u64,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            id_seed: default_id_seed(),
        }
    }
}

/// Chat relay settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Downstream conversational agent endpoint. The chat relay returns
    /// 500 while this is unset.
    #[serde(default)]
    pub agent_endpoint: Option<String>,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// One of "pretty", "json", "compact".
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8080
}

fn default_id_seed() -> u64 {
    4999
}

fn default_log_format() -> String {
    "pretty".to_string()
}
