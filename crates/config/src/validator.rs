use crate::{substitution, AppConfig};
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Service name is required")]
    MissingServiceName,

    #[error("Invalid version format: {0}. Must be in format X.Y.Z (e.g., 1.0.0)")]
    InvalidVersionFormat(String),

    #[error("HTTP port must be non-zero")]
    InvalidHttpPort,

    #[error("Metrics port {0} collides with the HTTP port")]
    MetricsPortCollision(u16),

    #[error("Agent endpoint '{0}' must be an http(s) URL")]
    InvalidAgentEndpoint(String),

    #[error("Agent endpoint contains an unresolved environment variable: {0}")]
    UnresolvedAgentEndpoint(String),

    #[error("Invalid log format: {0}. Must be one of: pretty, json, compact")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn warn(&mut self, field: &str, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            field: field.to_string(),
            message: message.into(),
        });
    }
}

/// Validate a loaded configuration, collecting all errors and warnings
/// instead of stopping at the first problem.
pub fn validate_config(config: &AppConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if config.service.name.trim().is_empty() {
        report.errors.push(ValidationError::MissingServiceName);
    }

    let version_re = Regex::new(r"^\d+\.\d+\.\d+$").expect("static pattern");
    if !version_re.is_match(&config.service.version) {
        report
            .errors
            .push(ValidationError::InvalidVersionFormat(
                config.service.version.clone(),
            ));
    }

    if config.server.http_port == 0 {
        report.errors.push(ValidationError::InvalidHttpPort);
    }
    if let Some(metrics_port) = config.server.metrics_port {
        if metrics_port == config.server.http_port {
            report
                .errors
                .push(ValidationError::MetricsPortCollision(metrics_port));
        }
    } else {
        report.warn("server.metrics_port", "metrics exporter disabled");
    }

    // Low seeds collide with the reserved fixture id range.
    if config.orders.id_seed < 1000 {
        report.warn(
            "orders.id_seed",
            format!(
                "seed {} is inside the reserved low id range (< 1000)",
                config.orders.id_seed
            ),
        );
    }

    match &config.gateway.agent_endpoint {
        Some(endpoint) if substitution::has_unresolved_env_vars(endpoint) => {
            report
                .errors
                .push(ValidationError::UnresolvedAgentEndpoint(endpoint.clone()));
        }
        Some(endpoint) if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") => {
            report
                .errors
                .push(ValidationError::InvalidAgentEndpoint(endpoint.clone()));
        }
        Some(_) => {}
        None => {
            report.warn(
                "gateway.agent_endpoint",
                "not configured; the chat relay will reject requests",
            );
        }
    }

    if !matches!(config.logging.format.as_str(), "pretty" | "json" | "compact") {
        report
            .errors
            .push(ValidationError::InvalidLogFormat(config.logging.format.clone()));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_default_config;

    #[test]
    fn test_default_config_is_valid() {
        let report = validate_config(&generate_default_config());
        assert!(report.is_valid(), "errors: {:?}", report.errors);
        // No agent endpoint and no metrics port in the defaults.
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_blank_name_and_bad_version() {
        let mut config = generate_default_config();
        config.service.name = "  ".to_string();
        config.service.version = "one".to_string();

        let report = validate_config(&config);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_unresolved_endpoint_is_an_error() {
        let mut config = generate_default_config();
        config.gateway.agent_endpoint = Some("${AGENT_ENDPOINT}".to_string());

        let report = validate_config(&config);
        assert!(report
            .errors
            .iter()
            .any(|e| matches!(e, ValidationError::UnresolvedAgentEndpoint(_))));
    }

    #[test]
    fn test_non_http_endpoint_is_an_error() {
        let mut config = generate_default_config();
        config.gateway.agent_endpoint = Some("agent:9000".to_string());

        let report = validate_config(&config);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_low_seed_warns() {
        let mut config = generate_default_config();
        config.orders.id_seed = 10;

        let report = validate_config(&config);
        assert!(report.is_valid());
        assert!(report.warnings.iter().any(|w| w.field == "orders.id_seed"));
    }

    #[test]
    fn test_metrics_port_collision() {
        let mut config = generate_default_config();
        config.server.metrics_port = Some(config.server.http_port);

        let report = validate_config(&config);
        assert!(!report.is_valid());
    }
}
