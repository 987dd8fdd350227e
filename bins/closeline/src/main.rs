//! Closeline CLI and server binary
//!
//! Entry point for the closing order service. Provides commands for
//! initializing, validating, and serving with a configuration file.

use anyhow::{Context, Result};
use cli::{Cli, Commands};
use config::{generate_default_config, load_config, save_config, validate_config, AppConfig};
use observability::{init_default_logging, init_logging, init_metrics, LogFormat};
use orders::{InMemoryOrderStore, OrderManager};
use server::{HttpServer, ServerConfig, ServerExt};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Serve { config, http } => serve_command(config, http).await,
        Commands::Validate { config } => {
            init_default_logging("closeline")?;
            validate_command(config).await
        }
        Commands::Init { output } => {
            init_default_logging("closeline")?;
            init_command(output).await
        }
    }
}

async fn serve_command<P: AsRef<Path>>(config_path: P, http_override: Option<u16>) -> Result<()> {
    let config = load_config(config_path.as_ref())?;

    let log_format = LogFormat::parse(&config.logging.format).unwrap_or_default();
    init_logging(&config.service.name, log_format)?;

    info!("Closeline starting...");
    debug!(path = ?config_path.as_ref(), "Configuration loaded");

    let report = validate_config(&config);

    if !report.warnings.is_empty() {
        warn!("Configuration warnings:");
        for warning in &report.warnings {
            warn!(field = %warning.field, message = %warning.message);
        }
    }

    if !report.is_valid() {
        error!(
            error_count = report.errors.len(),
            "Configuration validation failed"
        );
        for err in &report.errors {
            error!("{}", err);
        }
        anyhow::bail!("Cannot start service due to configuration errors");
    }

    if let Some(metrics_port) = config.server.metrics_port {
        init_metrics(metrics_port)?;
        info!(port = metrics_port, "Prometheus metrics exporter started");
    }

    let http_port = http_override.unwrap_or(config.server.http_port);
    if http_override.is_some() {
        debug!(port = http_port, "HTTP port overridden from CLI");
    }

    let router = build_router(&config);

    info!(
        host = %config.server.host,
        port = http_port,
        id_seed = config.orders.id_seed,
        "Starting HTTP server"
    );

    let server_config = ServerConfig::new(config.server.host.clone(), http_port);
    let server = HttpServer::new(server_config, router);

    server.run_with_ctrl_c().await?;

    info!("Closeline shutdown complete");
    Ok(())
}

/// Assemble the full application router: order API plus chat relay.
///
/// CORS is wide open because the service fronts a browser UI served
/// from a different origin.
fn build_router(config: &AppConfig) -> axum::Router {
    let store = Arc::new(InMemoryOrderStore::with_seed(config.orders.id_seed));
    let manager = OrderManager::new(store);
    let orders_router = orders::api::create_router(orders::api::create_api_state(manager));

    let relay_state = Arc::new(gateway::ChatRelayState::new(
        config.gateway.agent_endpoint.clone(),
    ));
    let chat_router = gateway::chat_routes(relay_state);

    orders_router
        .merge(chat_router)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

async fn validate_command<P: AsRef<Path>>(config_path: P) -> Result<()> {
    info!(path = ?config_path.as_ref(), "Validating configuration");

    let config = match load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            error!(%e, "Failed to load configuration");
            anyhow::bail!(e);
        }
    };

    let report = validate_config(&config);

    println!("\n=== Configuration Validation Report ===\n");

    if !report.warnings.is_empty() {
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  [warn] [{}] {}", warning.field, warning.message);
        }
        println!();
    }

    if !report.errors.is_empty() {
        println!("Errors ({}):", report.errors.len());
        for err in &report.errors {
            println!("  [error] {}", err);
        }
        println!();
        anyhow::bail!("Configuration validation failed");
    }

    println!("[ok] Configuration is valid!");
    println!();
    println!("Service: {}", config.service.name);
    println!("Version: {}", config.service.version);
    println!("HTTP: {}:{}", config.server.host, config.server.http_port);
    println!("Order id seed: {}", config.orders.id_seed);
    match &config.gateway.agent_endpoint {
        Some(endpoint) => println!("Agent endpoint: {}", endpoint),
        None => println!("Agent endpoint: not configured (chat relay disabled)"),
    }

    Ok(())
}

async fn init_command<P: AsRef<Path>>(output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    info!(?output_path, "Initializing new configuration file");

    let config = generate_default_config();

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    save_config(&config, output_path)?;

    println!("[ok] Configuration file created successfully!");
    println!();
    println!("Location: {:?}", output_path);
    println!();
    println!("Next steps:");
    println!("  1. Edit the configuration file to customize settings");
    println!("  2. Set AGENT_ENDPOINT if the chat relay should be enabled");
    println!(
        "  3. Run 'closeline validate --config {:?}' to check configuration",
        output_path
    );
    println!(
        "  4. Run 'closeline serve --config {:?}' to start the service",
        output_path
    );

    Ok(())
}
