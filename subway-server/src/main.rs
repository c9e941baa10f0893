use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use subway_server::config::ServerConfig;
use subway_server::dataset::load_network;
use subway_server::failures::FailureLog;
use subway_server::topology::{RouteTable, RuleTable};
use subway_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let rules = match &config.rules_path {
        Some(path) => RuleTable::from_path(path)?,
        None => RuleTable::seoul(),
    };
    info!(configured_lines = rules.len(), "topology rules loaded");

    let network = load_network(&config.data_path)?;
    let routes = RouteTable::build(&rules, &network.segments, &config.topology);
    let failures = FailureLog::new(&config.failure_log);

    let state = AppState::new(network, rules, routes, failures);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, "subway route server listening");
    info!("  GET /health");
    info!("  GET /api/lines");
    info!("  GET /api/lines/:line/routes?direction=");
    info!("  GET /api/path?line=&from=&to=&express=");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
