//! Service entry point: wire configuration into components and serve.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::info;

use provena_auth::TokenValidator;
use provena_events::{EventBridgeBus, EventBusPublisher};
use provena_provisioning::{
    DirectCreateStrategy, EventPublishStrategy, ExistenceChecker, ProvisioningStrategy,
};
use provena_store::{DynamoTableStore, TableStore};
use provision_api::{build_router, logging, AppState, Config, StrategyKind};

#[tokio::main]
async fn main() {
    // Load configuration (fail-fast on missing required values)
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        strategy = ?config.strategy,
        "Starting provision API"
    );

    let secrets = match provena_secrets::build_provider(&config.secret_provider).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to build secret provider: {e}");
            std::process::exit(1);
        }
    };
    let validator = TokenValidator::new(secrets);

    // The existence checker reads the table listing under both strategies
    let store: Arc<dyn TableStore> =
        Arc::new(DynamoTableStore::from_env(config.region.clone()).await);
    let checker = ExistenceChecker::new(store.clone());

    let strategy: Arc<dyn ProvisioningStrategy> = match config.strategy {
        StrategyKind::DirectCreate => Arc::new(DirectCreateStrategy::new(store)),
        StrategyKind::EventPublish => {
            // Presence enforced by Config::from_env for this strategy
            let Some(bus_config) = config.event_bus.clone() else {
                eprintln!("Event bus configuration missing for event strategy");
                std::process::exit(1);
            };
            let bus = EventBridgeBus::from_config(&bus_config).await;
            let publisher = EventBusPublisher::new(Arc::new(bus), bus_config);
            Arc::new(EventPublishStrategy::new(publisher))
        }
    };

    let app = build_router(AppState::new(validator, checker, strategy));

    let addr: SocketAddr = match config.bind_addr().parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Invalid bind address '{}': {e}", config.bind_addr());
            std::process::exit(1);
        }
    };

    info!(%addr, "Server listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {e}");
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
