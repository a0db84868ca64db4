use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info, warn};

use bank_api::{create_router, AppState};
use bank_core::repositories::{ClientRepository, TransactionRepository};
use bank_infrastructure::{
    create_pool, run_migrations, CachedClientRepository, InMemoryClientRepository,
    InMemoryRightsAdapter, InMemoryTransactionRepository, PgClientRepository,
    PgTransactionRepository,
};
use bank_shared::config::AppConfig;
use bank_shared::utils::mask_connection_string;
use bank_shared::ClientMetrics;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (also reads .env)
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry
    bank_shared::telemetry::init_telemetry(&config.logging)?;
    info!("Bank server starting...");

    // Storage
    let (client_repo, transaction_repo) = build_repositories(&config).await?;
    let client_repo: Arc<dyn ClientRepository> = if config.clients.cache_enabled {
        info!("Client cache enabled");
        Arc::new(CachedClientRepository::new(client_repo))
    } else {
        client_repo
    };

    // External rights store (in-process mock)
    let rights = Arc::new(InMemoryRightsAdapter::new(
        config.rights.default_permissions.clone(),
    ));

    let metrics = ClientMetrics::new(&config.app.name)?;
    let state = AppState::new(client_repo, transaction_repo, rights, metrics);
    let app = create_router(state, &config.cors);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    log_startup_banner(&config, addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Bank server stopped");
    Ok(())
}

/// Client storage plus the ledger, Postgres when a URL is configured
async fn build_repositories(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn ClientRepository>, Arc<dyn TransactionRepository>)> {
    let Some(url) = config.database.url.as_deref() else {
        warn!("No database URL configured, using in-memory repositories");
        let clients: Arc<dyn ClientRepository> = Arc::new(InMemoryClientRepository::new());
        let transactions: Arc<dyn TransactionRepository> =
            Arc::new(InMemoryTransactionRepository::new());
        return Ok((clients, transactions));
    };

    info!("Connecting to database at {}...", mask_connection_string(url));
    let pool = create_pool(url, &config.database).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        e
    })?;
    run_migrations(&pool).await?;
    info!("Database connection established.");

    let clients: Arc<dyn ClientRepository> = Arc::new(PgClientRepository::new(pool.clone()));
    let transactions: Arc<dyn TransactionRepository> = Arc::new(PgTransactionRepository::new(pool));
    Ok((clients, transactions))
}

fn log_startup_banner(config: &AppConfig, addr: SocketAddr) {
    info!("----------------------------------------------------------");
    info!("Application '{}' is running!", config.app.name);
    info!("Local:    http://{}", addr);
    info!("GraphiQL: http://{}/graphiql", addr);
    info!("Profile:  {}", config.app.env);
    info!("----------------------------------------------------------");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
