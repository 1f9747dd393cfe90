use covid_portal::{AppState, config::Config, create_router};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Inizializza la configurazione (legge anche .env)
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    config.log_summary();

    // Il pool nasce e muore qui: il core lo riceve già costruito
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
        .connect_with(connect_options)
        .await?;

    if config.run_migrations {
        info!("Applying database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let state = AppState::new(pool.clone(), config.jwt_secret.clone())
        .with_token_ttl(config.jwt_ttl);

    // Crea il router
    let app = create_router(Arc::new(state));

    // Crea il listener TCP
    let listener = TcpListener::bind((config.server_host.as_str(), config.server_port)).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    // Avvia il server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down, closing database pool");
    pool.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Unable to listen for shutdown signal: {}", e);
        // senza segnale il server resta attivo finché il processo non viene terminato
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
