use std::sync::Arc;

use payroll_ledger::api::{AppState, create_router};
use payroll_ledger::config::ConfigLoader;
use payroll_ledger::store::{CsvTableStore, EMPLOYEES, PAYROLL};
use payroll_ledger::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let config = ConfigLoader::from_env()?.into_config();

    let store = CsvTableStore::from_config(&config.storage);
    store.init_tables(&[EMPLOYEES, PAYROLL])?;
    tracing::info!(
        data_dir = %store.data_dir().display(),
        tables = ?store.open_tables(),
        "Tables ready"
    );

    let state = AppState::new(Arc::new(store));
    let app = create_router(state.clone());

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.flush().await?;
    tracing::info!("Tables flushed, shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
