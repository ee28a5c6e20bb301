//! Serves the personnel record query API.
//!
//! Usage: `personnel-records [CONFIG_PATH]` (default `./config/datastore.yaml`).
//! The listening port comes from `PORT` (default 3000); log verbosity from
//! `RUST_LOG` (default `info`).

use std::net::SocketAddr;

use personnel_records::api::{AppState, create_router};
use personnel_records::config::ConfigLoader;
use personnel_records::store::{DataSource, Dataset};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "./config/datastore.yaml";
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let loader = ConfigLoader::load_or_default(&config_path)?;
    let repair = loader.repair();
    let source = DataSource::new(loader.into_config());

    let dataset = Dataset::load_with(&source, std::sync::Arc::new(repair))?;
    for report in dataset.reports() {
        info!(
            kind = %report.kind,
            loaded = report.loaded,
            misaligned = report.misaligned,
            source = ?report.source,
            "Collection ready"
        );
    }

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, create_router(AppState::new(dataset))).await?;
    Ok(())
}
