//! Web console for reviewing complaint reports.
//!
//! Serves a single dashboard page with:
//! - Aggregate status counters
//! - An expandable complaint table with evidence galleries
//! - A runtime-editable API base for pointing at other report hosts

mod handlers;
mod routes;
mod templates;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::client::ReportsClient;
use crate::config::Settings;
use crate::models::Complaint;

/// Shared state for the web console.
#[derive(Clone)]
pub struct AppState {
    pub client: ReportsClient,
    /// Last successfully fetched complaint list. Shown as-is when a refresh
    /// fails, so the operator never loses the table to a transient outage.
    pub snapshot: Arc<RwLock<Vec<Complaint>>>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: ReportsClient::new(settings),
            snapshot: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

/// Start the web console.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting console at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
