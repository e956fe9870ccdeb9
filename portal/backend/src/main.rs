//! Concession Portal API Backend

use std::sync::Arc;

use anyhow::Context;
use concession_forms::infrastructure::{
    HttpWorkflowNotifier, InMemoryConcessionStore, NoOpNotifier, PostgrestStore, SystemClock,
};
use concession_forms::{ConcessionService, ConcessionStore, SessionRegistry, WorkflowNotifier};
use concession_portal::{build_router, config::Settings, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load().context("loading settings")?;

    let store: Arc<dyn ConcessionStore> = match &settings.datastore_url {
        Some(url) => {
            tracing::info!(%url, "using PostgREST datastore");
            Arc::new(PostgrestStore::new(
                url,
                settings.datastore_api_key.as_deref(),
                settings.request_timeout(),
            )?)
        }
        None => {
            tracing::warn!("no datastore_url configured, submissions are kept in memory");
            Arc::new(InMemoryConcessionStore::new())
        }
    };

    let notifier: Arc<dyn WorkflowNotifier> = match &settings.workflow_url {
        Some(url) => Arc::new(HttpWorkflowNotifier::new(url.clone(), settings.request_timeout())?),
        None => {
            tracing::info!("no workflow_url configured, notifications are skipped");
            Arc::new(NoOpNotifier)
        }
    };

    let service = Arc::new(ConcessionService::new(store, notifier, Arc::new(SystemClock)));
    spawn_session_sweep(service.registry(), settings.session_ttl());

    let app = build_router(AppState::new(service));

    tracing::info!("Concession portal listening on {}", settings.bind_addr);
    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("binding {}", settings.bind_addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Purge idle sessions once per minute
fn spawn_session_sweep(registry: Arc<SessionRegistry>, ttl: std::time::Duration) {
    let ttl = chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::hours(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));
        loop {
            interval.tick().await;
            let purged = registry.purge_idle(ttl);
            if purged > 0 {
                tracing::info!(purged, remaining = registry.len(), "expired idle sessions");
            }
        }
    });
}
