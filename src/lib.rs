pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod routes;
pub mod state;

use std::sync::Arc;

use crate::config::Config;
use crate::error::ClientError;
use crate::infra::factory::bootstrap_state;
use crate::state::AppState;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub fn init_logging() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("./logs", "zenexotics-client.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .json()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::new("info,zenexotics_client=debug"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_target(false)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()));

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();

    info!("Logging initialized. Writing JSON logs to ./logs/");
    guard
}

/// Boots the client core: opens the device store, wires the mock or
/// live backends, and restores any stored session.
pub async fn start(config: Config) -> Result<Arc<AppState>, ClientError> {
    let state = Arc::new(bootstrap_state(&config).await?);

    let snapshot = state.session.load().await?;
    info!(signed_in = snapshot.signed_in, "session restored");

    Ok(state)
}
