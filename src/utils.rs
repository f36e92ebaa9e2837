//! Miscellaneous helper utilities.

use crate::errors::Result;
use ethers::providers::{Http, Provider};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

/// Initialize `tracing` subscriber with env-based filter.
///
/// If `RUST_LOG` is not set, defaults to `info` level. Logs go to stderr so
/// stdout carries only result records.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Build the shared HTTP provider for `rpc_url`.
///
/// No request is sent here; the first contract read is the first round trip.
pub fn connect(rpc_url: &Url) -> Result<Arc<Provider<Http>>> {
    let provider = Provider::<Http>::try_from(rpc_url.as_str())?;
    Ok(Arc::new(provider))
}
