use std::sync::Arc;

use tokio::time::{interval, Duration};

use crate::auth::revocation::SessionRevocations;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 10);

/// Periodically drops revocation entries whose tokens have expired anyway.
pub async fn start_revocation_sweep(revocations: Arc<dyn SessionRevocations>) {
    let mut interval = interval(SWEEP_INTERVAL);

    loop {
        interval.tick().await;

        let purged = revocations.purge_expired().await;
        if purged > 0 {
            tracing::info!(backend = revocations.backend(), "Purged {} expired session revocations", purged);
        }
    }
}
