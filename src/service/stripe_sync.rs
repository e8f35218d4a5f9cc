use anyhow::Result;

use crate::repo::payments_repo::PaymentsRepo;
use crate::repo::sessions_repo::SessionsRepo;
use crate::service::settlement::SettlementService;

/// Best-effort startup reconciliation: payments that began a checkout but
/// never saw a verification call are re-checked against the provider once.
/// Runs detached from request handling; nothing awaits it.
#[derive(Clone)]
pub struct StripeSyncTask {
    pub settlement: SettlementService,
    pub payments_repo: PaymentsRepo,
    pub sessions_repo: SessionsRepo,
}

impl StripeSyncTask {
    pub async fn run(self) {
        if let Err(err) = self.sync_backfill().await {
            tracing::warn!("stripe backfill failed: {}", err);
        }
        match self.sessions_repo.reap_expired().await {
            Ok(n) if n > 0 => tracing::info!("reaped {} expired sessions", n),
            Ok(_) => {}
            Err(err) => tracing::warn!("session reap failed: {}", err),
        }
    }

    async fn sync_backfill(&self) -> Result<()> {
        let stale = self.payments_repo.list_unsettled(100).await?;
        if stale.is_empty() {
            return Ok(());
        }

        tracing::info!("reconciling {} unsettled payments", stale.len());
        for payment in stale {
            let Some(session_id) = payment.stripe_session_id.as_deref() else {
                continue;
            };
            match self.settlement.provider.retrieve_checkout_session(session_id).await {
                Ok(session) if session.is_paid() => {
                    if let Err(e) = self.settlement.settle_paid_session(&session).await {
                        tracing::warn!("reconcile settle failed for {}: {}", session_id, e);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("reconcile retrieve failed for {}: {}", session_id, e);
                }
            }
        }

        Ok(())
    }
}
