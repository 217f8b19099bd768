use {
    super::Service,
    crate::server::{
        EXIT_CHECK_INTERVAL,
        SHOULD_EXIT,
    },
    std::sync::atomic::Ordering,
    time::OffsetDateTime,
};

impl Service {
    /// The expiration sweeper: one long-lived task per process, started at
    /// startup next to the API server. Each tick issues the bulk conditional
    /// close; a failed tick is logged and the next tick is the retry.
    pub async fn run_sweeper_loop(&self) -> anyhow::Result<()> {
        tracing::info!(
            interval = ?self.config.sweep_interval,
            "Starting auction expiration sweeper...",
        );
        let mut sweep_interval = tokio::time::interval(self.config.sweep_interval);
        let mut exit_check_interval = tokio::time::interval(EXIT_CHECK_INTERVAL);
        while !SHOULD_EXIT.load(Ordering::Acquire) {
            tokio::select! {
                _ = sweep_interval.tick() => {
                    self.sweep_expired_auctions().await;
                }
                _ = exit_check_interval.tick() => {}
            }
        }
        tracing::info!("Shutting down auction expiration sweeper...");
        Ok(())
    }

    /// One sweep: close every open auction whose expiry has passed. Returns
    /// the number of auctions closed; store errors are swallowed because the
    /// following tick self-heals.
    pub async fn sweep_expired_auctions(&self) -> u64 {
        match self
            .repo
            .close_expired_auctions(OffsetDateTime::now_utc())
            .await
        {
            Ok(count) => {
                if count > 0 {
                    tracing::info!(count, "Closed expired auctions");
                } else {
                    tracing::debug!("No expired auctions to close");
                }
                count
            }
            Err(err) => {
                tracing::error!(error = ?err, "Failed to close expired auctions");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::repository::MockDatabase,
        mockall::Sequence,
    };

    #[tokio::test]
    async fn second_sweep_with_no_new_expirations_closes_nothing() {
        let mut seq = Sequence::new();
        let mut db = MockDatabase::default();
        db.expect_close_expired_auctions()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(3));
        db.expect_close_expired_auctions()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(0));
        let service = Service::new_with_mocks(db);

        assert_eq!(service.sweep_expired_auctions().await, 3);
        assert_eq!(service.sweep_expired_auctions().await, 0);
    }

    #[tokio::test]
    async fn store_failure_does_not_kill_the_sweeper() {
        let mut seq = Sequence::new();
        let mut db = MockDatabase::default();
        db.expect_close_expired_auctions()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(anyhow::anyhow!("store unavailable")));
        db.expect_close_expired_auctions()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(1));
        let service = Service::new_with_mocks(db);

        // Failed tick is swallowed; the next tick is the retry.
        assert_eq!(service.sweep_expired_auctions().await, 0);
        assert_eq!(service.sweep_expired_auctions().await, 1);
    }
}
