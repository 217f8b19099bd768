use {
    super::Repository,
    time::OffsetDateTime,
};

impl Repository {
    /// Bulk conditional close of every open auction whose expiry has passed.
    /// Returns the number of auctions closed by this sweep.
    pub async fn close_expired_auctions(&self, now: OffsetDateTime) -> anyhow::Result<u64> {
        self.db.close_expired_auctions(now).await
    }
}
