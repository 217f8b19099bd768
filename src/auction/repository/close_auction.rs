use {
    super::Repository,
    crate::auction::entities,
    time::OffsetDateTime,
    tracing::{
        info_span,
        Instrument,
    },
};

impl Repository {
    /// Close a single auction if it is still open and its expiry has passed.
    /// Returns whether this call performed the transition.
    #[tracing::instrument(skip_all, name = "close_auction_repo", fields(auction_id))]
    pub async fn close_auction(
        &self,
        auction_id: entities::AuctionId,
        now: OffsetDateTime,
    ) -> anyhow::Result<bool> {
        tracing::Span::current().record("auction_id", auction_id.to_string());
        self.db
            .close_auction(auction_id, now)
            .instrument(info_span!("db_close_auction"))
            .await
    }
}
