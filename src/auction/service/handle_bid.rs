use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
    time::OffsetDateTime,
};

pub struct HandleBidInput {
    pub auction_id: entities::AuctionId,
    pub user_id:    entities::UserId,
    pub amount:     entities::BidAmount,
}

impl Service {
    /// Admission check plus persistence. The auction status is re-read from
    /// the store on every call; nothing is cached between admissions. A bid
    /// that catches an expired-but-still-open row is rejected and the row is
    /// conditionally closed on the spot, ahead of the next sweep tick.
    #[tracing::instrument(skip_all, fields(auction_id, bid_id))]
    pub async fn handle_bid(&self, input: HandleBidInput) -> Result<entities::Bid, RestError> {
        tracing::Span::current().record("auction_id", input.auction_id.to_string());
        if input.amount <= 0 {
            return Err(RestError::BadParameters(
                "Bid amount must be positive".to_string(),
            ));
        }

        let auction = self.repo.get_auction(input.auction_id).await?;
        let now = OffsetDateTime::now_utc();
        if !auction.is_open_for_bids(now) {
            if auction.status == entities::AuctionStatus::Open {
                if let Err(err) = self.repo.close_auction(auction.id, now).await {
                    tracing::error!(
                        error = ?err,
                        auction_id = ?auction.id,
                        "Failed to lazily close expired auction",
                    );
                }
            }
            return Err(RestError::AuctionClosed);
        }

        let bid = entities::Bid::new(input.auction_id, input.user_id, input.amount, now);
        tracing::Span::current().record("bid_id", bid.id.to_string());
        self.repo.add_bid(&bid).await?;
        Ok(bid)
    }
}
