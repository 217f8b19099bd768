use {
    super::Repository,
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Repository {
    /// Bids come back in no guaranteed order; callers sort when ranking.
    pub async fn get_bids_by_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<Vec<entities::Bid>, RestError> {
        let bids = self.db.get_bids_by_auction(auction_id).await?;
        Ok(bids.iter().map(|bid| bid.get_bid_entity()).collect())
    }
}
