use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

pub struct GetBidsInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    pub async fn get_bids(&self, input: GetBidsInput) -> Result<Vec<entities::Bid>, RestError> {
        self.repo.get_bids_by_auction(input.auction_id).await
    }
}
