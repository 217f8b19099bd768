use {
    super::Repository,
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Repository {
    pub async fn get_auctions(&self) -> Result<Vec<entities::Auction>, RestError> {
        let auctions = self.db.get_auctions().await?;
        Ok(auctions
            .iter()
            .map(|auction| auction.get_auction_entity())
            .collect())
    }
}
