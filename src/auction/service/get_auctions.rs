use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Service {
    /// Listing reports stored state; expired rows that the sweeper has not
    /// reached yet converge within one sweep interval.
    pub async fn get_auctions(&self) -> Result<Vec<entities::Auction>, RestError> {
        self.repo.get_auctions().await
    }
}
