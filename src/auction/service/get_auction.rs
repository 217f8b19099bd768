use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
    time::OffsetDateTime,
};

pub struct GetAuctionInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    /// Point lookup with lazy expiry detection: an expired row that the
    /// sweeper has not caught yet is closed here, so readers between two
    /// sweep ticks never observe a stale open status.
    #[tracing::instrument(skip_all, fields(auction_id))]
    pub async fn get_auction(&self, input: GetAuctionInput) -> Result<entities::Auction, RestError> {
        tracing::Span::current().record("auction_id", input.auction_id.to_string());
        let mut auction = self.repo.get_auction(input.auction_id).await?;

        let now = OffsetDateTime::now_utc();
        if auction.status == entities::AuctionStatus::Open && auction.has_expired(now) {
            if let Err(err) = self.repo.close_auction(auction.id, now).await {
                tracing::error!(
                    error = ?err,
                    auction_id = ?auction.id,
                    "Failed to lazily close expired auction",
                );
            }
            auction.status = entities::AuctionStatus::Closed;
        }
        Ok(auction)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::repository::{
            self,
            MockDatabase,
        },
        time::{
            Duration,
            PrimitiveDateTime,
        },
        uuid::Uuid,
    };

    fn auction_row(status: repository::AuctionStatus, expires_in: Duration) -> repository::Auction {
        let now = OffsetDateTime::now_utc();
        let creation = PrimitiveDateTime::new(now.date(), now.time()) - Duration::hours(1);
        repository::Auction {
            id: Uuid::new_v4(),
            product_name: "road bike".to_string(),
            category: "sports".to_string(),
            description: "54cm frame".to_string(),
            condition: repository::ProductCondition::Used,
            status,
            creation_time: creation,
            expiration_time: PrimitiveDateTime::new(now.date(), now.time()) + expires_in,
        }
    }

    #[tokio::test]
    async fn open_unexpired_auction_is_returned_as_is() {
        let row = auction_row(repository::AuctionStatus::Open, Duration::hours(1));
        let auction_id = row.id;
        let mut db = MockDatabase::default();
        db.expect_get_auction()
            .returning(move |_| Ok(row.clone()));
        db.expect_close_auction().never();
        let service = Service::new_with_mocks(db);

        let auction = service.get_auction(GetAuctionInput { auction_id }).await.unwrap();
        assert_eq!(auction.status, entities::AuctionStatus::Open);
    }

    #[tokio::test]
    async fn expired_open_auction_is_lazily_closed() {
        let row = auction_row(repository::AuctionStatus::Open, -Duration::minutes(10));
        let auction_id = row.id;
        let mut db = MockDatabase::default();
        db.expect_get_auction()
            .returning(move |_| Ok(row.clone()));
        db.expect_close_auction()
            .times(1)
            .withf(move |id, _| *id == auction_id)
            .returning(|_, _| Ok(true));
        let service = Service::new_with_mocks(db);

        let auction = service.get_auction(GetAuctionInput { auction_id }).await.unwrap();
        assert_eq!(auction.status, entities::AuctionStatus::Closed);
    }

    #[tokio::test]
    async fn already_closed_auction_is_not_closed_again() {
        let row = auction_row(repository::AuctionStatus::Closed, -Duration::minutes(10));
        let auction_id = row.id;
        let mut db = MockDatabase::default();
        db.expect_get_auction()
            .returning(move |_| Ok(row.clone()));
        db.expect_close_auction().never();
        let service = Service::new_with_mocks(db);

        let auction = service.get_auction(GetAuctionInput { auction_id }).await.unwrap();
        assert_eq!(auction.status, entities::AuctionStatus::Closed);
    }

    #[tokio::test]
    async fn missing_auction_is_a_domain_outcome() {
        let mut db = MockDatabase::default();
        db.expect_get_auction()
            .returning(|_| Err(RestError::AuctionNotFound));
        let service = Service::new_with_mocks(db);

        let result = service
            .get_auction(GetAuctionInput {
                auction_id: Uuid::new_v4(),
            })
            .await;
        assert!(matches!(result, Err(RestError::AuctionNotFound)));
    }
}
