use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
    time::OffsetDateTime,
};

pub struct AddAuctionInput {
    pub product_name: String,
    pub category:     String,
    pub description:  String,
    pub condition:    entities::ProductCondition,
}

impl Service {
    #[tracing::instrument(skip_all, fields(auction_id))]
    pub async fn add_auction(
        &self,
        input: AddAuctionInput,
    ) -> Result<entities::Auction, RestError> {
        if input.product_name.trim().is_empty() {
            return Err(RestError::BadParameters(
                "Product name must not be empty".to_string(),
            ));
        }
        if input.category.trim().is_empty() {
            return Err(RestError::BadParameters(
                "Category must not be empty".to_string(),
            ));
        }
        if input.description.trim().is_empty() {
            return Err(RestError::BadParameters(
                "Description must not be empty".to_string(),
            ));
        }

        let auction = entities::Auction::new(
            input.product_name,
            input.category,
            input.description,
            input.condition,
            OffsetDateTime::now_utc(),
            self.config.auction_lifetime,
        );
        tracing::Span::current().record("auction_id", auction.id.to_string());
        self.repo.add_auction(&auction).await?;
        Ok(auction)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::{
            repository::MockDatabase,
            service::tests::TEST_AUCTION_LIFETIME,
        },
    };

    fn input() -> AddAuctionInput {
        AddAuctionInput {
            product_name: "standing desk".to_string(),
            category:     "furniture".to_string(),
            description:  "adjustable height".to_string(),
            condition:    entities::ProductCondition::New,
        }
    }

    #[tokio::test]
    async fn new_auction_is_open_and_expires_after_the_configured_lifetime() {
        let mut db = MockDatabase::default();
        db.expect_add_auction()
            .times(1)
            .withf(|auction| {
                auction.status == entities::AuctionStatus::Open
                    && auction.expiration_time - auction.creation_time == TEST_AUCTION_LIFETIME
            })
            .returning(|_| Ok(()));
        let service = Service::new_with_mocks(db);

        let auction = service.add_auction(input()).await.unwrap();
        assert_eq!(auction.status, entities::AuctionStatus::Open);
        assert_eq!(
            auction.expiration_time,
            auction.creation_time + TEST_AUCTION_LIFETIME
        );
    }

    #[tokio::test]
    async fn empty_product_name_is_rejected_before_touching_the_store() {
        let db = MockDatabase::default();
        let service = Service::new_with_mocks(db);

        let result = service
            .add_auction(AddAuctionInput {
                product_name: "  ".to_string(),
                ..input()
            })
            .await;
        assert!(matches!(result, Err(RestError::BadParameters(_))));
    }

    #[tokio::test]
    async fn store_failure_propagates_as_retryable() {
        let mut db = MockDatabase::default();
        db.expect_add_auction()
            .returning(|_| Err(RestError::TemporarilyUnavailable));
        let service = Service::new_with_mocks(db);

        let result = service.add_auction(input()).await;
        assert!(matches!(result, Err(RestError::TemporarilyUnavailable)));
    }
}
