use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

pub struct GetWinningBidInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    /// Highest amount wins; equal amounts go to the earliest bid. On a still
    /// open auction this is the current leading bid, so callers that need a
    /// final result must check the auction status first. No bids is not an
    /// error.
    #[tracing::instrument(skip_all, fields(auction_id))]
    pub async fn get_winning_bid(
        &self,
        input: GetWinningBidInput,
    ) -> Result<Option<entities::Bid>, RestError> {
        tracing::Span::current().record("auction_id", input.auction_id.to_string());
        let bids = self.repo.get_bids_by_auction(input.auction_id).await?;
        Ok(bids.into_iter().max_by(|a, b| {
            a.amount
                .cmp(&b.amount)
                .then_with(|| b.creation_time.cmp(&a.creation_time))
        }))
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
            OffsetDateTime,
            PrimitiveDateTime,
        },
        uuid::Uuid,
    };

    fn bid_row(amount: i64, placed_at: PrimitiveDateTime) -> repository::Bid {
        repository::Bid {
            id: Uuid::new_v4(),
            auction_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            amount,
            creation_time: placed_at,
        }
    }

    fn service_with_bids(bids: Vec<repository::Bid>) -> Service {
        let mut db = MockDatabase::default();
        db.expect_get_bids_by_auction()
            .returning(move |_| Ok(bids.clone()));
        Service::new_with_mocks(db)
    }

    #[tokio::test]
    async fn no_bids_means_no_winner() {
        let service = service_with_bids(vec![]);
        let winner = service
            .get_winning_bid(GetWinningBidInput {
                auction_id: Uuid::new_v4(),
            })
            .await
            .unwrap();
        assert!(winner.is_none());
    }

    #[tokio::test]
    async fn highest_amount_wins() {
        let now = OffsetDateTime::now_utc();
        let now = PrimitiveDateTime::new(now.date(), now.time());
        let best = bid_row(300, now);
        let bids = vec![bid_row(100, now - Duration::minutes(2)), best.clone(), bid_row(200, now - Duration::minutes(1))];
        let service = service_with_bids(bids);

        let winner = service
            .get_winning_bid(GetWinningBidInput {
                auction_id: Uuid::new_v4(),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(winner.id, best.id);
        assert_eq!(winner.amount, 300);
    }

    #[tokio::test]
    async fn equal_amounts_go_to_the_earliest_bid() {
        let now = OffsetDateTime::now_utc();
        let now = PrimitiveDateTime::new(now.date(), now.time());
        let earliest = bid_row(500, now - Duration::minutes(30));
        let bids = vec![bid_row(500, now), earliest.clone(), bid_row(500, now - Duration::minutes(10))];
        let service = service_with_bids(bids);

        let winner = service
            .get_winning_bid(GetWinningBidInput {
                auction_id: Uuid::new_v4(),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(winner.id, earliest.id);
    }
}
