use {
    serde::{
        Deserialize,
        Serialize,
    },
    std::time::Duration,
    time::OffsetDateTime,
    utoipa::ToSchema,
    uuid::Uuid,
};

pub type AuctionId = Uuid;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuctionStatus {
    Open,
    Closed,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductCondition {
    New,
    Used,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub id:              AuctionId,
    pub product_name:    String,
    pub category:        String,
    pub description:     String,
    pub condition:       ProductCondition,
    pub status:          AuctionStatus,
    pub creation_time:   OffsetDateTime,
    pub expiration_time: OffsetDateTime,
}

impl Auction {
    pub fn new(
        product_name: String,
        category: String,
        description: String,
        condition: ProductCondition,
        creation_time: OffsetDateTime,
        lifetime: Duration,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_name,
            category,
            description,
            condition,
            status: AuctionStatus::Open,
            creation_time,
            expiration_time: creation_time + lifetime,
        }
    }

    /// Expiry is exclusive of new bids: a bid arriving exactly at the
    /// expiration instant is already too late.
    pub fn has_expired(&self, now: OffsetDateTime) -> bool {
        now >= self.expiration_time
    }

    pub fn is_open_for_bids(&self, now: OffsetDateTime) -> bool {
        self.status == AuctionStatus::Open && !self.has_expired(now)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::time::Duration,
    };

    fn auction() -> Auction {
        Auction::new(
            "dissertation printer".to_string(),
            "electronics".to_string(),
            "barely used".to_string(),
            ProductCondition::Used,
            OffsetDateTime::now_utc(),
            Duration::from_secs(3600),
        )
    }

    #[test]
    fn new_auction_expires_one_lifetime_after_creation() {
        let auction = auction();
        assert_eq!(auction.status, AuctionStatus::Open);
        assert_eq!(
            auction.expiration_time - auction.creation_time,
            time::Duration::seconds(3600)
        );
    }

    #[test]
    fn expiry_is_exclusive_of_new_bids() {
        let auction = auction();
        assert!(auction.is_open_for_bids(auction.expiration_time - time::Duration::SECOND));
        assert!(!auction.is_open_for_bids(auction.expiration_time));
        assert!(!auction.is_open_for_bids(auction.expiration_time + time::Duration::SECOND));
    }

    #[test]
    fn closed_auction_never_accepts_bids() {
        let mut auction = auction();
        auction.status = AuctionStatus::Closed;
        assert!(!auction.is_open_for_bids(auction.creation_time));
    }
}
