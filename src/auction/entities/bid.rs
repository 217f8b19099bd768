use {
    super::auction::AuctionId,
    time::OffsetDateTime,
    uuid::Uuid,
};

pub type BidId = Uuid;
pub type UserId = Uuid;

/// Amount in the smallest currency unit. Always positive once admitted.
pub type BidAmount = i64;

#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub id:            BidId,
    pub auction_id:    AuctionId,
    pub user_id:       UserId,
    pub amount:        BidAmount,
    pub creation_time: OffsetDateTime,
}

impl Bid {
    pub fn new(
        auction_id: AuctionId,
        user_id: UserId,
        amount: BidAmount,
        creation_time: OffsetDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            auction_id,
            user_id,
            amount,
            creation_time,
        }
    }
}
