#[cfg(test)]
use mockall::automock;
use {
    super::entities,
    crate::{
        api::RestError,
        kernel::db::DB,
    },
    axum::async_trait,
    sqlx::FromRow,
    std::fmt::Debug,
    time::{
        OffsetDateTime,
        PrimitiveDateTime,
        UtcOffset,
    },
    tracing::instrument,
};

#[derive(Clone, Copy, Debug, PartialEq, sqlx::Type)]
#[sqlx(type_name = "auction_status", rename_all = "lowercase")]
pub enum AuctionStatus {
    Open,
    Closed,
}

impl From<entities::AuctionStatus> for AuctionStatus {
    fn from(status: entities::AuctionStatus) -> Self {
        match status {
            entities::AuctionStatus::Open => AuctionStatus::Open,
            entities::AuctionStatus::Closed => AuctionStatus::Closed,
        }
    }
}

impl From<AuctionStatus> for entities::AuctionStatus {
    fn from(status: AuctionStatus) -> Self {
        match status {
            AuctionStatus::Open => entities::AuctionStatus::Open,
            AuctionStatus::Closed => entities::AuctionStatus::Closed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, sqlx::Type)]
#[sqlx(type_name = "product_condition", rename_all = "lowercase")]
pub enum ProductCondition {
    New,
    Used,
}

impl From<entities::ProductCondition> for ProductCondition {
    fn from(condition: entities::ProductCondition) -> Self {
        match condition {
            entities::ProductCondition::New => ProductCondition::New,
            entities::ProductCondition::Used => ProductCondition::Used,
        }
    }
}

impl From<ProductCondition> for entities::ProductCondition {
    fn from(condition: ProductCondition) -> Self {
        match condition {
            ProductCondition::New => entities::ProductCondition::New,
            ProductCondition::Used => entities::ProductCondition::Used,
        }
    }
}

fn primitive(time: OffsetDateTime) -> PrimitiveDateTime {
    PrimitiveDateTime::new(time.date(), time.time())
}

#[derive(Clone, FromRow, Debug)]
pub struct Auction {
    pub id:              entities::AuctionId,
    pub product_name:    String,
    pub category:        String,
    pub description:     String,
    pub condition:       ProductCondition,
    pub status:          AuctionStatus,
    pub creation_time:   PrimitiveDateTime,
    pub expiration_time: PrimitiveDateTime,
}

impl Auction {
    pub fn get_auction_entity(&self) -> entities::Auction {
        entities::Auction {
            id:              self.id,
            product_name:    self.product_name.clone(),
            category:        self.category.clone(),
            description:     self.description.clone(),
            condition:       self.condition.into(),
            status:          self.status.into(),
            creation_time:   self.creation_time.assume_offset(UtcOffset::UTC),
            expiration_time: self.expiration_time.assume_offset(UtcOffset::UTC),
        }
    }
}

#[derive(Clone, FromRow, Debug)]
pub struct Bid {
    pub id:            entities::BidId,
    pub auction_id:    entities::AuctionId,
    pub user_id:       entities::UserId,
    pub amount:        i64,
    pub creation_time: PrimitiveDateTime,
}

impl Bid {
    pub fn get_bid_entity(&self) -> entities::Bid {
        entities::Bid {
            id:            self.id,
            auction_id:    self.auction_id,
            user_id:       self.user_id,
            amount:        self.amount,
            creation_time: self.creation_time.assume_offset(UtcOffset::UTC),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    async fn add_auction(&self, auction: &entities::Auction) -> Result<(), RestError>;
    async fn add_bid(&self, bid: &entities::Bid) -> Result<(), RestError>;
    async fn get_auction(&self, auction_id: entities::AuctionId) -> Result<Auction, RestError>;
    async fn get_auctions(&self) -> Result<Vec<Auction>, RestError>;
    async fn get_bids_by_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<Vec<Bid>, RestError>;
    async fn close_auction(
        &self,
        auction_id: entities::AuctionId,
        now: OffsetDateTime,
    ) -> anyhow::Result<bool>;
    async fn close_expired_auctions(&self, now: OffsetDateTime) -> anyhow::Result<u64>;
}

#[async_trait]
impl Database for DB {
    #[instrument(
        target = "metrics",
        name = "db_add_auction",
        fields(
            category = "db_queries",
            result = "success",
            name = "add_auction",
            tracing_enabled
        ),
        skip_all
    )]
    async fn add_auction(&self, auction: &entities::Auction) -> Result<(), RestError> {
        sqlx::query(
            "INSERT INTO auction (id, product_name, category, description, condition, status, creation_time, expiration_time) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(auction.id)
        .bind(&auction.product_name)
        .bind(&auction.category)
        .bind(&auction.description)
        .bind(ProductCondition::from(auction.condition))
        .bind(AuctionStatus::from(auction.status))
        .bind(primitive(auction.creation_time))
        .bind(primitive(auction.expiration_time))
        .execute(self)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), auction = ?auction, "DB: Failed to insert auction");
            RestError::TemporarilyUnavailable
        })?;
        Ok(())
    }

    #[instrument(
        target = "metrics",
        name = "db_add_bid",
        fields(
            category = "db_queries",
            result = "success",
            name = "add_bid",
            tracing_enabled
        ),
        skip_all
    )]
    async fn add_bid(&self, bid: &entities::Bid) -> Result<(), RestError> {
        sqlx::query(
            "INSERT INTO bid (id, auction_id, user_id, amount, creation_time) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(bid.id)
        .bind(bid.auction_id)
        .bind(bid.user_id)
        .bind(bid.amount)
        .bind(primitive(bid.creation_time))
        .execute(self)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), bid = ?bid, "DB: Failed to insert bid");
            RestError::TemporarilyUnavailable
        })?;
        Ok(())
    }

    #[instrument(
        target = "metrics",
        name = "db_get_auction",
        fields(
            category = "db_queries",
            result = "success",
            name = "get_auction",
            tracing_enabled
        ),
        skip_all
    )]
    async fn get_auction(&self, auction_id: entities::AuctionId) -> Result<Auction, RestError> {
        sqlx::query_as("SELECT * FROM auction WHERE id = $1")
            .bind(auction_id)
            .fetch_one(self)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => RestError::AuctionNotFound,
                _ => {
                    tracing::Span::current().record("result", "error");
                    tracing::error!(
                        error = e.to_string(),
                        auction_id = auction_id.to_string(),
                        "Failed to get auction from db"
                    );
                    RestError::TemporarilyUnavailable
                }
            })
    }

    #[instrument(
        target = "metrics",
        name = "db_get_auctions",
        fields(
            category = "db_queries",
            result = "success",
            name = "get_auctions",
            tracing_enabled
        ),
        skip_all
    )]
    async fn get_auctions(&self) -> Result<Vec<Auction>, RestError> {
        sqlx::query_as("SELECT * FROM auction ORDER BY creation_time DESC")
            .fetch_all(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(error = e.to_string(), "Failed to get auctions from db");
                RestError::TemporarilyUnavailable
            })
    }

    #[instrument(
        target = "metrics",
        name = "db_get_bids_by_auction",
        fields(
            category = "db_queries",
            result = "success",
            name = "get_bids_by_auction",
            tracing_enabled
        ),
        skip_all
    )]
    async fn get_bids_by_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<Vec<Bid>, RestError> {
        sqlx::query_as("SELECT * FROM bid WHERE auction_id = $1")
            .bind(auction_id)
            .fetch_all(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(
                    error = e.to_string(),
                    auction_id = auction_id.to_string(),
                    "Failed to get bids from db"
                );
                RestError::TemporarilyUnavailable
            })
    }

    #[instrument(
        target = "metrics",
        name = "db_close_auction",
        fields(
            category = "db_queries",
            result = "success",
            name = "close_auction",
            tracing_enabled
        ),
        skip_all
    )]
    async fn close_auction(
        &self,
        auction_id: entities::AuctionId,
        now: OffsetDateTime,
    ) -> anyhow::Result<bool> {
        // Conditional close: flips the status only while the stored row is
        // still open and past its expiry, so racing detectors converge
        // without any in-process lock. Re-applying is a no-op.
        let result = sqlx::query(
            "UPDATE auction SET status = $1 WHERE id = $2 AND status = $3 AND expiration_time <= $4",
        )
        .bind(AuctionStatus::Closed)
        .bind(auction_id)
        .bind(AuctionStatus::Open)
        .bind(primitive(now))
        .execute(self)
        .await
        .inspect_err(|_| {
            tracing::Span::current().record("result", "error");
        })?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(
        target = "metrics",
        name = "db_close_expired_auctions",
        fields(
            category = "db_queries",
            result = "success",
            name = "close_expired_auctions",
            tracing_enabled
        ),
        skip_all
    )]
    async fn close_expired_auctions(&self, now: OffsetDateTime) -> anyhow::Result<u64> {
        let result =
            sqlx::query("UPDATE auction SET status = $1 WHERE status = $2 AND expiration_time <= $3")
                .bind(AuctionStatus::Closed)
                .bind(AuctionStatus::Open)
                .bind(primitive(now))
                .execute(self)
                .await
                .inspect_err(|_| {
                    tracing::Span::current().record("result", "error");
                })?;
        Ok(result.rows_affected())
    }
}
