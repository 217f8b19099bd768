use {
    crate::{
        api::{
            ErrorBodyResponse,
            RestError,
        },
        auction::{
            entities::{
                self,
                AuctionId,
                BidId,
                UserId,
            },
            service::{
                get_bids::GetBidsInput,
                handle_bid::HandleBidInput,
            },
        },
        state::Store,
    },
    axum::{
        extract::{
            Path,
            State,
        },
        Json,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    std::sync::Arc,
    time::OffsetDateTime,
    utoipa::{
        ToResponse,
        ToSchema,
    },
};

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct CreateBid {
    /// The id of the auction to bid on.
    #[schema(example = "obo3bed6-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub auction_id: AuctionId,
    /// The id of the bidding user.
    #[schema(example = "59019ffc-9d0d-4c1e-85e8-2d4f7c64c6a9", value_type = String)]
    pub user_id:    UserId,
    /// Bid amount in the smallest currency unit.
    #[schema(example = 2500)]
    pub amount:     i64,
}

#[derive(Serialize, Deserialize, ToResponse, ToSchema, Clone)]
pub struct BidResult {
    pub status: String,
    /// The unique id created to identify the bid.
    #[schema(example = "beedbeed-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:     BidId,
}

#[derive(Serialize, Deserialize, ToResponse, ToSchema, Clone)]
pub struct Bid {
    /// The unique id of the bid.
    #[schema(example = "beedbeed-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:            BidId,
    /// The id of the auction the bid was placed on.
    #[schema(example = "obo3bed6-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub auction_id:    AuctionId,
    /// The id of the bidding user.
    #[schema(example = "59019ffc-9d0d-4c1e-85e8-2d4f7c64c6a9", value_type = String)]
    pub user_id:       UserId,
    /// Bid amount in the smallest currency unit.
    #[schema(example = 2500)]
    pub amount:        i64,
    /// When the bid was accepted.
    #[schema(value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub creation_time: OffsetDateTime,
}

impl From<entities::Bid> for Bid {
    fn from(bid: entities::Bid) -> Self {
        Self {
            id:            bid.id,
            auction_id:    bid.auction_id,
            user_id:       bid.user_id,
            amount:        bid.amount,
            creation_time: bid.creation_time,
        }
    }
}

/// Bid on a specific auction.
///
/// The bid is accepted only while the auction is still open; a bid arriving at
/// or after the auction's expiration is rejected even if the sweeper has not
/// closed the auction yet.
#[utoipa::path(post, path = "/v1/bids", request_body = CreateBid, responses(
    (status = 200, description = "Bid was placed successfully", body = BidResult,
    example = json!({"status": "OK", "id": "beedbeed-b346-4fa1-8fab-2541a9e1872d"})),
    (status = 400, response = ErrorBodyResponse),
    (status = 404, description = "Auction was not found", body = ErrorBodyResponse),
),)]
pub async fn post_bid(
    State(store): State<Arc<Store>>,
    Json(create_bid): Json<CreateBid>,
) -> Result<Json<BidResult>, RestError> {
    let bid = store
        .auction_service
        .handle_bid(HandleBidInput {
            auction_id: create_bid.auction_id,
            user_id:    create_bid.user_id,
            amount:     create_bid.amount,
        })
        .await?;
    Ok(Json(BidResult {
        status: "OK".to_string(),
        id:     bid.id,
    }))
}

/// List the bids placed on an auction.
#[utoipa::path(get, path = "/v1/bids/{auction_id}",
    params(("auction_id" = String, description = "Auction id to list bids for")),
    responses(
    (status = 200, description = "The bids placed on the auction", body = Vec<Bid>),
    (status = 400, response = ErrorBodyResponse),
),)]
pub async fn get_bids_by_auction(
    State(store): State<Arc<Store>>,
    Path(auction_id): Path<AuctionId>,
) -> Result<Json<Vec<Bid>>, RestError> {
    let bids = store
        .auction_service
        .get_bids(GetBidsInput { auction_id })
        .await?;
    Ok(Json(bids.into_iter().map(|b| b.into()).collect()))
}
