use {
    crate::{
        api::{
            bid::Bid,
            ErrorBodyResponse,
            RestError,
        },
        auction::{
            entities::{
                self,
                AuctionId,
                AuctionStatus,
                ProductCondition,
            },
            service::{
                add_auction::AddAuctionInput,
                get_auction::GetAuctionInput,
                get_winning_bid::GetWinningBidInput,
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
pub struct CreateAuction {
    /// The name of the product being auctioned.
    #[schema(example = "mechanical keyboard")]
    pub product_name: String,
    /// The product category.
    #[schema(example = "electronics")]
    pub category:     String,
    /// A free-form description of the product.
    #[schema(example = "tenkeyless, brown switches")]
    pub description:  String,
    pub condition:    ProductCondition,
}

#[derive(Serialize, Deserialize, ToResponse, ToSchema, Clone)]
pub struct Auction {
    /// The unique id of the auction.
    #[schema(example = "obo3bed6-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:              AuctionId,
    pub product_name:    String,
    pub category:        String,
    pub description:     String,
    pub condition:       ProductCondition,
    pub status:          AuctionStatus,
    /// When the auction was opened.
    #[schema(value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub creation_time:   OffsetDateTime,
    /// When the auction stops accepting bids.
    #[schema(value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub expiration_time: OffsetDateTime,
}

impl From<entities::Auction> for Auction {
    fn from(auction: entities::Auction) -> Self {
        Self {
            id:              auction.id,
            product_name:    auction.product_name,
            category:        auction.category,
            description:     auction.description,
            condition:       auction.condition,
            status:          auction.status,
            creation_time:   auction.creation_time,
            expiration_time: auction.expiration_time,
        }
    }
}

#[derive(Serialize, Deserialize, ToResponse, ToSchema, Clone)]
pub struct WinningBid {
    /// The leading bid, or null when the auction has no bids yet. Final only
    /// once the auction status is closed.
    pub winning_bid: Option<Bid>,
}

/// Open a new auction.
///
/// The auction accepts bids from now until the configured auction lifetime has
/// elapsed, after which it is closed automatically.
#[utoipa::path(post, path = "/v1/auctions", request_body = CreateAuction, responses(
    (status = 200, description = "Auction was opened successfully", body = Auction),
    (status = 400, response = ErrorBodyResponse),
),)]
pub async fn post_auction(
    State(store): State<Arc<Store>>,
    Json(create_auction): Json<CreateAuction>,
) -> Result<Json<Auction>, RestError> {
    let auction = store
        .auction_service
        .add_auction(AddAuctionInput {
            product_name: create_auction.product_name,
            category:     create_auction.category,
            description:  create_auction.description,
            condition:    create_auction.condition,
        })
        .await?;
    Ok(Json(auction.into()))
}

/// List all auctions.
#[utoipa::path(get, path = "/v1/auctions", responses(
    (status = 200, description = "All auctions", body = Vec<Auction>),
    (status = 400, response = ErrorBodyResponse),
),)]
pub async fn get_auctions(
    State(store): State<Arc<Store>>,
) -> Result<Json<Vec<Auction>>, RestError> {
    let auctions = store.auction_service.get_auctions().await?;
    Ok(Json(auctions.into_iter().map(|a| a.into()).collect()))
}

/// Query an auction by its id.
#[utoipa::path(get, path = "/v1/auctions/{auction_id}",
    params(("auction_id" = String, description = "Auction id to query for")),
    responses(
    (status = 200, description = "The auction with the specified id", body = Auction),
    (status = 404, description = "Auction was not found", body = ErrorBodyResponse),
),)]
pub async fn get_auction(
    State(store): State<Arc<Store>>,
    Path(auction_id): Path<AuctionId>,
) -> Result<Json<Auction>, RestError> {
    let auction = store
        .auction_service
        .get_auction(GetAuctionInput { auction_id })
        .await?;
    Ok(Json(auction.into()))
}

/// Query the winning bid of an auction.
///
/// On a still open auction this returns the current leading bid.
#[utoipa::path(get, path = "/v1/auctions/{auction_id}/winner",
    params(("auction_id" = String, description = "Auction id to query the winner for")),
    responses(
    (status = 200, description = "The winning bid, if any", body = WinningBid),
    (status = 404, description = "Auction was not found", body = ErrorBodyResponse),
),)]
pub async fn get_winning_bid(
    State(store): State<Arc<Store>>,
    Path(auction_id): Path<AuctionId>,
) -> Result<Json<WinningBid>, RestError> {
    let winning_bid = store
        .auction_service
        .get_winning_bid(GetWinningBidInput { auction_id })
        .await?;
    Ok(Json(WinningBid {
        winning_bid: winning_bid.map(|b| b.into()),
    }))
}
