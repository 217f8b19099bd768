use {
    crate::{
        api::{
            auction::{
                Auction,
                CreateAuction,
                WinningBid,
            },
            bid::{
                Bid,
                BidResult,
                CreateBid,
            },
            user::User,
        },
        config::RunOptions,
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
        state::Store,
    },
    anyhow::Result,
    axum::{
        http::StatusCode,
        response::{
            IntoResponse,
            Response,
        },
        routing::{
            get,
            post,
        },
        Json,
        Router,
    },
    clap::crate_version,
    serde::Serialize,
    std::sync::{
        atomic::Ordering,
        Arc,
    },
    tower_http::cors::CorsLayer,
    utoipa::{
        OpenApi,
        ToResponse,
        ToSchema,
    },
    utoipa_redoc::{
        Redoc,
        Servable,
    },
};

pub mod auction;
pub mod bid;
pub mod user;

async fn root() -> String {
    format!("Marketplace Auction Server API {}", crate_version!())
}

#[derive(Clone, Debug, PartialEq)]
pub enum RestError {
    /// The request contained invalid parameters
    BadParameters(String),
    /// The auction was not found
    AuctionNotFound,
    /// The user was not found
    UserNotFound,
    /// The auction is closed (or has expired) and accepts no new bids
    AuctionClosed,
    /// Internal error occurred during processing the request
    TemporarilyUnavailable,
}

impl RestError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            RestError::BadParameters(msg) => {
                (StatusCode::BAD_REQUEST, format!("Bad parameters: {}", msg))
            }
            RestError::AuctionNotFound => (
                StatusCode::NOT_FOUND,
                "Auction with the specified id was not found".to_string(),
            ),
            RestError::UserNotFound => (
                StatusCode::NOT_FOUND,
                "User with the specified id was not found".to_string(),
            ),
            RestError::AuctionClosed => (
                StatusCode::BAD_REQUEST,
                "Auction is closed and no longer accepts bids".to_string(),
            ),
            RestError::TemporarilyUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "This service is temporarily unavailable".to_string(),
            ),
        }
    }
}

#[derive(ToResponse, ToSchema, Serialize)]
#[response(description = "An error occurred processing the request")]
pub struct ErrorBodyResponse {
    error: String,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, msg) = self.to_status_and_message();
        (status, Json(ErrorBodyResponse { error: msg })).into_response()
    }
}

pub async fn live() -> Response {
    (StatusCode::OK, "OK").into_response()
}

pub async fn start_api(run_options: RunOptions, store: Arc<Store>) -> Result<()> {
    // Make sure functions included in the paths section have distinct names,
    // otherwise some api generators will fail
    #[derive(OpenApi)]
    #[openapi(
    paths(
    auction::post_auction,
    auction::get_auctions,
    auction::get_auction,
    auction::get_winning_bid,
    bid::post_bid,
    bid::get_bids_by_auction,
    user::get_user,
    ),
    components(
    schemas(
    Auction,
    CreateAuction,
    WinningBid,
    Bid,
    BidResult,
    CreateBid,
    User,
    ErrorBodyResponse,
    ),
    responses(
    ErrorBodyResponse,
    BidResult,
    ),
    ),
    tags(
    (name = "Marketplace Auction Server", description = "The auction server runs marketplace auctions: \
    sellers open an auction with a fixed lifetime, buyers bid on it while it is open, and once the \
    lifetime elapses the auction is closed and the highest bid wins.")
    )
    )]
    struct ApiDoc;

    let auction_routes = Router::new()
        .route("/", post(auction::post_auction))
        .route("/", get(auction::get_auctions))
        .route("/:auction_id", get(auction::get_auction))
        .route("/:auction_id/winner", get(auction::get_winning_bid));
    let bid_routes = Router::new()
        .route("/", post(bid::post_bid))
        .route("/:auction_id", get(bid::get_bids_by_auction));
    let user_routes = Router::new().route("/:user_id", get(user::get_user));

    let v1_routes = Router::new().nest(
        "/v1",
        Router::new()
            .nest("/auctions", auction_routes)
            .nest("/bids", bid_routes)
            .nest("/users", user_routes),
    );

    let app: Router<()> = Router::new()
        .merge(Redoc::with_url("/docs", ApiDoc::openapi()))
        .merge(v1_routes)
        .route("/", get(root))
        .route("/live", get(live))
        .layer(CorsLayer::permissive())
        .with_state(store);

    let listener = tokio::net::TcpListener::bind(&run_options.server.listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            while !SHOULD_EXIT.load(Ordering::Acquire) {
                tokio::time::sleep(EXIT_CHECK_INTERVAL).await;
            }
            tracing::info!("Shutting down RPC server...");
        })
        .await?;
    Ok(())
}
