use {
    crate::{
        config::RunOptions,
        kernel::entities::CallerId,
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
        state::Store,
    },
    anyhow::Result,
    auction_registry_api_types::{
        auction::{
            Auction,
            AuctionStatus,
            CreateAuction,
            UpdateAuction,
        },
        ErrorBodyResponse,
    },
    axum::{
        async_trait,
        extract::FromRequestParts,
        http::{
            request::Parts,
            StatusCode,
        },
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
    axum_extra::{
        headers::{
            authorization::Bearer,
            Authorization,
        },
        TypedHeader,
    },
    clap::crate_version,
    std::sync::{
        atomic::Ordering,
        Arc,
    },
    tower_http::cors::CorsLayer,
    utoipa::OpenApi,
    utoipa_redoc::{
        Redoc,
        Servable,
    },
};

async fn root() -> String {
    format!("Auction Registry API {}", crate_version!())
}

pub(crate) mod auction;

#[derive(Clone, Debug, PartialEq)]
pub enum RestError {
    /// The request contained invalid parameters
    BadParameters(String),
    /// The caller did not present a valid identity
    Unauthorized,
    /// The caller is not the owner of the auction
    Forbidden,
    /// The auction with the specified id was not found
    AuctionNotFound,
    /// The auction window has elapsed and the record can no longer be modified
    AuctionClosed,
    /// The auction has already been ended
    AuctionAlreadyEnded,
    /// The auction window has not elapsed yet
    AuctionStillActive,
    /// Internal error occurred during processing the request
    TemporarilyUnavailable,
}

impl RestError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            RestError::BadParameters(msg) => {
                (StatusCode::BAD_REQUEST, format!("Bad parameters: {}", msg))
            }
            RestError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Missing or invalid credentials".to_string(),
            ),
            RestError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Only the owner of the auction can perform this action".to_string(),
            ),
            RestError::AuctionNotFound => (
                StatusCode::NOT_FOUND,
                "Auction with the specified id was not found".to_string(),
            ),
            RestError::AuctionClosed => (
                StatusCode::CONFLICT,
                "The auction window has elapsed, the auction can no longer be modified"
                    .to_string(),
            ),
            RestError::AuctionAlreadyEnded => (
                StatusCode::CONFLICT,
                "The auction has already been ended".to_string(),
            ),
            RestError::AuctionStillActive => (
                StatusCode::CONFLICT,
                "The auction window has not elapsed yet".to_string(),
            ),
            RestError::TemporarilyUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "This service is temporarily unavailable".to_string(),
            ),
        }
    }
}

impl std::fmt::Display for RestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (_, msg) = self.to_status_and_message();
        write!(f, "{}", msg)
    }
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

/// The caller identity presented with the request.
///
/// How the identity is established is the gateway's concern; all the registry
/// relies on is a stable caller id per bearer.
pub enum Auth {
    Authorized(CallerId),
    Unauthenticated,
}

impl Auth {
    pub fn caller(&self) -> Result<CallerId, RestError> {
        match self {
            Auth::Authorized(caller) => Ok(*caller),
            Auth::Unauthenticated => Err(RestError::Unauthorized),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => match bearer.token().parse::<CallerId>() {
                Ok(caller) => Ok(Self::Authorized(caller)),
                Err(_) => Ok(Self::Unauthenticated),
            },
            Err(_) => Ok(Self::Unauthenticated),
        }
    }
}

pub async fn start_api(run_options: RunOptions, store: Arc<Store>) -> Result<()> {
    // Make sure functions included in the paths section have distinct names, otherwise some api generators will fail
    #[derive(OpenApi)]
    #[openapi(
    paths(
    auction::get_auctions,
    auction::get_auction_by_id,
    auction::get_auctions_by_status,
    auction::get_owner_auctions,
    auction::post_auction,
    auction::patch_auction,
    auction::post_end_auction,
    auction::delete_auction,
    ),
    components(
    schemas(
    Auction,
    AuctionStatus,
    CreateAuction,
    UpdateAuction,
    ErrorBodyResponse,
    ),
    responses(
    ErrorBodyResponse,
    Auction,
    ),
    ),
    tags(
    (name = "Auction Registry", description = "Auction Registry keeps the canonical record of every auction:\
    who owns it, what is on offer and where it stands in its lifecycle.")
    )
    )]
    struct ApiDoc;

    let auction_routes = Router::new()
        .route("/", get(auction::get_auctions).post(auction::post_auction))
        .route("/status/:status", get(auction::get_auctions_by_status))
        .route(
            "/:auction_id",
            get(auction::get_auction_by_id)
                .patch(auction::patch_auction)
                .delete(auction::delete_auction),
        )
        .route("/:auction_id/end", post(auction::post_end_auction));
    let owner_routes = Router::new().route("/:owner_id/auctions", get(auction::get_owner_auctions));

    let v1_routes = Router::new().nest(
        "/v1",
        Router::new()
            .nest("/auctions", auction_routes)
            .nest("/owners", owner_routes),
    );

    let app: Router<()> = Router::new()
        .merge(Redoc::with_url("/docs", ApiDoc::openapi()))
        .merge(v1_routes)
        .route("/", get(root))
        .route("/live", get(live))
        .layer(CorsLayer::permissive())
        .with_state(store);

    let listener = tokio::net::TcpListener::bind(&run_options.server.listen_addr).await?;
    tracing::info!("Listening on {}", run_options.server.listen_addr);
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
