use {
    super::{
        Auth,
        RestError,
    },
    crate::{
        auction::{
            entities,
            service::{
                create_auction::CreateAuctionInput,
                delete_auction::DeleteAuctionInput,
                end_auction::EndAuctionInput,
                get_auction_by_id::GetAuctionByIdInput,
                get_auctions_by_status::GetAuctionsByStatusInput,
                get_owner_auctions::GetOwnerAuctionsInput,
                update_auction::UpdateAuctionInput,
                verification,
            },
        },
        state::Store,
    },
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
        extract::{
            Path,
            State,
        },
        Json,
    },
    std::sync::Arc,
};

impl From<entities::AuctionStatus> for AuctionStatus {
    fn from(status: entities::AuctionStatus) -> Self {
        match status {
            entities::AuctionStatus::Active => AuctionStatus::Active,
            entities::AuctionStatus::Inactive => AuctionStatus::Inactive,
        }
    }
}

impl From<AuctionStatus> for entities::AuctionStatus {
    fn from(status: AuctionStatus) -> Self {
        match status {
            AuctionStatus::Active => entities::AuctionStatus::Active,
            AuctionStatus::Inactive => entities::AuctionStatus::Inactive,
        }
    }
}

impl From<entities::Auction> for Auction {
    fn from(auction: entities::Auction) -> Self {
        Self {
            id:                auction.id,
            asset_type:        auction.asset_type,
            asset_description: auction.asset_description,
            owner_name:        auction.owner_name,
            owner_id:          auction.owner_id,
            start_date:        auction.start_date,
            end_date:          auction.end_date,
            status:            auction.status.into(),
        }
    }
}

/// Get all auctions in the registry.
///
/// The order of the returned list reflects storage enumeration order and is not
/// part of the contract.
#[utoipa::path(get, path = "/v1/auctions", responses(
    (status = 200, description = "All live auctions", body = Vec<Auction>),
    (status = 503, response = ErrorBodyResponse),
),)]
pub async fn get_auctions(
    State(store): State<Arc<Store>>,
) -> Result<Json<Vec<Auction>>, RestError> {
    let auctions = store.auction_service.get_auctions().await?;
    Ok(Json(auctions.into_iter().map(Auction::from).collect()))
}

/// Get the auction with the specified id.
#[utoipa::path(get, path = "/v1/auctions/{auction_id}", params(
    ("auction_id" = String, Path, description = "Id of the auction to fetch"),
), responses(
    (status = 200, description = "The requested auction", body = Auction),
    (status = 400, response = ErrorBodyResponse),
    (status = 404, description = "Auction was not found", body = ErrorBodyResponse),
),)]
pub async fn get_auction_by_id(
    State(store): State<Arc<Store>>,
    Path(auction_id): Path<String>,
) -> Result<Json<Auction>, RestError> {
    let auction_id = verification::parse_auction_id(&auction_id)?;
    let auction = store
        .auction_service
        .get_auction_by_id(GetAuctionByIdInput { auction_id })
        .await?;
    Ok(Json(auction.into()))
}

/// Get all auctions currently in the given lifecycle status.
#[utoipa::path(get, path = "/v1/auctions/status/{status}", params(
    ("status" = String, Path, description = "Lifecycle status to filter by, \"active\" or \"inactive\""),
), responses(
    (status = 200, description = "All auctions in the given status", body = Vec<Auction>),
    (status = 400, response = ErrorBodyResponse),
),)]
pub async fn get_auctions_by_status(
    State(store): State<Arc<Store>>,
    Path(status): Path<String>,
) -> Result<Json<Vec<Auction>>, RestError> {
    let status = verification::parse_auction_status(&status)?;
    let auctions = store
        .auction_service
        .get_auctions_by_status(GetAuctionsByStatusInput { status })
        .await?;
    Ok(Json(auctions.into_iter().map(Auction::from).collect()))
}

/// Get all auctions owned by the given caller identity.
#[utoipa::path(get, path = "/v1/owners/{owner_id}/auctions", params(
    ("owner_id" = String, Path, description = "Identity of the owner to filter by"),
), responses(
    (status = 200, description = "All auctions owned by the given identity", body = Vec<Auction>),
    (status = 400, response = ErrorBodyResponse),
),)]
pub async fn get_owner_auctions(
    State(store): State<Arc<Store>>,
    Path(owner_id): Path<String>,
) -> Result<Json<Vec<Auction>>, RestError> {
    let owner = verification::parse_owner_id(&owner_id)?;
    let auctions = store
        .auction_service
        .get_owner_auctions(GetOwnerAuctionsInput { owner })
        .await?;
    Ok(Json(auctions.into_iter().map(Auction::from).collect()))
}

/// Create a new auction owned by the caller.
///
/// The server assigns the id, stamps the creation time and grants the
/// configured bidding window. New auctions always start active.
#[utoipa::path(post, path = "/v1/auctions", request_body = CreateAuction, responses(
    (status = 200, description = "The newly created auction", body = Auction),
    (status = 400, response = ErrorBodyResponse),
    (status = 401, description = "No valid caller identity was presented", body = ErrorBodyResponse),
),)]
pub async fn post_auction(
    auth: Auth,
    State(store): State<Arc<Store>>,
    Json(params): Json<CreateAuction>,
) -> Result<Json<Auction>, RestError> {
    let caller = auth.caller()?;
    let auction = store
        .auction_service
        .create_auction(CreateAuctionInput { caller, params })
        .await?;
    Ok(Json(auction.into()))
}

/// Update the asset fields of an auction.
///
/// Only the owner can update, and only while the auction window is still open.
/// Omitted fields keep their stored value.
#[utoipa::path(patch, path = "/v1/auctions/{auction_id}", request_body = UpdateAuction, params(
    ("auction_id" = String, Path, description = "Id of the auction to update"),
), responses(
    (status = 200, description = "The updated auction", body = Auction),
    (status = 400, response = ErrorBodyResponse),
    (status = 401, description = "No valid caller identity was presented", body = ErrorBodyResponse),
    (status = 403, description = "The caller does not own the auction", body = ErrorBodyResponse),
    (status = 404, description = "Auction was not found", body = ErrorBodyResponse),
    (status = 409, description = "The auction window has already elapsed", body = ErrorBodyResponse),
),)]
pub async fn patch_auction(
    auth: Auth,
    State(store): State<Arc<Store>>,
    Path(auction_id): Path<String>,
    Json(params): Json<UpdateAuction>,
) -> Result<Json<Auction>, RestError> {
    let caller = auth.caller()?;
    let auction_id = verification::parse_auction_id(&auction_id)?;
    let auction = store
        .auction_service
        .update_auction(UpdateAuctionInput {
            auction_id,
            caller,
            params,
        })
        .await?;
    Ok(Json(auction.into()))
}

/// End an auction whose window has elapsed.
///
/// Ending finalizes the record: the end date is advanced to the current time
/// and the status becomes inactive. Auctions cannot be ended early.
#[utoipa::path(post, path = "/v1/auctions/{auction_id}/end", params(
    ("auction_id" = String, Path, description = "Id of the auction to end"),
), responses(
    (status = 200, description = "The ended auction", body = Auction),
    (status = 400, response = ErrorBodyResponse),
    (status = 401, description = "No valid caller identity was presented", body = ErrorBodyResponse),
    (status = 403, description = "The caller does not own the auction", body = ErrorBodyResponse),
    (status = 404, description = "Auction was not found", body = ErrorBodyResponse),
    (status = 409, description = "The auction is already ended or its window has not elapsed", body = ErrorBodyResponse),
),)]
pub async fn post_end_auction(
    auth: Auth,
    State(store): State<Arc<Store>>,
    Path(auction_id): Path<String>,
) -> Result<Json<Auction>, RestError> {
    let caller = auth.caller()?;
    let auction_id = verification::parse_auction_id(&auction_id)?;
    let auction = store
        .auction_service
        .end_auction(EndAuctionInput { auction_id, caller })
        .await?;
    Ok(Json(auction.into()))
}

/// Delete an auction.
///
/// Only the owner can delete. The removed record is returned once and cannot
/// be restored.
#[utoipa::path(delete, path = "/v1/auctions/{auction_id}", params(
    ("auction_id" = String, Path, description = "Id of the auction to delete"),
), responses(
    (status = 200, description = "The removed auction", body = Auction),
    (status = 400, response = ErrorBodyResponse),
    (status = 401, description = "No valid caller identity was presented", body = ErrorBodyResponse),
    (status = 403, description = "The caller does not own the auction", body = ErrorBodyResponse),
    (status = 404, description = "Auction was not found", body = ErrorBodyResponse),
),)]
pub async fn delete_auction(
    auth: Auth,
    State(store): State<Arc<Store>>,
    Path(auction_id): Path<String>,
) -> Result<Json<Auction>, RestError> {
    let caller = auth.caller()?;
    let auction_id = verification::parse_auction_id(&auction_id)?;
    let auction = store
        .auction_service
        .delete_auction(DeleteAuctionInput { auction_id, caller })
        .await?;
    Ok(Json(auction.into()))
}
