use {
    super::{
        verification,
        Service,
    },
    crate::{
        api::RestError,
        auction::entities,
        kernel::entities::CallerId,
    },
    auction_registry_api_types::auction::UpdateAuction,
};

#[derive(Clone, Debug)]
pub struct UpdateAuctionInput {
    pub auction_id: entities::AuctionId,
    pub caller:     CallerId,
    pub params:     UpdateAuction,
}

impl Service {
    async fn update_auction_for_lock(
        &self,
        input: UpdateAuctionInput,
        lock: entities::AuctionLock,
    ) -> Result<entities::Auction, RestError> {
        let _lock = lock.lock().await;
        verification::validate_update(&input.params)?;

        let auction = self
            .repo
            .get_auction(input.auction_id)
            .await?
            .ok_or(RestError::AuctionNotFound)?;
        if !auction.is_owned_by(input.caller) {
            return Err(RestError::Forbidden);
        }
        if auction.is_closed(self.clock.now()) {
            return Err(RestError::AuctionClosed);
        }

        // Field-wise merge. Identity, ownership, window and status are never
        // touched by an update.
        let updated = entities::Auction {
            id:                auction.id,
            asset_type:        input.params.asset_type.unwrap_or(auction.asset_type),
            asset_description: input
                .params
                .asset_description
                .unwrap_or(auction.asset_description),
            owner_name:        input.params.owner_name.unwrap_or(auction.owner_name),
            owner_id:          auction.owner_id,
            start_date:        auction.start_date,
            end_date:          auction.end_date,
            status:            auction.status,
        };
        self.repo.update_auction(&updated).await?;
        Ok(updated)
    }

    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(auction_id = %input.auction_id))]
    pub async fn update_auction(
        &self,
        input: UpdateAuctionInput,
    ) -> Result<entities::Auction, RestError> {
        let lock = self.repo.get_or_create_auction_lock(input.auction_id).await;
        let result = self.update_auction_for_lock(input.clone(), lock).await;
        self.repo.remove_auction_lock(&input.auction_id).await;
        result
    }
}
