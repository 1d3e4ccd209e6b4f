use {
    super::{
        models,
        Repository,
    },
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Repository {
    pub async fn get_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<Option<entities::Auction>, RestError> {
        let row = self.db.get_auction(auction_id).await.map_err(|e| {
            tracing::error!(
                error = e.to_string(),
                auction_id = %auction_id,
                "DB: Failed to get auction"
            );
            RestError::TemporarilyUnavailable
        })?;
        Ok(row.map(models::Auction::into_entity))
    }
}
