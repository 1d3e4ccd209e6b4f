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
    /// Re-insert an auction under its existing key.
    pub async fn update_auction(&self, auction: &entities::Auction) -> Result<(), RestError> {
        self.db
            .insert_auction(models::Auction::from(auction.clone()))
            .await
            .map_err(|e| {
                tracing::error!(
                    error = e.to_string(),
                    auction = ?auction,
                    "DB: Failed to update auction"
                );
                RestError::TemporarilyUnavailable
            })
    }
}
