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
    pub async fn get_auctions(&self) -> Result<Vec<entities::Auction>, RestError> {
        let rows = self.db.get_auctions().await.map_err(|e| {
            tracing::error!(error = e.to_string(), "DB: Failed to enumerate auctions");
            RestError::TemporarilyUnavailable
        })?;
        Ok(rows.into_iter().map(models::Auction::into_entity).collect())
    }
}
