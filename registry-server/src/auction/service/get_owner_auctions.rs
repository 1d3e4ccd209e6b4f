use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
        kernel::entities::CallerId,
    },
};

#[derive(Clone, Debug)]
pub struct GetOwnerAuctionsInput {
    pub owner: CallerId,
}

impl Service {
    pub async fn get_owner_auctions(
        &self,
        input: GetOwnerAuctionsInput,
    ) -> Result<Vec<entities::Auction>, RestError> {
        Ok(self
            .repo
            .get_auctions()
            .await?
            .into_iter()
            .filter(|auction| auction.is_owned_by(input.owner))
            .collect())
    }
}
