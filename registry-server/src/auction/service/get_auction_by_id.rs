use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

#[derive(Clone, Debug)]
pub struct GetAuctionByIdInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    pub async fn get_auction_by_id(
        &self,
        input: GetAuctionByIdInput,
    ) -> Result<entities::Auction, RestError> {
        self.repo
            .get_auction(input.auction_id)
            .await?
            .ok_or(RestError::AuctionNotFound)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            auction::service::tests::{
                create_test_auction,
                new_caller,
                NOW,
            },
            kernel::clock::tests::AdjustableClock,
        },
        std::sync::Arc,
        uuid::Uuid,
    };

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let service = Service::new_with_mocks(Arc::new(AdjustableClock::new(NOW)));

        let result = service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: Uuid::new_v4(),
            })
            .await;
        assert_eq!(result.unwrap_err(), RestError::AuctionNotFound);
    }

    #[tokio::test]
    async fn reads_are_idempotent() {
        let service = Service::new_with_mocks(Arc::new(AdjustableClock::new(NOW)));
        let auction = create_test_auction(&service, new_caller()).await;

        let input = GetAuctionByIdInput {
            auction_id: auction.id,
        };
        let first = service.get_auction_by_id(input.clone()).await.unwrap();
        let second = service.get_auction_by_id(input).await.unwrap();
        assert_eq!(first, second);
    }
}
