use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

#[derive(Clone, Debug)]
pub struct GetAuctionsByStatusInput {
    pub status: entities::AuctionStatus,
}

impl Service {
    pub async fn get_auctions_by_status(
        &self,
        input: GetAuctionsByStatusInput,
    ) -> Result<Vec<entities::Auction>, RestError> {
        Ok(self
            .repo
            .get_auctions()
            .await?
            .into_iter()
            .filter(|auction| auction.status == input.status)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            auction::service::{
                end_auction::EndAuctionInput,
                tests::{
                    create_test_auction,
                    new_caller,
                    AUCTION_WINDOW,
                    NOW,
                },
            },
            kernel::clock::tests::AdjustableClock,
        },
        std::sync::Arc,
    };

    #[tokio::test]
    async fn exactly_the_matching_subset_is_returned() {
        let clock = Arc::new(AdjustableClock::new(NOW));
        let service = Service::new_with_mocks(clock.clone());
        let caller = new_caller();

        let running = create_test_auction(&service, caller).await;
        let finished = create_test_auction(&service, caller).await;

        clock.advance(AUCTION_WINDOW.as_nanos() as u64 + 1);
        let finished = service
            .end_auction(EndAuctionInput {
                auction_id: finished.id,
                caller,
            })
            .await
            .unwrap();

        let active = service
            .get_auctions_by_status(GetAuctionsByStatusInput {
                status: entities::AuctionStatus::Active,
            })
            .await
            .unwrap();
        assert_eq!(active, vec![running]);

        let inactive = service
            .get_auctions_by_status(GetAuctionsByStatusInput {
                status: entities::AuctionStatus::Inactive,
            })
            .await
            .unwrap();
        assert_eq!(inactive, vec![finished]);
    }
}
