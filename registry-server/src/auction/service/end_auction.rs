use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
        kernel::entities::CallerId,
    },
};

#[derive(Clone, Debug)]
pub struct EndAuctionInput {
    pub auction_id: entities::AuctionId,
    pub caller:     CallerId,
}

impl Service {
    async fn end_auction_for_lock(
        &self,
        input: EndAuctionInput,
        lock: entities::AuctionLock,
    ) -> Result<entities::Auction, RestError> {
        let _lock = lock.lock().await;
        let auction = self
            .repo
            .get_auction(input.auction_id)
            .await?
            .ok_or(RestError::AuctionNotFound)?;
        if !auction.is_owned_by(input.caller) {
            return Err(RestError::Forbidden);
        }
        if auction.status == entities::AuctionStatus::Inactive {
            return Err(RestError::AuctionAlreadyEnded);
        }

        // Ending is a finalize step, only allowed once the window has run out.
        let now = self.clock.now();
        if now < auction.end_date {
            return Err(RestError::AuctionStillActive);
        }

        let ended = entities::Auction {
            end_date: now,
            status: entities::AuctionStatus::Inactive,
            ..auction
        };
        self.repo.update_auction(&ended).await?;
        Ok(ended)
    }

    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(auction_id = %input.auction_id))]
    pub async fn end_auction(
        &self,
        input: EndAuctionInput,
    ) -> Result<entities::Auction, RestError> {
        let lock = self.repo.get_or_create_auction_lock(input.auction_id).await;
        let result = self.end_auction_for_lock(input.clone(), lock).await;
        self.repo.remove_auction_lock(&input.auction_id).await;
        result
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            auction::service::{
                get_auction_by_id::GetAuctionByIdInput,
                tests::{
                    create_test_auction,
                    new_caller,
                    AUCTION_WINDOW,
                    NOW,
                },
            },
            kernel::clock::{
                tests::AdjustableClock,
                Clock,
            },
        },
        std::sync::Arc,
    };

    #[tokio::test]
    async fn ending_before_the_window_elapses_is_rejected() {
        let clock = Arc::new(AdjustableClock::new(NOW));
        let service = Service::new_with_mocks(clock.clone());
        let caller = new_caller();
        let auction = create_test_auction(&service, caller).await;

        clock.advance(AUCTION_WINDOW.as_nanos() as u64 - 1);
        let result = service
            .end_auction(EndAuctionInput {
                auction_id: auction.id,
                caller,
            })
            .await;
        assert_eq!(result.unwrap_err(), RestError::AuctionStillActive);

        let stored = service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: auction.id,
            })
            .await
            .unwrap();
        assert_eq!(stored.status, entities::AuctionStatus::Active);
    }

    #[tokio::test]
    async fn ending_after_the_window_finalizes_the_auction() {
        let clock = Arc::new(AdjustableClock::new(NOW));
        let service = Service::new_with_mocks(clock.clone());
        let caller = new_caller();
        let auction = create_test_auction(&service, caller).await;

        clock.advance(AUCTION_WINDOW.as_nanos() as u64 + 5);
        let ended = service
            .end_auction(EndAuctionInput {
                auction_id: auction.id,
                caller,
            })
            .await
            .unwrap();

        assert_eq!(ended.status, entities::AuctionStatus::Inactive);
        assert_eq!(ended.end_date, clock.now());
        assert_eq!(ended.owner_id, auction.owner_id);
        assert!(ended.end_date >= ended.start_date);
    }

    #[tokio::test]
    async fn ending_twice_is_rejected() {
        let clock = Arc::new(AdjustableClock::new(NOW));
        let service = Service::new_with_mocks(clock.clone());
        let caller = new_caller();
        let auction = create_test_auction(&service, caller).await;

        clock.advance(AUCTION_WINDOW.as_nanos() as u64);
        let input = EndAuctionInput {
            auction_id: auction.id,
            caller,
        };
        service.end_auction(input.clone()).await.unwrap();

        let result = service.end_auction(input).await;
        assert_eq!(result.unwrap_err(), RestError::AuctionAlreadyEnded);
    }

    #[tokio::test]
    async fn only_the_owner_can_end() {
        let clock = Arc::new(AdjustableClock::new(NOW));
        let service = Service::new_with_mocks(clock.clone());
        let owner = new_caller();
        let auction = create_test_auction(&service, owner).await;

        clock.advance(AUCTION_WINDOW.as_nanos() as u64);
        let result = service
            .end_auction(EndAuctionInput {
                auction_id: auction.id,
                caller: new_caller(),
            })
            .await;
        assert_eq!(result.unwrap_err(), RestError::Forbidden);
    }
}
