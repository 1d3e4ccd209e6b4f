use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
        kernel::entities::CallerId,
    },
};

#[derive(Clone, Debug)]
pub struct DeleteAuctionInput {
    pub auction_id: entities::AuctionId,
    pub caller:     CallerId,
}

impl Service {
    async fn delete_auction_for_lock(
        &self,
        input: DeleteAuctionInput,
        lock: entities::AuctionLock,
    ) -> Result<entities::Auction, RestError> {
        let _lock = lock.lock().await;
        let auction = self
            .repo
            .get_auction(input.auction_id)
            .await?
            .ok_or(RestError::AuctionNotFound)?;

        // Ownership is checked before the record is touched; a rejected
        // attempt must leave the store unchanged.
        if !auction.is_owned_by(input.caller) {
            return Err(RestError::Forbidden);
        }

        self.repo
            .remove_auction(input.auction_id)
            .await?
            .ok_or(RestError::AuctionNotFound)
    }

    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(auction_id = %input.auction_id))]
    pub async fn delete_auction(
        &self,
        input: DeleteAuctionInput,
    ) -> Result<entities::Auction, RestError> {
        let lock = self.repo.get_or_create_auction_lock(input.auction_id).await;
        let result = self.delete_auction_for_lock(input.clone(), lock).await;
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
                    NOW,
                },
            },
            kernel::clock::tests::AdjustableClock,
        },
        std::sync::Arc,
    };

    #[tokio::test]
    async fn owners_get_the_removed_record_back() {
        let service = Service::new_with_mocks(Arc::new(AdjustableClock::new(NOW)));
        let caller = new_caller();
        let auction = create_test_auction(&service, caller).await;

        let removed = service
            .delete_auction(DeleteAuctionInput {
                auction_id: auction.id,
                caller,
            })
            .await
            .unwrap();
        assert_eq!(removed, auction);

        let result = service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: auction.id,
            })
            .await;
        assert_eq!(result.unwrap_err(), RestError::AuctionNotFound);
    }

    #[tokio::test]
    async fn rejected_deletes_leave_the_record_in_place() {
        let service = Service::new_with_mocks(Arc::new(AdjustableClock::new(NOW)));
        let owner = new_caller();
        let auction = create_test_auction(&service, owner).await;

        let result = service
            .delete_auction(DeleteAuctionInput {
                auction_id: auction.id,
                caller: new_caller(),
            })
            .await;
        assert_eq!(result.unwrap_err(), RestError::Forbidden);

        let stored = service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: auction.id,
            })
            .await
            .unwrap();
        assert_eq!(stored, auction);
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let service = Service::new_with_mocks(Arc::new(AdjustableClock::new(NOW)));
        let caller = new_caller();
        let auction = create_test_auction(&service, caller).await;

        let input = DeleteAuctionInput {
            auction_id: auction.id,
            caller,
        };
        service.delete_auction(input.clone()).await.unwrap();

        let result = service.delete_auction(input).await;
        assert_eq!(result.unwrap_err(), RestError::AuctionNotFound);
    }
}
