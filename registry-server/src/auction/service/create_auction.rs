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
    auction_registry_api_types::auction::CreateAuction,
    uuid::Uuid,
};

#[derive(Clone, Debug)]
pub struct CreateAuctionInput {
    pub caller: CallerId,
    pub params: CreateAuction,
}

impl Service {
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE))]
    pub async fn create_auction(
        &self,
        input: CreateAuctionInput,
    ) -> Result<entities::Auction, RestError> {
        verification::validate_create(&input.params)?;

        let start_date = self.clock.now();
        let auction = entities::Auction {
            id: Uuid::new_v4(),
            asset_type: input.params.asset_type,
            asset_description: input.params.asset_description,
            owner_name: input.params.owner_name,
            owner_id: input.caller,
            start_date,
            end_date: start_date.saturating_add(self.config.auction_window.as_nanos() as u64),
            status: entities::AuctionStatus::Active,
        };
        self.repo.add_auction(&auction).await?;
        Ok(auction)
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
                    create_params,
                    new_caller,
                    AUCTION_WINDOW,
                    NOW,
                },
            },
            kernel::clock::tests::AdjustableClock,
        },
        std::{
            collections::HashSet,
            sync::Arc,
        },
    };

    #[tokio::test]
    async fn new_auctions_start_active_with_a_full_window() {
        let clock = Arc::new(AdjustableClock::new(NOW));
        let service = Service::new_with_mocks(clock);
        let caller = new_caller();

        let auction = service
            .create_auction(CreateAuctionInput {
                caller,
                params: create_params(),
            })
            .await
            .unwrap();

        assert_eq!(auction.owner_id, caller);
        assert_eq!(auction.status, entities::AuctionStatus::Active);
        assert_eq!(auction.start_date, NOW);
        assert_eq!(
            auction.end_date,
            NOW + AUCTION_WINDOW.as_nanos() as u64,
        );

        let fetched = service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: auction.id,
            })
            .await
            .unwrap();
        assert_eq!(fetched, auction);
    }

    #[tokio::test]
    async fn created_ids_are_pairwise_distinct() {
        let service = Service::new_with_mocks(Arc::new(AdjustableClock::new(NOW)));
        let caller = new_caller();

        let mut ids = HashSet::new();
        for _ in 0..32 {
            let auction = service
                .create_auction(CreateAuctionInput {
                    caller,
                    params: create_params(),
                })
                .await
                .unwrap();
            ids.insert(auction.id);
        }
        assert_eq!(ids.len(), 32);
    }

    #[tokio::test]
    async fn blank_required_fields_are_rejected() {
        let service = Service::new_with_mocks(Arc::new(AdjustableClock::new(NOW)));

        for params in [
            CreateAuction {
                asset_type: "   ".to_string(),
                ..create_params()
            },
            CreateAuction {
                asset_description: String::new(),
                ..create_params()
            },
            CreateAuction {
                owner_name: "\t\n".to_string(),
                ..create_params()
            },
            CreateAuction {
                status: Some("pending".to_string()),
                ..create_params()
            },
        ] {
            let result = service
                .create_auction(CreateAuctionInput {
                    caller: new_caller(),
                    params,
                })
                .await;
            assert_eq!(
                result.unwrap_err(),
                RestError::BadParameters("incomplete input data".to_string()),
            );
        }
    }

    #[tokio::test]
    async fn status_hint_is_optional() {
        let service = Service::new_with_mocks(Arc::new(AdjustableClock::new(NOW)));

        let auction = service
            .create_auction(CreateAuctionInput {
                caller: new_caller(),
                params: CreateAuction {
                    status: None,
                    ..create_params()
                },
            })
            .await
            .unwrap();
        assert_eq!(auction.status, entities::AuctionStatus::Active);
    }
}
