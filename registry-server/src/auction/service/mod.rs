use {
    super::repository::{
        Database,
        Repository,
    },
    crate::kernel::clock::Clock,
    std::{
        sync::Arc,
        time::Duration,
    },
};

pub mod create_auction;
pub mod delete_auction;
pub mod end_auction;
pub mod get_auction_by_id;
pub mod get_auctions;
pub mod get_auctions_by_status;
pub mod get_owner_auctions;
pub mod update_auction;
pub mod verification;

pub struct Config {
    /// Length of the bidding window granted to every newly created auction.
    pub auction_window: Duration,
}

pub struct ServiceInner {
    config: Config,
    repo:   Repository,
    clock:  Arc<dyn Clock>,
}

#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(db: impl Database, config: Config, clock: Arc<dyn Clock>) -> Self {
        Self(Arc::new(ServiceInner {
            repo: Repository::new(db),
            config,
            clock,
        }))
    }
}
