use {
    super::entities,
    std::collections::HashMap,
    tokio::sync::Mutex,
};

mod add_auction;
mod get_auction;
mod get_auctions;
mod get_or_create_auction_lock;
mod models;
mod remove_auction;
mod remove_auction_lock;
mod update_auction;

pub use models::*;

#[derive(Debug)]
pub struct Repository {
    db:           Box<dyn Database>,
    auction_lock: Mutex<HashMap<entities::AuctionId, entities::AuctionLock>>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self {
            db:           Box::new(db),
            auction_lock: Mutex::new(HashMap::new()),
        }
    }
}
