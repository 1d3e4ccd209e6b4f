use {
    super::Repository,
    crate::auction::entities,
    std::sync::Arc,
};

impl Repository {
    pub async fn remove_auction_lock(&self, auction_id: &entities::AuctionId) {
        let mut mutex_guard = self.auction_lock.lock().await;
        let auction_lock = mutex_guard.get(auction_id);
        if let Some(auction_lock) = auction_lock {
            // Drop the map entry once no task holds a lock for this auction anymore.
            if Arc::strong_count(auction_lock) == 1 {
                mutex_guard.remove(auction_id);
            }
        }
    }
}
