use {
    crate::kernel::entities::{
        CallerId,
        UnixTimestampNanos,
    },
    std::sync::Arc,
    tokio::sync::Mutex,
    uuid::Uuid,
};

pub type AuctionId = Uuid;
pub type AuctionLock = Arc<Mutex<()>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuctionStatus {
    Active,
    Inactive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub id:                AuctionId,
    pub asset_type:        String,
    pub asset_description: String,
    pub owner_name:        String,
    pub owner_id:          CallerId,
    pub start_date:        UnixTimestampNanos,
    pub end_date:          UnixTimestampNanos,
    pub status:            AuctionStatus,
}

impl Auction {
    /// Whether the auction window has elapsed at the given instant.
    ///
    /// Independent of `status`: an auction that was never explicitly ended is
    /// still closed once its window has run out.
    pub fn is_closed(&self, now: UnixTimestampNanos) -> bool {
        now >= self.end_date
    }

    pub fn is_owned_by(&self, caller: CallerId) -> bool {
        self.owner_id == caller
    }
}
