#[cfg(test)]
use mockall::automock;
use {
    super::entities,
    crate::kernel::{
        db::OrderedStore,
        entities::{
            CallerId,
            UnixTimestampNanos,
        },
    },
    axum::async_trait,
    serde::{
        Deserialize,
        Serialize,
    },
    std::fmt::Debug,
};

/// The backing table for auction records, keyed by auction id.
pub type AuctionTable = OrderedStore<entities::AuctionId, Auction>;

/// The stored form of an auction record.
///
/// This is the fixed schema kept in the ordered map; the service layer only
/// ever sees `entities::Auction`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Auction {
    pub id:                entities::AuctionId,
    pub asset_type:        String,
    pub asset_description: String,
    pub owner_name:        String,
    pub owner_id:          CallerId,
    pub start_date:        UnixTimestampNanos,
    pub end_date:          UnixTimestampNanos,
    pub status:            AuctionStatus,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Inactive,
}

impl From<entities::AuctionStatus> for AuctionStatus {
    fn from(status: entities::AuctionStatus) -> Self {
        match status {
            entities::AuctionStatus::Active => AuctionStatus::Active,
            entities::AuctionStatus::Inactive => AuctionStatus::Inactive,
        }
    }
}

impl From<AuctionStatus> for entities::AuctionStatus {
    fn from(status: AuctionStatus) -> Self {
        match status {
            AuctionStatus::Active => entities::AuctionStatus::Active,
            AuctionStatus::Inactive => entities::AuctionStatus::Inactive,
        }
    }
}

impl From<entities::Auction> for Auction {
    fn from(auction: entities::Auction) -> Self {
        Self {
            id:                auction.id,
            asset_type:        auction.asset_type,
            asset_description: auction.asset_description,
            owner_name:        auction.owner_name,
            owner_id:          auction.owner_id,
            start_date:        auction.start_date,
            end_date:          auction.end_date,
            status:            auction.status.into(),
        }
    }
}

impl Auction {
    pub fn into_entity(self) -> entities::Auction {
        entities::Auction {
            id:                self.id,
            asset_type:        self.asset_type,
            asset_description: self.asset_description,
            owner_name:        self.owner_name,
            owner_id:          self.owner_id,
            start_date:        self.start_date,
            end_date:          self.end_date,
            status:            self.status.into(),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    async fn get_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> anyhow::Result<Option<Auction>>;
    async fn insert_auction(&self, auction: Auction) -> anyhow::Result<()>;
    async fn remove_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> anyhow::Result<Option<Auction>>;
    async fn get_auctions(&self) -> anyhow::Result<Vec<Auction>>;
}

#[async_trait]
impl Database for AuctionTable {
    async fn get_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> anyhow::Result<Option<Auction>> {
        Ok(self.get(&auction_id).await)
    }

    async fn insert_auction(&self, auction: Auction) -> anyhow::Result<()> {
        self.insert(auction.id, auction).await;
        Ok(())
    }

    async fn remove_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> anyhow::Result<Option<Auction>> {
        Ok(self.remove(&auction_id).await)
    }

    async fn get_auctions(&self) -> anyhow::Result<Vec<Auction>> {
        Ok(self.values().await)
    }
}
