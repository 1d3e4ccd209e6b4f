use {
    serde::{
        Deserialize,
        Serialize,
    },
    strum::{
        Display,
        EnumString,
    },
    utoipa::{
        ToResponse,
        ToSchema,
    },
    uuid::Uuid,
};

pub type AuctionId = Uuid;
pub type OwnerId = Uuid;

/// Nanoseconds since the Unix epoch.
pub type UnixTimestampNanos = u64;

/// The lifecycle status of an auction.
///
/// Auctions start out active and can only move to inactive, never back.
#[derive(
    Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Debug, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Inactive,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug, PartialEq)]
pub struct Auction {
    /// The unique identifier of the auction, assigned by the server at creation.
    #[schema(example = "b7a9155e-58cc-4372-a567-fe02b2c3d479", value_type = String)]
    pub id:                AuctionId,
    /// The kind of asset on offer.
    #[schema(example = "art")]
    pub asset_type:        String,
    /// A free-form description of the asset.
    #[schema(example = "oil painting, 50x70cm")]
    pub asset_description: String,
    /// The display name of the owner.
    #[schema(example = "alice")]
    pub owner_name:        String,
    /// The stable identity of the caller that created the auction.
    #[schema(example = "f47ac10b-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub owner_id:          OwnerId,
    /// When the auction was created, in nanoseconds since the Unix epoch.
    #[schema(example = 1700000000000000000u64, value_type = u64)]
    pub start_date:        UnixTimestampNanos,
    /// When the auction window closes, in nanoseconds since the Unix epoch.
    #[schema(example = 1700086400000000000u64, value_type = u64)]
    pub end_date:          UnixTimestampNanos,
    /// The lifecycle status of the auction.
    pub status:            AuctionStatus,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CreateAuction {
    /// The kind of asset on offer. Must be non-empty.
    #[schema(example = "art")]
    pub asset_type:        String,
    /// A free-form description of the asset. Must be non-empty.
    #[schema(example = "oil painting, 50x70cm")]
    pub asset_description: String,
    /// The display name of the owner. Must be non-empty.
    #[schema(example = "alice")]
    pub owner_name:        String,
    /// Optional status hint, either "active" or "inactive" when present.
    /// Newly created auctions always start active.
    #[schema(example = "active", value_type = Option<String>)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status:            Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default, PartialEq)]
pub struct UpdateAuction {
    /// New asset type. Omit to leave unchanged; must be non-empty when present.
    #[schema(example = "antique", value_type = Option<String>)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type:        Option<String>,
    /// New asset description. Omit to leave unchanged; must be non-empty when present.
    #[schema(example = "bronze statue", value_type = Option<String>)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_description: Option<String>,
    /// New owner display name. Omit to leave unchanged; must be non-empty when present.
    #[schema(example = "alice b.", value_type = Option<String>)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name:        Option<String>,
}
