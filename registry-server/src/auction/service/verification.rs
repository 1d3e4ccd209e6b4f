use {
    crate::{
        api::RestError,
        auction::entities,
        kernel::entities::CallerId,
    },
    auction_registry_api_types::auction::{
        AuctionStatus,
        CreateAuction,
        UpdateAuction,
    },
    std::str::FromStr,
    uuid::Uuid,
};

/// Whether the given string names a valid auction status.
pub fn is_auction_status_valid(status: &str) -> bool {
    AuctionStatus::from_str(status).is_ok()
}

pub fn parse_auction_status(status: &str) -> Result<entities::AuctionStatus, RestError> {
    AuctionStatus::from_str(status)
        .map(Into::into)
        .map_err(|_| RestError::BadParameters(format!("Invalid auction status: {status}")))
}

pub fn parse_auction_id(auction_id: &str) -> Result<entities::AuctionId, RestError> {
    parse_canonical_uuid(auction_id)
        .ok_or_else(|| RestError::BadParameters(format!("Invalid auction id: {auction_id}")))
}

pub fn parse_owner_id(owner_id: &str) -> Result<CallerId, RestError> {
    parse_canonical_uuid(owner_id)
        .ok_or_else(|| RestError::BadParameters(format!("Invalid owner id: {owner_id}")))
}

/// Identifiers must be in the canonical lowercase hyphenated form,
/// 8-4-4-4-12 hex digits. The uuid crate alone is laxer than that: it also
/// accepts braced, simple and uppercase renderings.
fn parse_canonical_uuid(id: &str) -> Option<Uuid> {
    let canonical = id.len() == 36
        && id.bytes().enumerate().all(|(i, c)| match i {
            8 | 13 | 18 | 23 => c == b'-',
            _ => matches!(c, b'0'..=b'9' | b'a'..=b'f'),
        });
    if !canonical {
        return None;
    }
    Uuid::parse_str(id).ok()
}

pub fn validate_create(params: &CreateAuction) -> Result<(), RestError> {
    let complete = [
        &params.asset_type,
        &params.asset_description,
        &params.owner_name,
    ]
    .iter()
    .all(|field| !field.trim().is_empty())
        && params
            .status
            .as_deref()
            .map_or(true, is_auction_status_valid);
    if !complete {
        return Err(RestError::BadParameters("incomplete input data".to_string()));
    }
    Ok(())
}

pub fn validate_update(params: &UpdateAuction) -> Result<(), RestError> {
    let complete = [
        &params.asset_type,
        &params.asset_description,
        &params.owner_name,
    ]
    .iter()
    .all(|field| {
        field
            .as_deref()
            .map_or(true, |value| !value.trim().is_empty())
    });
    if !complete {
        return Err(RestError::BadParameters("incomplete input data".to_string()));
    }
    Ok(())
}
