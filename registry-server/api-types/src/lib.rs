use {
    serde::{
        Deserialize,
        Serialize,
    },
    utoipa::{
        ToResponse,
        ToSchema,
    },
};

pub mod auction;

#[derive(ToResponse, ToSchema, Serialize, Deserialize)]
#[response(description = "An error occurred processing the request")]
pub struct ErrorBodyResponse {
    pub error: String,
}
