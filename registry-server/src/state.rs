use crate::auction::service::Service;

pub struct Store {
    pub auction_service: Service,
}
