use crate::{
    auction,
    user,
};

/// Shared handle to the domain services, used as the axum state. All mutable
/// state lives in the store behind the services; the handlers and the sweeper
/// only ever share this immutable view.
pub struct Store {
    pub auction_service: auction::service::Service,
    pub user_service:    user::service::Service,
}
