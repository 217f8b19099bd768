use {
    super::repository::{
        Database,
        Repository,
    },
    std::{
        ops::Deref,
        sync::Arc,
        time::Duration,
    },
};

pub mod add_auction;
pub mod get_auction;
pub mod get_auctions;
pub mod get_bids;
pub mod get_winning_bid;
pub mod handle_bid;
pub mod workers;

#[derive(Clone, Debug)]
pub struct Config {
    /// How long a new auction stays open for bids.
    pub auction_lifetime: Duration,
    /// How often the sweeper closes expired auctions.
    pub sweep_interval:   Duration,
}

pub struct ServiceInner {
    config: Config,
    repo:   Arc<Repository>,
}

#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(db: impl Database, config: Config) -> Self {
        Self(Arc::new(ServiceInner {
            config,
            repo: Arc::new(Repository::new(db)),
        }))
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::*,
        crate::auction::repository::MockDatabase,
    };

    pub const TEST_AUCTION_LIFETIME: Duration = Duration::from_secs(3600);

    impl Service {
        pub fn new_with_mocks(db: MockDatabase) -> Self {
            Service::new(
                db,
                Config {
                    auction_lifetime: TEST_AUCTION_LIFETIME,
                    sweep_interval:   Duration::from_secs(1),
                },
            )
        }
    }
}
