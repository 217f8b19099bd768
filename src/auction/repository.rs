use super::entities;

mod add_auction;
mod add_bid;
mod close_auction;
mod close_expired_auctions;
mod get_auction;
mod get_auctions;
mod get_bids_by_auction;
mod models;

pub use models::*;

#[derive(Debug)]
pub struct Repository {
    db: Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self { db: Box::new(db) }
    }
}
