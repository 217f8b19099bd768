use {
    clap::{
        crate_authors,
        crate_description,
        crate_name,
        crate_version,
        Args,
        Parser,
    },
    std::time::Duration,
};

mod server;

const DEFAULT_SWEEP_INTERVAL_SECONDS: u64 = 1;

#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the auction server service.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// Server Options
    #[command(flatten)]
    pub server: server::Options,

    /// How long a newly created auction stays open for bids, in seconds.
    #[arg(long = "auction-lifetime-seconds")]
    #[arg(env = "AUCTION_LIFETIME_SECONDS")]
    #[arg(default_value = "3600")]
    pub auction_lifetime_seconds: u64,

    /// How often the expiration sweeper closes expired auctions, in seconds.
    /// Unset, unparsable, or zero values fall back to the default of 1.
    #[arg(long = "sweep-interval-seconds")]
    #[arg(env = "AUCTION_SWEEP_INTERVAL_SECONDS")]
    pub sweep_interval_seconds: Option<String>,
}

impl RunOptions {
    pub fn auction_lifetime(&self) -> Duration {
        Duration::from_secs(self.auction_lifetime_seconds)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(
            self.sweep_interval_seconds
                .as_deref()
                .and_then(|value| value.parse().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(DEFAULT_SWEEP_INTERVAL_SECONDS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(sweep_interval_seconds: Option<&str>) -> RunOptions {
        RunOptions {
            server: server::Options {
                listen_addr:  "127.0.0.1:9000".parse().unwrap(),
                database_url: "postgres://localhost/auctions".to_string(),
            },
            auction_lifetime_seconds: 3600,
            sweep_interval_seconds: sweep_interval_seconds.map(str::to_string),
        }
    }

    #[test]
    fn sweep_interval_falls_back_to_one_second_when_unset_or_invalid() {
        assert_eq!(options(None).sweep_interval(), Duration::from_secs(1));
        assert_eq!(
            options(Some("not-a-number")).sweep_interval(),
            Duration::from_secs(1)
        );
        assert_eq!(options(Some("0")).sweep_interval(), Duration::from_secs(1));
        assert_eq!(options(Some("30")).sweep_interval(), Duration::from_secs(30));
    }

    #[test]
    fn auction_lifetime_uses_the_configured_seconds() {
        assert_eq!(options(None).auction_lifetime(), Duration::from_secs(3600));
    }
}
