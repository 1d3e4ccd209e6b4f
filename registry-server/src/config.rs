use clap::{
    crate_authors,
    crate_description,
    crate_name,
    crate_version,
    Args,
    Parser,
};

pub mod server;

const DEFAULT_AUCTION_WINDOW_SECS: &str = "86400";

#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the auction registry service.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// Server Options
    #[command(flatten)]
    pub server: server::Options,

    #[command(flatten)]
    pub auction: AuctionOptions,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Auction Options")]
#[group(id = "Auction")]
pub struct AuctionOptions {
    /// Length of the bidding window granted to every newly created auction, in seconds.
    #[arg(long = "auction-window-secs")]
    #[arg(env = "AUCTION_WINDOW_SECS")]
    #[arg(default_value = DEFAULT_AUCTION_WINDOW_SECS)]
    pub auction_window_secs: u64,
}
