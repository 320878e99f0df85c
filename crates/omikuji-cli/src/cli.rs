use std::path::PathBuf;

use clap::Parser;

/// Pick a random anime from an AniList user's list.
#[derive(Debug, Parser)]
#[command(name = "omikuji", version, about)]
pub struct Cli {
    /// AniList username. Starts an interactive prompt when omitted and no
    /// default username is configured.
    pub username: Option<String>,

    /// Print the result as JSON instead of a text card.
    #[arg(long)]
    pub json: bool,

    /// Seed the random pick for reproducible results.
    #[arg(long)]
    pub seed: Option<u64>,

    /// GraphQL endpoint to query.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Config file to read instead of the platform default.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
