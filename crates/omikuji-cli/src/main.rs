mod cli;
mod render;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use omikuji_api::AniListClient;
use omikuji_core::config::AppConfig;
use omikuji_core::state::{PickerState, Randomizer};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::render::render;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("omikuji=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let endpoint = args
        .endpoint
        .clone()
        .unwrap_or_else(|| config.anilist.endpoint.clone());
    let seed = args.seed.or(config.picker.seed);
    tracing::debug!(%endpoint, ?seed, "starting");

    let mut randomizer = Randomizer::new(AniListClient::with_endpoint(endpoint), seed);

    let username = args.username.clone().or(config.picker.default_username);
    match username {
        Some(username) => one_shot(&mut randomizer, &username, args.json).await,
        None => match interactive(&mut randomizer, args.json).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn one_shot(
    randomizer: &mut Randomizer<AniListClient>,
    username: &str,
    json: bool,
) -> ExitCode {
    let state = randomizer.submit(username).await;
    if let Some(out) = render(state, json) {
        println!("{out}");
    }
    match state {
        PickerState::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

async fn interactive(
    randomizer: &mut Randomizer<AniListClient>,
    json: bool,
) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("AniList username (or \"quit\"): ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            return Ok(());
        };
        if line.trim().eq_ignore_ascii_case("quit") {
            return Ok(());
        }

        let state = randomizer.submit(&line).await;
        if let Some(out) = render(state, json) {
            println!("{out}\n");
        }
    }
}
