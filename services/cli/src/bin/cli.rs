//! services/cli/src/bin/cli.rs

use std::io::Write;
use std::sync::Arc;

use cli_lib::{
    adapters::random_data::RandomDataSource, config::Config, error::CliError, screen,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_browser_core::{Advance, BrowsingSession};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!(endpoint = %config.api_url, "Configuration loaded. Starting browsing session...");

    // --- 2. Initialize the Source Adapter & Session ---
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;
    let source = Arc::new(RandomDataSource::new(client, config.api_url.clone()));
    let session = BrowsingSession::new(Arc::clone(&source), config.retain_limit);

    // --- 3. Implicit First Fetch ---
    session.initialize().await;

    // --- 4. Run the Browse Loop ---
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    loop {
        match session.current() {
            Some(user) => {
                print!("{}", screen::render_record(&user));
                if let Some(error) = session.last_error() {
                    print!("{}", screen::render_fetch_failure(&error));
                }
            }
            None => print!("{}", screen::render_empty(session.last_error().as_ref())),
        }
        print!(
            "{}",
            screen::prompt(session.is_loading(), session.can_go_previous())
        );
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "n" | "next" => {
                if session.go_next().await == Advance::Fetched {
                    info!(total = session.record_count(), "fetched a new user");
                }
            }
            "p" | "previous" => {
                if !session.go_previous() {
                    println!("Already at the first retained user.");
                }
            }
            "q" | "quit" => break,
            "" => {}
            other => println!("Unrecognized command '{other}' (use n, p, or q)."),
        }
    }

    info!(total = session.record_count(), "Session over.");
    Ok(())
}
