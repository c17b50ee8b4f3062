use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use rush_client::{ContestClient, ContestStore};
use rush_core::Config;

/// RupeeRush contest API tool
///
/// Fetch and normalize contests, probe the API, or submit results.
/// The endpoint comes from RUPEERUSH_API_URL.
#[derive(Parser)]
#[command(name = "rupeerush", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and normalize the contest listing (default)
    Sync,

    /// Fetch the listing untouched and print a sync report
    Raw,

    /// Probe the API with a HEAD request
    Health,

    /// Post results for one contest
    Post {
        /// Contest id
        contest_id: String,
        /// Results as a JSON string
        results: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("loading configuration")?;
    let client = ContestClient::new(config).context("building contest client")?;

    match cli.command.unwrap_or(Commands::Sync) {
        Commands::Sync => {
            let mut store = ContestStore::default();
            client.refresh(&mut store).await;
            if let Some(message) = store.error {
                bail!(message);
            }
            print_json(&store.contests)?;
        }
        Commands::Raw => {
            let report = client.sync().await;
            print_json(&report)?;
            if !report.success {
                bail!("sync failed");
            }
        }
        Commands::Health => {
            let report = client.check_health().await;
            print_json(&report)?;
            if !report.is_online() {
                bail!("contest API is offline");
            }
        }
        Commands::Post {
            contest_id,
            results,
        } => {
            let body: Value =
                serde_json::from_str(&results).context("results must be valid JSON")?;
            match client.post_results(&contest_id, &body).await {
                Some(response) => print_json(&response)?,
                None => bail!("failed to post results for contest {}", contest_id),
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
