mod lookup;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "socialview")]
#[command(about = "Look up public Instagram and Twitter profiles")]
struct Cli {
    /// Print the normalized records as JSON instead of a text report.
    #[arg(long, global = true)]
    json: bool,

    /// Override `SOCIALVIEW_DOWNLOAD_DIR` for this run.
    #[arg(long, global = true)]
    download_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch an Instagram profile, its recent posts and following list.
    Instagram { username: String },
    /// Fetch a Twitter profile and its recent tweets.
    Twitter {
        username: String,
        /// Page size requested from the timeline endpoint.
        #[arg(long)]
        count: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = socialview_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(dir) = cli.download_dir {
        config.download_dir = dir;
    }

    let output = match cli.command {
        Commands::Instagram { username } => {
            let username = normalize_username(&username)?;
            lookup::run_instagram(&config, &username).await?
        }
        Commands::Twitter { username, count } => {
            let username = normalize_username(&username)?;
            let count = count.unwrap_or(config.tweet_count);
            lookup::run_twitter(&config, &username, count).await?
        }
    };

    for advisory in &output.advisories {
        eprintln!("{advisory}");
    }
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output.report)?);
    } else {
        print!("{}", output.report);
    }

    Ok(())
}

/// Trims whitespace and a leading `@`.
fn normalize_username(raw: &str) -> anyhow::Result<String> {
    let username = raw.trim().trim_start_matches('@');
    if username.is_empty() {
        anyhow::bail!("username must not be empty");
    }
    Ok(username.to_string())
}
