//! MCEDS Ingest - fetch and cache the remote domain cross-reference

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mceds_common::logging::{init_logging, LogConfig, LogLevel};
use mceds_ingest::{load_domain_map, write_memberships, DomainSource, SiftsClient, SiftsConfig};
use std::fs::File;
use std::io::BufWriter;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "mceds-ingest")]
#[command(author, version, about = "MCEDS domain map ingestion tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download the SIFTS cross-reference and write it as a membership file
    Fetch {
        /// Output membership file
        #[arg(short, long, default_value = "ec_pdb_domains.tsv")]
        output: String,

        /// Download again even if cached
        #[arg(long)]
        refresh: bool,

        /// Override the SIFTS base URL
        #[arg(long, env = "MCEDS_SIFTS_URL")]
        base_url: Option<String>,
    },

    /// Remove cached SIFTS downloads
    CacheClean,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("mceds-ingest")
        .build()
        .with_env_overrides()?;

    init_logging(&log_config)?;

    let mut config = SiftsConfig::from_env()?;

    match cli.command {
        Command::Fetch {
            output,
            refresh,
            base_url,
        } => {
            if let Some(base_url) = base_url {
                config = config.with_base_url(base_url);
            }

            let raw = load_domain_map(&DomainSource::Remote { config, refresh }).await?;

            let file = File::create(&output).with_context(|| format!("Failed to create {}", output))?;
            let rows = write_memberships(&raw, BufWriter::new(file), mceds_ingest::DEFAULT_DELIMITER)?;
            info!(output = %output, rows, "Membership file written");
        },
        Command::CacheClean => {
            let client = SiftsClient::new(config)?;
            let removed = client.clear_cache()?;
            info!(removed, dir = %client.config().sifts_dir().display(), "Cache cleaned");
        },
    }

    Ok(())
}
