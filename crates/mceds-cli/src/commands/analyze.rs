//! Run the MCEDS pipeline and write the report

use crate::error::{CliError, Result};
use crate::report;
use crate::Cli;
use mceds_core::Analysis;
use mceds_ingest::{load_domain_map, DomainSource, SiftsConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{debug, info};

/// Load the input, run both stages and render the report
pub async fn run(cli: &Cli) -> Result<()> {
    let source = domain_source(cli)?;
    debug!(source = %source.describe(), "Loading domain map");

    let raw = load_domain_map(&source).await?;
    let config = cli.run_config();
    let analysis = Analysis::run(&raw, &config)?;
    let format = cli.report_format(analysis.config());

    match &cli.output {
        Some(path) => {
            let file = File::create(path)?;
            let mut out = BufWriter::new(file);
            report::render(&analysis, &raw, format, &mut out)?;
            out.flush()?;
            info!(path = %path.display(), format = %format, "Report written");
        },
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            report::render(&analysis, &raw, format, &mut out)?;
            out.flush()?;
        },
    }

    Ok(())
}

fn domain_source(cli: &Cli) -> Result<DomainSource> {
    if cli.uses_remote() {
        let config = SiftsConfig::from_env()?;
        return Ok(DomainSource::Remote {
            config,
            refresh: cli.refresh,
        });
    }

    let path = cli
        .file
        .clone()
        .ok_or_else(|| CliError::config("No input given, use --file or --remote"))?;

    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    Ok(DomainSource::File {
        path,
        delimiter: cli.delimiter,
    })
}
