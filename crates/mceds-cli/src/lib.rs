//! MCEDS CLI Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Command-line front end for the minimum conserved enzyme domain signature
//! pipeline.
//!
//! # Overview
//!
//! - **Input**: a delimited `EC, PDB, DOMAIN` membership file (`-f`) or the
//!   remote INTERPRO cross-reference (`--remote`)
//! - **Scope**: shrink seeds against every class (default) or within the
//!   class only (`-s`)
//! - **Output**: the signature table, the seed summary (`-d`), or JSON

pub mod commands;
pub mod error;
pub mod report;

pub use error::{CliError, Result};
pub use report::ReportFormat;

use clap::{ArgGroup, Parser};
use mceds_core::{RunConfig, ScopeMode};
use std::path::PathBuf;
use std::str::FromStr;

/// MCEDS - Minimum Conserved Enzyme Domain Signatures
#[derive(Parser, Debug)]
#[command(name = "mceds")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "remote"])))]
pub struct Cli {
    /// Delimited EC, PDB, DOMAIN membership file ("INTERPRO" selects the remote source)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Use the remote INTERPRO cross-reference
    #[arg(long)]
    pub remote: bool,

    /// Ignore cached remote downloads
    #[arg(long)]
    pub refresh: bool,

    /// Restrict the seed search to the enzyme class
    #[arg(short = 's', long)]
    pub within_class: bool,

    /// Seed search scope (global, class-local); overrides --within-class
    #[arg(long, value_parser = ScopeMode::from_str)]
    pub scope: Option<ScopeMode>,

    /// Report the seed combinations and domain counts
    #[arg(short, long)]
    pub debug: bool,

    /// Report format (defaults to summary with --debug, table otherwise)
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Input field delimiter
    #[arg(long, value_name = "CHAR", default_value = "tab", value_parser = delimiter_arg)]
    pub delimiter: u8,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn scope(&self) -> ScopeMode {
        match self.scope {
            Some(scope) => scope,
            None if self.within_class => ScopeMode::ClassLocal,
            None => ScopeMode::Global,
        }
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(self.scope()).with_verbose(self.debug)
    }

    /// `--format` if given, otherwise the default for `config`
    pub fn report_format(&self, config: &RunConfig) -> ReportFormat {
        self.format.unwrap_or_else(|| ReportFormat::for_config(config))
    }

    /// True when the remote cross-reference was requested
    pub fn uses_remote(&self) -> bool {
        self.remote
            || self
                .file
                .as_deref()
                .is_some_and(|path| path.as_os_str() == mceds_ingest::REMOTE_DATASET)
    }
}

/// Parse a delimiter given as a single ASCII character or `tab`
pub fn parse_delimiter(value: &str) -> Result<u8> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(CliError::invalid_delimiter(value)),
        },
    }
}

fn delimiter_arg(value: &str) -> std::result::Result<u8, String> {
    parse_delimiter(value).map_err(|e| e.to_string())
}
