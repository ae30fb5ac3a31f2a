//! MCEDS Ingest Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Builds the EC -> PDB -> domain set map the MCEDS pipeline consumes.
//!
//! # Supported Data Sources
//!
//! - **Membership files**: delimited `EC, PDB, DOMAIN` rows ([`parser`])
//! - **INTERPRO**: the live SIFTS PDB-to-EC and PDB-to-InterPro
//!   cross-reference, cached on disk ([`sifts`])
//!
//! Malformed input, missing files and network failures surface as errors
//! here; the pipeline only ever receives a complete map.
//!
//! # Example
//!
//! ```no_run
//! use mceds_ingest::{load_domain_map, DomainSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let raw = load_domain_map(&DomainSource::file("data/ec_pdb_domains.tsv")).await?;
//!     println!("{} enzyme classes", raw.len());
//!     Ok(())
//! }
//! ```

pub mod parser;
pub mod sifts;

pub use parser::{write_memberships, MembershipParser, DEFAULT_DELIMITER};
pub use sifts::{SiftsClient, SiftsConfig};

use mceds_common::types::RawMap;
use mceds_common::Result;
use std::path::PathBuf;
use tracing::info;

/// Name of the remote cross-reference dataset
pub const REMOTE_DATASET: &str = "INTERPRO";

/// Where the domain map is read from
#[derive(Debug, Clone)]
pub enum DomainSource {
    /// Local delimited membership file
    File { path: PathBuf, delimiter: u8 },

    /// Remote SIFTS cross-reference
    Remote { config: SiftsConfig, refresh: bool },
}

impl DomainSource {
    /// Tab-delimited membership file
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn remote(config: SiftsConfig) -> Self {
        Self::Remote {
            config,
            refresh: false,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DomainSource::File { path, .. } => path.display().to_string(),
            DomainSource::Remote { config, .. } => format!("{} ({})", REMOTE_DATASET, config.base_url),
        }
    }
}

/// Load the raw EC -> PDB -> domains map from `source`
pub async fn load_domain_map(source: &DomainSource) -> Result<RawMap> {
    let raw = match source {
        DomainSource::File { path, delimiter } => {
            MembershipParser::with_delimiter(*delimiter).parse_file(path)?
        },
        DomainSource::Remote { config, refresh } => {
            SiftsClient::new(config.clone())?.load(*refresh).await?
        },
    };

    info!(
        source = %source.describe(),
        classes = raw.len(),
        structures = raw.structure_count(),
        "Domain map loaded"
    );

    Ok(raw)
}
