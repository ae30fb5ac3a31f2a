// SIFTS Configuration
//
// Environment-based configuration for the remote PDB cross-reference source

use mceds_common::{MceError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Default location of the SIFTS flat files
pub const DEFAULT_SIFTS_URL: &str = "https://ftp.ebi.ac.uk/pub/databases/msd/sifts/flatfiles/tsv";

/// Default timeout for a single download, in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 300;

/// PDB chain to EC number mapping
pub const ENZYME_FILE: &str = "pdb_chain_enzyme.tsv.gz";

/// PDB chain to InterPro entry mapping
pub const INTERPRO_FILE: &str = "pdb_chain_interpro.tsv.gz";

/// Configuration for the SIFTS download and cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiftsConfig {
    /// Base URL the flat files are fetched from
    pub base_url: String,

    /// Root of the on-disk cache; downloads go to `<cache_dir>/sifts/`
    pub cache_dir: PathBuf,

    pub timeout_secs: u64,
}

impl SiftsConfig {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_url: DEFAULT_SIFTS_URL.to_string(),
            cache_dir: cache_dir.into(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - MCEDS_SIFTS_URL
    /// - MCEDS_CACHE_DIR (default: the user cache directory + "/mceds")
    /// - MCEDS_HTTP_TIMEOUT_SECS
    pub fn from_env() -> Result<Self> {
        let cache_dir = match env::var("MCEDS_CACHE_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::cache_dir()
                .ok_or_else(|| MceError::config("Could not determine cache directory, set MCEDS_CACHE_DIR"))?
                .join("mceds"),
        };

        let config = Self {
            base_url: env::var("MCEDS_SIFTS_URL").unwrap_or_else(|_| DEFAULT_SIFTS_URL.to_string()),
            cache_dir,
            timeout_secs: env::var("MCEDS_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn file_url(&self, file: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), file)
    }

    /// Directory holding the cached flat files
    pub fn sifts_dir(&self) -> PathBuf {
        self.cache_dir.join("sifts")
    }

    pub fn cache_path(&self, file: &str) -> PathBuf {
        self.sifts_dir().join(file)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(MceError::config("SIFTS base URL cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(MceError::config(format!(
                "SIFTS base URL must be http(s): {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(MceError::config("HTTP timeout must be greater than 0"));
        }

        Ok(())
    }
}
