//! HTTP download of the SIFTS flat files into the local cache

use crate::sifts::config::{SiftsConfig, ENZYME_FILE, INTERPRO_FILE};
use crate::sifts::parser::{self, EC_COLUMN, INTERPRO_COLUMN};
use futures::{Stream, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use mceds_common::types::RawMap;
use mceds_common::{MceError, Result};
use reqwest::Client;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Client for the SIFTS cross-reference source
pub struct SiftsClient {
    client: Client,
    config: SiftsConfig,
}

impl SiftsClient {
    pub fn new(config: SiftsConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(MceError::network)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SiftsConfig {
        &self.config
    }

    /// Fetch both tables and join them into a [`RawMap`]
    #[instrument(skip(self))]
    pub async fn load(&self, refresh: bool) -> Result<RawMap> {
        let enzyme_path = self.fetch(ENZYME_FILE, refresh).await?;
        let interpro_path = self.fetch(INTERPRO_FILE, refresh).await?;

        let enzymes = parser::index_file(&enzyme_path, EC_COLUMN)?;
        let domains = parser::index_file(&interpro_path, INTERPRO_COLUMN)?;

        Ok(parser::join(&enzymes, &domains))
    }

    /// Path of `file` in the cache, downloading it first if needed
    pub async fn fetch(&self, file: &str, refresh: bool) -> Result<PathBuf> {
        let path = self.config.cache_path(file);

        if !refresh && path.is_file() {
            debug!(path = %path.display(), "Using cached SIFTS file");
            return Ok(path);
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let url = self.config.file_url(file);
        info!(url = %url, "Downloading SIFTS file");
        self.download(&url, &path).await?;

        Ok(path)
    }

    /// Stream `url` to `dest`; the file only appears under its final name
    /// once the download completed
    async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(MceError::network)?;

        if !response.status().is_success() {
            return Err(MceError::Network(format!(
                "Failed to download {}: {}",
                url,
                response.status()
            )));
        }

        let total_size = response.content_length().unwrap_or(0);
        let name = dest
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| url.to_string());

        let pb = ProgressBar::new(total_size);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({eta})",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message(format!("Downloading {}", name));

        let partial = dest.with_extension("part");
        let downloaded = save_stream(response.bytes_stream(), &partial, &pb).await?;
        std::fs::rename(&partial, dest)?;

        pb.finish_with_message(format!("Downloaded {}", name));
        info!(path = %dest.display(), bytes = downloaded, "SIFTS file cached");

        Ok(())
    }

    /// Remove cached SIFTS files, returning how many were deleted
    pub fn clear_cache(&self) -> Result<usize> {
        let mut removed = 0usize;

        for file in [ENZYME_FILE, INTERPRO_FILE] {
            let path = self.config.cache_path(file);
            if path.is_file() {
                std::fs::remove_file(&path)?;
                removed += 1;
            }
        }

        info!(removed, dir = %self.config.sifts_dir().display(), "Cleared SIFTS cache");
        Ok(removed)
    }
}

/// Write `stream` to `partial`; the file is removed again if any chunk fails
async fn save_stream<S, B, E>(stream: S, partial: &Path, pb: &ProgressBar) -> Result<u64>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let written = write_chunks(stream, partial, pb).await;

    if written.is_err() {
        if let Err(e) = std::fs::remove_file(partial) {
            debug!(path = %partial.display(), error = %e, "Could not remove partial download");
        }
    }

    written
}

async fn write_chunks<S, B, E>(stream: S, partial: &Path, pb: &ProgressBar) -> Result<u64>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let mut stream = std::pin::pin!(stream);
    let mut file = std::fs::File::create(partial)?;
    let mut downloaded = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(MceError::network)?;
        let bytes = chunk.as_ref();
        file.write_all(bytes)?;
        downloaded += bytes.len() as u64;
        pb.set_position(downloaded);
    }

    file.flush()?;
    Ok(downloaded)
}
