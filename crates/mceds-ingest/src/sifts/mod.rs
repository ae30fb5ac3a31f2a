//! SIFTS-based remote ingestion
//!
//! Builds a [`RawMap`](mceds_common::types::RawMap) from the EBI SIFTS
//! cross-reference tables: PDB chain to EC number, and PDB chain to
//! InterPro entry, joined on PDB code.

pub mod client;
pub mod config;
pub mod parser;

pub use client::SiftsClient;
pub use config::SiftsConfig;
