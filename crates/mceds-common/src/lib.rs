//! MCEDS Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging, and error handling for the MCEDS workspace.
//!
//! # Overview
//!
//! This crate provides common functionality used across all MCEDS workspace members:
//!
//! - **Error Handling**: The shared [`MceError`] taxonomy and [`Result`] alias
//! - **Logging**: `tracing` subscriber configuration
//! - **Types**: Identifiers, domain sets and the per-class maps the pipeline
//!   reads and produces
//!
//! # Example
//!
//! ```
//! use mceds_common::types::{DomainSet, RawMap};
//!
//! let mut raw = RawMap::new();
//! raw.insert_membership("1.1.1.1", "1ABC", "IPR000001");
//! raw.insert_membership("1.1.1.1", "1ABC", "IPR000002");
//!
//! let domains = raw.structure("1.1.1.1", "1ABC").map(DomainSet::len);
//! assert_eq!(domains, Some(2));
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{MceError, Result};
