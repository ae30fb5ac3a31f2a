//! MCEDS Core Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Minimum conserved enzyme domain signature (MCEDS) computation.
//!
//! # Overview
//!
//! The pipeline has two stages over one immutable [`RawMap`]:
//!
//! - **Seed discovery** ([`SeedFinder`]): per enzyme class, a greedy scan that
//!   accepts a structure's domain set as a new seed only when no earlier seed
//!   is already contained in it, then shrinks the candidate by intersecting
//!   it with other structures.
//! - **Refinement** ([`SignatureRefiner`]): maps every structure onto the
//!   seeds it fully contains and collects the domains that occur in any
//!   accepted signature.
//!
//! Structures are visited in ascending EC number then PDB code order. The
//! heuristic is order-dependent: reordering or renaming input before it
//! reaches this crate can change which combinations become seeds.
//!
//! No I/O happens here. Ingestion lives in `mceds-ingest`, presentation in
//! `mceds-cli`.
//!
//! # Example
//!
//! ```
//! use mceds_common::types::RawMap;
//! use mceds_core::{Analysis, RunConfig};
//!
//! let mut raw = RawMap::new();
//! raw.insert_membership("EC1", "P1", "d1");
//! raw.insert_membership("EC1", "P1", "d2");
//! raw.insert_membership("EC1", "P2", "d1");
//! raw.insert_membership("EC1", "P2", "d2");
//! raw.insert_membership("EC1", "P2", "d3");
//!
//! let analysis = Analysis::run(&raw, &RunConfig::default())?;
//! assert_eq!(analysis.unique_domain_count(), 2);
//! assert_eq!(analysis.confusion_domain_count(), 1);
//! # Ok::<(), mceds_common::MceError>(())
//! ```
//!
//! [`RawMap`]: mceds_common::types::RawMap

pub mod analysis;
pub mod config;
pub mod refine;
pub mod seed;

pub use analysis::Analysis;
pub use config::{RunConfig, ScopeMode};
pub use refine::{Refinement, SignatureRefiner};
pub use seed::{SeedDiscovery, SeedFinder};
