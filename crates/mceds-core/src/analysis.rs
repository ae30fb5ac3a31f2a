//! End-to-end MCEDS run

use crate::config::RunConfig;
use crate::refine::SignatureRefiner;
use crate::seed::SeedFinder;
use mceds_common::types::{DomainSet, RawMap, RefinedMap, SeedMap};
use mceds_common::Result;
use tracing::{info, instrument};

/// Results of seed discovery followed by refinement on one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    config: RunConfig,
    seeds: SeedMap,
    refined: RefinedMap,
    observed: DomainSet,
    unique: DomainSet,
}

impl Analysis {
    /// Run both stages on `raw`
    #[instrument(skip_all, fields(scope = %config.scope))]
    pub fn run(raw: &RawMap, config: &RunConfig) -> Result<Self> {
        let discovery = SeedFinder::new(config.scope).run(raw);
        let refinement = SignatureRefiner::run(raw, &discovery.seeds)?;

        let analysis = Self {
            config: *config,
            seeds: discovery.seeds,
            refined: refinement.refined,
            observed: discovery.observed,
            unique: refinement.unique,
        };

        info!(
            classes = raw.len(),
            structures = raw.structure_count(),
            seeds = analysis.seed_count(),
            signatures = analysis.signature_count(),
            total_domains = analysis.total_domain_count(),
            unique_domains = analysis.unique_domain_count(),
            "MCEDS analysis complete"
        );

        Ok(analysis)
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn seeds(&self) -> &SeedMap {
        &self.seeds
    }

    pub fn refined(&self) -> &RefinedMap {
        &self.refined
    }

    /// Every domain seen in the input
    pub fn observed_domains(&self) -> &DomainSet {
        &self.observed
    }

    /// Every domain that made it into a signature
    pub fn unique_domains(&self) -> &DomainSet {
        &self.unique
    }

    pub fn total_domain_count(&self) -> usize {
        self.observed.len()
    }

    pub fn unique_domain_count(&self) -> usize {
        self.unique.len()
    }

    /// Observed domains that never appear in a signature
    pub fn confusion_domain_count(&self) -> usize {
        self.total_domain_count().saturating_sub(self.unique_domain_count())
    }

    /// Total number of seed combinations across all classes
    pub fn seed_count(&self) -> usize {
        self.seeds.iter().map(|(_, table)| table.len()).sum()
    }

    /// Number of structures that received a signature
    pub fn signature_count(&self) -> usize {
        self.refined.structure_count()
    }
}
