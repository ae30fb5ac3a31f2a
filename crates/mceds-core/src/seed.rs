//! Seed combination discovery
//!
//! For each enzyme class the structures are scanned in ascending PDB order.
//! A structure whose domain set already contains an accepted seed is skipped.
//! Otherwise its domain set becomes a candidate, is shrunk by successive
//! intersection with the structures in scope, and is recorded under the next
//! seed index.
//!
//! The shrinking step only replaces the candidate when the intersection is
//! non-empty. If every intersection along the way is empty the seed stays the
//! structure's full domain set, unreduced. That behaviour is kept as-is; it
//! is a known property of the heuristic, not a minimality guarantee.
//!
//! Structures with an empty domain set are skipped without taking a seed
//! index, so seeds are numbered 1, 2, .. over the non-empty structures only.
//! An input whose class lists an empty structure first therefore numbers its
//! first real seed 1, not 2.

use crate::config::ScopeMode;
use mceds_common::types::{DomainSet, EcNumber, RawMap, SeedMap, SeedTable, StructureMap};
use tracing::{debug, instrument, trace};

/// Output of [`SeedFinder::run`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedDiscovery {
    /// Seed tables, one per enzyme class of the input
    pub seeds: SeedMap,

    /// Union of every domain set in the input
    pub observed: DomainSet,
}

/// Greedy seed discovery over a [`RawMap`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedFinder {
    scope: ScopeMode,
}

impl SeedFinder {
    pub fn new(scope: ScopeMode) -> Self {
        Self { scope }
    }

    /// Discover the seed combinations of every class in `raw`.
    ///
    /// Every class present in `raw` gets a seed table, even when it ends up
    /// empty.
    #[instrument(skip_all, fields(scope = %self.scope, classes = raw.len()))]
    pub fn run(&self, raw: &RawMap) -> SeedDiscovery {
        let mut seeds = SeedMap::new();

        for (class, structures) in raw {
            let table = self.class_seeds(raw, class, structures);
            debug!(class = %class, structures = structures.len(), seeds = table.len(), "Seed combinations found");
            seeds.insert(class.clone(), table);
        }

        SeedDiscovery {
            seeds,
            observed: raw.observed_domains(),
        }
    }

    fn class_seeds(&self, raw: &RawMap, class: &EcNumber, structures: &StructureMap) -> SeedTable {
        let mut table = SeedTable::new();

        for (pdb, domains) in structures {
            if domains.is_empty() {
                trace!(class = %class, pdb = %pdb, "Structure has no domains, not a seed");
                continue;
            }

            if table.covers(domains) {
                trace!(class = %class, pdb = %pdb, "Already covered by an existing seed");
                continue;
            }

            let seed = match self.scope {
                ScopeMode::ClassLocal => shrink(domains, structures.values()),
                ScopeMode::Global => shrink(domains, raw.structures().map(|(_, _, d)| d)),
            };

            let index = table.push(seed);
            trace!(class = %class, pdb = %pdb, index = %index, "Accepted seed combination");
        }

        table
    }
}

/// Intersect `candidate` with each set in turn, keeping only non-empty results
fn shrink<'a>(candidate: &DomainSet, others: impl IntoIterator<Item = &'a DomainSet>) -> DomainSet {
    let mut common = candidate.clone();

    for other in others {
        let shared = common.intersection(other);
        if !shared.is_empty() {
            common = shared;
        }
    }

    common
}

/// Run seed discovery with `scope`
pub fn find_seeds(raw: &RawMap, scope: ScopeMode) -> SeedDiscovery {
    SeedFinder::new(scope).run(raw)
}
