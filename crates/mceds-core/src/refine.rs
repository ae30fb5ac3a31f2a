//! Signature refinement
//!
//! Maps each structure back onto the seed combinations of its class. A seed
//! matches when it is a non-empty subset of the structure's domain set; the
//! structure's MCEDS is the union of all matching seeds. Structures that
//! match nothing are left out of the refined map.

use mceds_common::types::{DomainSet, RawMap, RefinedMap, SeedMap};
use mceds_common::{MceError, Result};
use tracing::{debug, instrument, trace};

/// Output of [`SignatureRefiner::run`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Refinement {
    /// Per-structure signatures; every input class has an entry
    pub refined: RefinedMap,

    /// Every domain that appears in an accepted signature
    pub unique: DomainSet,
}

pub struct SignatureRefiner;

impl SignatureRefiner {
    /// Refine `raw` against the seeds discovered from the same input.
    ///
    /// Fails with [`MceError::MissingSeedData`] if `seeds` has no table for a
    /// class of `raw`, which means the two stages were not run on the same
    /// map.
    #[instrument(skip_all, fields(classes = raw.len()))]
    pub fn run(raw: &RawMap, seeds: &SeedMap) -> Result<Refinement> {
        let mut refined = RefinedMap::new();
        let mut unique = DomainSet::new();

        for (class, structures) in raw {
            let table = seeds.get(class.as_str()).ok_or_else(|| MceError::MissingSeedData {
                class: class.to_string(),
            })?;

            let signatures = refined.entry_or_default(class.clone());

            for (pdb, domains) in structures {
                let mut signature: Option<DomainSet> = None;

                for seed in table.seeds() {
                    if seed.is_contained_in(domains) {
                        signature.get_or_insert_with(DomainSet::new).union_with(seed);
                        unique.union_with(seed);
                    }
                }

                match signature {
                    Some(signature) => {
                        signatures.insert(pdb.clone(), signature);
                    },
                    None => trace!(class = %class, pdb = %pdb, "No seed combination matched"),
                }
            }

            debug!(
                class = %class,
                structures = structures.len(),
                signatures = signatures.len(),
                "Signatures refined"
            );
        }

        Ok(Refinement { refined, unique })
    }
}
