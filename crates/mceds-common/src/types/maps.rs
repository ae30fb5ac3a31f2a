use super::{DomainId, DomainSet, EcNumber, PdbCode};
use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap};
use std::fmt;

/// Domain sets keyed by PDB structure code
pub type StructureMap = BTreeMap<PdbCode, DomainSet>;

/// Ingested input: enzyme class -> structure -> domain set
pub type RawMap = ClassMap<StructureMap>;

/// Refined signatures: enzyme class -> structure -> union of matched seeds
pub type RefinedMap = ClassMap<StructureMap>;

/// Seed combinations discovered per enzyme class
pub type SeedMap = ClassMap<SeedTable>;

/// Ordered mapping from enzyme class to `T`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassMap<T>(BTreeMap<EcNumber, T>);

impl<T> Default for ClassMap<T> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<T> ClassMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of enzyme classes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, class: &str) -> Option<&T> {
        self.0.get(class)
    }

    pub fn insert(&mut self, class: impl Into<EcNumber>, value: T) -> Option<T> {
        self.0.insert(class.into(), value)
    }

    pub fn classes(&self) -> btree_map::Keys<'_, EcNumber, T> {
        self.0.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, EcNumber, T> {
        self.0.iter()
    }
}

impl<T: Default> ClassMap<T> {
    /// Entry for `class`, created empty if absent
    pub fn entry_or_default(&mut self, class: impl Into<EcNumber>) -> &mut T {
        self.0.entry(class.into()).or_default()
    }
}

impl<'a, T> IntoIterator for &'a ClassMap<T> {
    type Item = (&'a EcNumber, &'a T);
    type IntoIter = btree_map::Iter<'a, EcNumber, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl ClassMap<StructureMap> {
    /// Record that `pdb` under `class` carries `domain`.
    ///
    /// Repeated memberships for the same structure accumulate into one set.
    pub fn insert_membership(
        &mut self,
        class: impl Into<EcNumber>,
        pdb: impl Into<PdbCode>,
        domain: impl Into<DomainId>,
    ) {
        self.entry_or_default(class)
            .entry(pdb.into())
            .or_default()
            .insert(domain);
    }

    /// Set the full domain set of a structure, replacing any previous one
    pub fn insert_structure(
        &mut self,
        class: impl Into<EcNumber>,
        pdb: impl Into<PdbCode>,
        domains: DomainSet,
    ) {
        self.entry_or_default(class).insert(pdb.into(), domains);
    }

    pub fn structure(&self, class: &str, pdb: &str) -> Option<&DomainSet> {
        self.get(class).and_then(|structures| structures.get(pdb))
    }

    /// Every structure of every class, classes then structures ascending
    pub fn structures(&self) -> impl Iterator<Item = (&EcNumber, &PdbCode, &DomainSet)> {
        self.0.iter().flat_map(|(class, structures)| {
            structures
                .iter()
                .map(move |(pdb, domains)| (class, pdb, domains))
        })
    }

    pub fn structure_count(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    /// Union of every domain set in the map
    pub fn observed_domains(&self) -> DomainSet {
        let mut all = DomainSet::new();
        for (_, _, domains) in self.structures() {
            all.union_with(domains);
        }
        all
    }
}

/// 1-based position of a seed in discovery order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedIndex(u32);

impl SeedIndex {
    pub const FIRST: SeedIndex = SeedIndex(1);

    pub fn get(self) -> u32 {
        self.0
    }

    fn next(self) -> SeedIndex {
        SeedIndex(self.0 + 1)
    }
}

impl fmt::Display for SeedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seed combinations of a single enzyme class, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedTable(BTreeMap<SeedIndex, DomainSet>);

impl SeedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a seed under the next free index
    pub fn push(&mut self, seed: DomainSet) -> SeedIndex {
        let index = self
            .0
            .keys()
            .next_back()
            .map_or(SeedIndex::FIRST, |last| last.next());
        self.0.insert(index, seed);
        index
    }

    pub fn get(&self, index: SeedIndex) -> Option<&DomainSet> {
        self.0.get(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, SeedIndex, DomainSet> {
        self.0.iter()
    }

    pub fn seeds(&self) -> btree_map::Values<'_, SeedIndex, DomainSet> {
        self.0.values()
    }

    /// Whether any recorded seed is contained in `domains`
    pub fn covers(&self, domains: &DomainSet) -> bool {
        self.0.values().any(|seed| seed.is_contained_in(domains))
    }
}

impl<'a> IntoIterator for &'a SeedTable {
    type Item = (&'a SeedIndex, &'a DomainSet);
    type IntoIter = btree_map::Iter<'a, SeedIndex, DomainSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
