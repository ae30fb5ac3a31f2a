use super::DomainId;
use serde::{Deserialize, Serialize};
use std::collections::{btree_set, BTreeSet};
use std::fmt;

/// Ordered set of domain identifiers.
///
/// Displays as `[IPR000001, IPR000002]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainSet(BTreeSet<DomainId>);

impl DomainSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a domain, returning `false` if it was already present
    pub fn insert(&mut self, domain: impl Into<DomainId>) -> bool {
        self.0.insert(domain.into())
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.0.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, DomainId> {
        self.0.iter()
    }

    /// Domains present in both sets
    pub fn intersection(&self, other: &DomainSet) -> DomainSet {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    /// Containment test used by both pipeline stages.
    ///
    /// True when `self ∩ other` is non-empty and as large as `self`, i.e.
    /// `self` is a non-empty subset of `other`. An empty set is never
    /// contained, not even in another empty set.
    pub fn is_contained_in(&self, other: &DomainSet) -> bool {
        !self.0.is_empty() && self.0.is_subset(&other.0)
    }

    /// Plain subset check (the empty set is a subset of everything)
    pub fn is_subset(&self, other: &DomainSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Add every domain of `other` to this set
    pub fn union_with(&mut self, other: &DomainSet) {
        self.0.extend(other.0.iter().cloned());
    }
}

impl fmt::Display for DomainSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, domain) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(domain.as_str())?;
        }
        f.write_str("]")
    }
}

impl<D: Into<DomainId>> FromIterator<D> for DomainSet {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<D: Into<DomainId>> Extend<D> for DomainSet {
    fn extend<I: IntoIterator<Item = D>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a DomainSet {
    type Item = &'a DomainId;
    type IntoIter = btree_set::Iter<'a, DomainId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for DomainSet {
    type Item = DomainId;
    type IntoIter = btree_set::IntoIter<DomainId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
