//! Common types used across MCEDS
//!
//! Every collection here iterates in ascending key order. The seed heuristic
//! is order-dependent, so the ordering is part of the observable behaviour
//! and not an implementation detail.

mod domain_set;
mod maps;

pub use domain_set::DomainSet;
pub use maps::{ClassMap, RawMap, RefinedMap, SeedIndex, SeedMap, SeedTable, StructureMap};

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

identifier!(
    /// Structural domain family identifier (e.g. an InterPro accession).
    DomainId
);

identifier!(
    /// PDB structure code.
    PdbCode
);

identifier!(
    /// Enzyme Commission number.
    EcNumber
);
