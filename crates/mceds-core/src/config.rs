//! Run configuration

use mceds_common::MceError;
use serde::{Deserialize, Serialize};

/// Which structures the seed-shrinking intersection visits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScopeMode {
    /// Only structures of the class the seed belongs to
    ClassLocal,
    /// Every structure of every class in the input
    #[default]
    Global,
}

impl std::str::FromStr for ScopeMode {
    type Err = MceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "global" | "all" => Ok(ScopeMode::Global),
            "class-local" | "local" | "within-class" => Ok(ScopeMode::ClassLocal),
            _ => Err(MceError::InvalidScope(format!(
                "'{}' (expected 'global' or 'class-local')",
                s
            ))),
        }
    }
}

impl std::fmt::Display for ScopeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeMode::ClassLocal => write!(f, "class-local"),
            ScopeMode::Global => write!(f, "global"),
        }
    }
}

/// Options for a single pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunConfig {
    pub scope: ScopeMode,

    /// Request the intermediate seed table and domain counts instead of the
    /// signature table
    pub verbose: bool,
}

impl RunConfig {
    pub fn new(scope: ScopeMode) -> Self {
        Self {
            scope,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.scope, ScopeMode::Global);
        assert!(!config.verbose);
    }

    #[test]
    fn test_scope_from_str() {
        assert_eq!("global".parse::<ScopeMode>().unwrap(), ScopeMode::Global);
        assert_eq!("Class-Local".parse::<ScopeMode>().unwrap(), ScopeMode::ClassLocal);
        assert_eq!("within-class".parse::<ScopeMode>().unwrap(), ScopeMode::ClassLocal);
        assert!(matches!("nearby".parse::<ScopeMode>(), Err(MceError::InvalidScope(_))));
    }

    #[test]
    fn test_run_config_json() {
        let config = RunConfig::new(ScopeMode::ClassLocal).with_verbose(true);
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json, serde_json::json!({ "scope": "class-local", "verbose": true }));

        let parsed: RunConfig = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_scope_display_round_trips() {
        for scope in [ScopeMode::Global, ScopeMode::ClassLocal] {
            assert_eq!(scope.to_string().parse::<ScopeMode>().unwrap(), scope);
        }
    }
}
