//! Report rendering
//!
//! All renderers write to any [`Write`] so the same code serves stdout,
//! files and tests.

use crate::error::Result;
use clap::ValueEnum;
use mceds_common::types::{DomainSet, RawMap, RefinedMap, SeedMap};
use mceds_core::{Analysis, RunConfig, ScopeMode};
use serde::{Deserialize, Serialize};
use std::io::Write;

// ============================================================================
// Report Layout Constants
// ============================================================================

pub const BANNER: &str = "!------------------------------------------------!";

pub const TABLE_HEADER: &str = "\t\"EC\"\t\"PDB\"\t\"DOMAINS\"\t\"MCEDS\"";

pub const SEED_HEADER: &str = "\t\"Combinations\"\t\"EC\"\t\"Combinations\"";

/// Output format of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Per-structure raw domains and signature
    #[default]
    Table,
    /// Seed combinations followed by domain counts
    Summary,
    /// Machine-readable document
    Json,
}

impl ReportFormat {
    /// Verbose runs report the seed summary, others the signature table
    pub fn for_config(config: &RunConfig) -> Self {
        if config.verbose {
            ReportFormat::Summary
        } else {
            ReportFormat::Table
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReportFormat::Table => "table",
            ReportFormat::Summary => "summary",
            ReportFormat::Json => "json",
        };
        write!(f, "{}", name)
    }
}

/// Write `analysis` of `raw` to `out` in `format`
pub fn render<W: Write>(analysis: &Analysis, raw: &RawMap, format: ReportFormat, out: &mut W) -> Result<()> {
    match format {
        ReportFormat::Table => write_table(analysis, raw, out),
        ReportFormat::Summary => write_summary(analysis, out),
        ReportFormat::Json => write_json(analysis, out),
    }
}

fn write_table<W: Write>(analysis: &Analysis, raw: &RawMap, out: &mut W) -> Result<()> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "{}", TABLE_HEADER)?;
    writeln!(out, "{}", BANNER)?;

    let no_domains = DomainSet::new();
    for (ec, pdb, signature) in analysis.refined().structures() {
        let domains = raw.structure(ec.as_str(), pdb.as_str()).unwrap_or(&no_domains);
        writeln!(out, "\t{}\t{}\t{}\t{}", ec, pdb, domains, signature)?;
    }

    Ok(())
}

fn write_summary<W: Write>(analysis: &Analysis, out: &mut W) -> Result<()> {
    writeln!(out, "{}", SEED_HEADER)?;

    for (ec, table) in analysis.seeds() {
        for (index, seed) in table {
            writeln!(out, "\t{}\t{}\t{}", index, ec, seed)?;
        }
    }

    writeln!(out, "\t{}", BANNER)?;
    writeln!(out, "\tTotal Input Domains Found: {}", analysis.total_domain_count())?;
    writeln!(out, "\tTotal Unique Domains Found: {}", analysis.unique_domain_count())?;
    writeln!(out, "\tTotal Confusion Domains Found: {}", analysis.confusion_domain_count())?;
    writeln!(out, "\t{}", BANNER)?;

    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    scope: ScopeMode,
    seeds: &'a SeedMap,
    signatures: &'a RefinedMap,
    counts: DomainCounts,
}

#[derive(Serialize)]
struct DomainCounts {
    total: usize,
    unique: usize,
    confusion: usize,
}

fn write_json<W: Write>(analysis: &Analysis, out: &mut W) -> Result<()> {
    let report = JsonReport {
        scope: analysis.config().scope,
        seeds: analysis.seeds(),
        signatures: analysis.refined(),
        counts: DomainCounts {
            total: analysis.total_domain_count(),
            unique: analysis.unique_domain_count(),
            confusion: analysis.confusion_domain_count(),
        },
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn sample() -> RawMap {
        let mut raw = RawMap::new();
        for (ec, pdb, domain) in [
            ("1.1.1.1", "P1", "d1"),
            ("1.1.1.1", "P1", "d2"),
            ("1.1.1.1", "P2", "d1"),
            ("1.1.1.1", "P2", "d3"),
            ("2.2.2.2", "P3", "d4"),
        ] {
            raw.insert_membership(ec, pdb, domain);
        }
        raw
    }

    fn rendered(format: ReportFormat) -> String {
        let raw = sample();
        let analysis = Analysis::run(&raw, &RunConfig::default()).unwrap();
        let mut out = Vec::new();
        render(&analysis, &raw, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_report() {
        let expected = "\
!------------------------------------------------!
\t\"EC\"\t\"PDB\"\t\"DOMAINS\"\t\"MCEDS\"
!------------------------------------------------!
\t1.1.1.1\tP1\t[d1, d2]\t[d1]
\t1.1.1.1\tP2\t[d1, d3]\t[d1]
\t2.2.2.2\tP3\t[d4]\t[d4]
";
        assert_eq!(rendered(ReportFormat::Table), expected);
    }

    #[test]
    fn test_summary_report() {
        let expected = "\
\t\"Combinations\"\t\"EC\"\t\"Combinations\"
\t1\t1.1.1.1\t[d1]
\t1\t2.2.2.2\t[d4]
\t!------------------------------------------------!
\tTotal Input Domains Found: 4
\tTotal Unique Domains Found: 2
\tTotal Confusion Domains Found: 2
\t!------------------------------------------------!
";
        assert_eq!(rendered(ReportFormat::Summary), expected);
    }

    #[test]
    fn test_json_report() {
        let value: serde_json::Value = serde_json::from_str(&rendered(ReportFormat::Json)).unwrap();

        assert_eq!(value["scope"], "global");
        assert_eq!(value["seeds"]["1.1.1.1"]["1"], serde_json::json!(["d1"]));
        assert_eq!(value["signatures"]["2.2.2.2"]["P3"], serde_json::json!(["d4"]));
        assert_eq!(value["counts"]["total"], 4);
        assert_eq!(value["counts"]["unique"], 2);
        assert_eq!(value["counts"]["confusion"], 2);
    }

    #[test]
    fn test_empty_input_renders_header_only() {
        let raw = RawMap::new();
        let analysis = Analysis::run(&raw, &RunConfig::default()).unwrap();
        let mut out = Vec::new();
        render(&analysis, &raw, ReportFormat::Table, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_format_follows_verbose_run() {
        let config = RunConfig::new(ScopeMode::ClassLocal);
        assert_eq!(ReportFormat::for_config(&config), ReportFormat::Table);
        assert_eq!(ReportFormat::for_config(&config.with_verbose(true)), ReportFormat::Summary);
    }

    #[test]
    fn test_report_format_display() {
        assert_eq!(ReportFormat::Summary.to_string(), "summary");
        assert_eq!(ReportFormat::default(), ReportFormat::Table);
    }
}
