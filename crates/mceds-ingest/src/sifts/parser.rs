// SIFTS Flat File Parser
//
// Parses the per-chain SIFTS cross-reference tables and joins them on PDB code.
//
// File Formats (tab separated, one leading '#' comment line, then a header):
// 1. pdb_chain_enzyme.tsv.gz
//    Header: PDB CHAIN ACCESSION EC_NUMBER
//    Example: 101m A P02185 1.7.-.-
//
// 2. pdb_chain_interpro.tsv.gz
//    Header: PDB CHAIN INTERPRO_ID
//    Example: 101m A IPR000971
//
// Columns are located by header name, so extra or reordered columns are fine.

use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use mceds_common::types::{DomainSet, PdbCode, RawMap};
use mceds_common::{MceError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

pub const PDB_COLUMN: &str = "PDB";
pub const EC_COLUMN: &str = "EC_NUMBER";
pub const INTERPRO_COLUMN: &str = "INTERPRO_ID";

/// Values of one column grouped by upper-cased PDB code
pub type PdbIndex = BTreeMap<PdbCode, BTreeSet<String>>;

/// Index a gzipped SIFTS table by PDB code
pub fn index_file<P: AsRef<Path>>(path: P, value_column: &str) -> Result<PdbIndex> {
    let file = File::open(path.as_ref())?;
    index_by_pdb(BufReader::new(GzDecoder::new(file)), value_column)
}

/// Index an uncompressed SIFTS table by PDB code
pub fn index_by_pdb<R: Read>(reader: R, value_column: &str) -> Result<PdbIndex> {
    let mut table = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let headers = table.headers().map_err(table_error)?.clone();
    let pdb_at = column(&headers, PDB_COLUMN)?;
    let value_at = column(&headers, value_column)?;

    let mut index = PdbIndex::new();
    let mut rows = 0usize;

    for record in table.records() {
        let record = record.map_err(table_error)?;

        let (Some(pdb), Some(value)) = (record.get(pdb_at), record.get(value_at)) else {
            continue;
        };
        let (pdb, value) = (pdb.trim(), value.trim());
        if pdb.is_empty() || value.is_empty() {
            continue;
        }

        index
            .entry(PdbCode::from(pdb.to_ascii_uppercase()))
            .or_default()
            .insert(value.to_string());
        rows += 1;
    }

    debug!(column = value_column, rows, entries = index.len(), "Indexed SIFTS table");
    Ok(index)
}

fn column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            let line = headers.position().map_or(1, |pos| pos.line() as usize);
            MceError::parse(line, format!("Missing column {} in SIFTS header", name))
        })
}

fn table_error(err: csv::Error) -> MceError {
    let line = err.position().map_or(0, |pos| pos.line() as usize);
    match err.into_kind() {
        csv::ErrorKind::Io(io) => MceError::Io(io),
        other => MceError::parse(line, format!("{:?}", other)),
    }
}

/// A fully specified EC number has four numeric levels and no '-' placeholder
pub fn is_complete_ec(ec: &str) -> bool {
    let levels: Vec<&str> = ec.split('.').collect();
    levels.len() == 4 && levels.iter().all(|level| !level.is_empty() && *level != "-")
}

/// Give every complete EC number of a PDB entry all InterPro ids of that entry
pub fn join(enzymes: &PdbIndex, domains: &PdbIndex) -> RawMap {
    let mut raw = RawMap::new();
    let mut incomplete = 0usize;
    let mut without_domains = 0usize;

    for (pdb, classes) in enzymes {
        let Some(ids) = domains.get(pdb) else {
            without_domains += 1;
            continue;
        };
        let domain_set: DomainSet = ids.iter().map(String::as_str).collect();

        for class in classes {
            if !is_complete_ec(class) {
                incomplete += 1;
                continue;
            }
            raw.entry_or_default(class.as_str())
                .entry(pdb.clone())
                .or_default()
                .union_with(&domain_set);
        }
    }

    info!(
        classes = raw.len(),
        structures = raw.structure_count(),
        incomplete_ec = incomplete,
        pdb_without_domains = without_domains,
        "Joined SIFTS enzyme and InterPro tables"
    );

    raw
}
