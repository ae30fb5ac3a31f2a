// Domain Membership File Parser
//
// Reads and writes delimited EC/PDB/domain membership files.
//
// File Format:
//    One membership per row: EC_NUMBER <delim> PDB_CODE <delim> DOMAIN_ID [<delim> ignored...]
//    Example: 3.4.21.4	1A0J	IPR001254
//
// Rows for the same (EC, PDB) pair accumulate into one domain set. Lines
// starting with '#' and blank lines are skipped, as is a leading header row
// whose first two fields are "EC" and "PDB". Files ending in ".gz" are
// decompressed on the fly.
//
// PDB codes are upper-cased on read, the same as the SIFTS source, so "1abc"
// and "1ABC" name one structure and structures sort by the upper-cased code.
// EC numbers and domain ids are kept exactly as written.

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use flate2::read::GzDecoder;
use mceds_common::types::{DomainId, EcNumber, PdbCode, RawMap};
use mceds_common::{MceError, Result};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Tab, unless configured otherwise
pub const DEFAULT_DELIMITER: u8 = b'\t';

const MIN_FIELDS: usize = 3;

/// A single (EC, PDB, domain) row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub ec: EcNumber,
    pub pdb: PdbCode,
    pub domain: DomainId,
}

// ============================================================================
// Reader
// ============================================================================

/// Parser for delimited membership files
#[derive(Debug, Clone, Copy)]
pub struct MembershipParser {
    delimiter: u8,
}

impl MembershipParser {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Parse a membership file, gzipped or plain
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<RawMap> {
        let path = path.as_ref();
        info!(path = %path.display(), "Reading domain memberships");

        let file = File::open(path)?;
        let gzipped = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

        if gzipped {
            self.parse_reader(BufReader::new(GzDecoder::new(file)))
        } else {
            self.parse_reader(BufReader::new(file))
        }
    }

    /// Parse memberships from any reader.
    ///
    /// The first malformed row aborts parsing with [`MceError::Parse`].
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<RawMap> {
        let mut records = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(Trim::All)
            .from_reader(reader);

        let mut raw = RawMap::new();
        let mut rows = 0usize;

        for (index, record) in records.records().enumerate() {
            let record = record.map_err(csv_error)?;
            let line = record.position().map_or(index + 1, |pos| pos.line() as usize);

            if record.iter().all(str::is_empty) {
                continue;
            }

            if rows == 0 && is_header(&record) {
                debug!(line, "Skipping header row");
                continue;
            }

            let membership = parse_record(&record, line)?;
            raw.insert_membership(membership.ec, membership.pdb, membership.domain);
            rows += 1;
        }

        debug!(
            rows,
            classes = raw.len(),
            structures = raw.structure_count(),
            "Parsed domain memberships"
        );

        Ok(raw)
    }
}

impl Default for MembershipParser {
    fn default() -> Self {
        Self::new()
    }
}

fn is_header(record: &StringRecord) -> bool {
    let first = record.get(0).unwrap_or_default();
    let second = record.get(1).unwrap_or_default();
    (first.eq_ignore_ascii_case("ec") || first.eq_ignore_ascii_case("ec_number"))
        && second.eq_ignore_ascii_case("pdb")
}

fn parse_record(record: &StringRecord, line: usize) -> Result<Membership> {
    if record.len() < MIN_FIELDS {
        return Err(MceError::parse(
            line,
            format!("Expected at least {} fields, got {}", MIN_FIELDS, record.len()),
        ));
    }

    Ok(Membership {
        ec: EcNumber::from(required_field(record, 0, "EC number", line)?),
        pdb: PdbCode::from(required_field(record, 1, "PDB code", line)?.to_ascii_uppercase()),
        domain: DomainId::from(required_field(record, 2, "domain", line)?),
    })
}

fn required_field<'r>(
    record: &'r StringRecord,
    position: usize,
    name: &str,
    line: usize,
) -> Result<&'r str> {
    match record.get(position) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(MceError::parse(line, format!("Empty {} field", name))),
    }
}

fn csv_error(err: csv::Error) -> MceError {
    let line = err.position().map_or(0, |pos| pos.line() as usize);
    match err.into_kind() {
        csv::ErrorKind::Io(io) => MceError::Io(io),
        csv::ErrorKind::Utf8 { err, .. } => MceError::parse(line, format!("Invalid UTF-8: {}", err)),
        other => MceError::parse(line, format!("{:?}", other)),
    }
}

// ============================================================================
// Writer
// ============================================================================

/// Write every membership of `raw` as delimited rows.
///
/// Structures with an empty domain set have no rows and are not preserved.
/// Returns the number of rows written.
pub fn write_memberships<W: Write>(raw: &RawMap, mut writer: W, delimiter: u8) -> Result<usize> {
    writeln!(writer, "# EC_NUMBER, PDB, DOMAIN")?;

    let mut rows = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);

    let mut count = 0usize;
    for (class, pdb, domains) in raw.structures() {
        for domain in domains {
            rows.write_record([class.as_str(), pdb.as_str(), domain.as_str()])
                .map_err(csv_error)?;
            count += 1;
        }
    }

    rows.flush()?;
    Ok(count)
}

// ============================================================================
// Tests
// ============================================================================
