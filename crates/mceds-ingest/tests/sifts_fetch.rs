//! Integration tests for the SIFTS remote source
//!
//! These tests serve gzipped SIFTS tables from a mock server and check:
//! - The PDB join into an EC -> PDB -> domains map
//! - Reuse of the on-disk cache
//! - Refresh and cache cleaning
//! - HTTP failures

use flate2::write::GzEncoder;
use flate2::Compression;
use mceds_ingest::sifts::config::{ENZYME_FILE, INTERPRO_FILE};
use mceds_ingest::{load_domain_map, DomainSource, MembershipParser, SiftsClient, SiftsConfig};
use std::io::Write;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const ENZYMES: &str = "# 2024/05/21 - 09:34 | PDB: 20.24\n\
PDB\tCHAIN\tACCESSION\tEC_NUMBER\n\
1abc\tA\tP00001\t1.1.1.1\n\
2def\tA\tP00002\t1.1.1.1\n\
3ghi\tA\tP00003\t2.7.-.-\n";

const INTERPRO: &str = "# 2024/05/21 - 09:34 | PDB: 20.24\n\
PDB\tCHAIN\tINTERPRO_ID\n\
1abc\tA\tIPR000001\n\
1abc\tB\tIPR000002\n\
2def\tA\tIPR000001\n\
3ghi\tA\tIPR000003\n";

fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

async fn mount_tables(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", ENZYME_FILE)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(gzip(ENZYMES)))
        .expect(expected_calls)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/{}", INTERPRO_FILE)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(gzip(INTERPRO)))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn config_for(server: &MockServer, cache: &TempDir) -> SiftsConfig {
    SiftsConfig::new(cache.path()).with_base_url(server.uri())
}

// ============================================================================
// Join Tests
// ============================================================================

#[tokio::test]
async fn test_remote_source_builds_domain_map() {
    let server = MockServer::start().await;
    mount_tables(&server, 1).await;
    let cache = TempDir::new().unwrap();

    let raw = load_domain_map(&DomainSource::remote(config_for(&server, &cache)))
        .await
        .unwrap();

    assert_eq!(raw.len(), 1);
    assert_eq!(
        raw.structure("1.1.1.1", "1ABC").unwrap().to_string(),
        "[IPR000001, IPR000002]"
    );
    assert_eq!(raw.structure("1.1.1.1", "2DEF").unwrap().to_string(), "[IPR000001]");
    assert!(raw.get("2.7.-.-").is_none());
}

#[tokio::test]
async fn test_written_membership_file_reparses_identically() {
    let server = MockServer::start().await;
    mount_tables(&server, 1).await;
    let cache = TempDir::new().unwrap();

    let raw = load_domain_map(&DomainSource::remote(config_for(&server, &cache)))
        .await
        .unwrap();

    let mut buffer = Vec::new();
    let rows = mceds_ingest::write_memberships(&raw, &mut buffer, b'\t').unwrap();
    assert_eq!(rows, 3);

    let reparsed = MembershipParser::new().parse_reader(buffer.as_slice()).unwrap();
    assert_eq!(reparsed, raw);
}

// ============================================================================
// Cache Tests
// ============================================================================

#[tokio::test]
async fn test_second_load_uses_cache() {
    let server = MockServer::start().await;
    mount_tables(&server, 1).await;
    let cache = TempDir::new().unwrap();
    let client = SiftsClient::new(config_for(&server, &cache)).unwrap();

    let first = client.load(false).await.unwrap();
    let second = client.load(false).await.unwrap();

    assert_eq!(first, second);
    assert!(client.config().cache_path(ENZYME_FILE).is_file());
    assert!(client.config().cache_path(INTERPRO_FILE).is_file());
}

#[tokio::test]
async fn test_refresh_downloads_again() {
    let server = MockServer::start().await;
    mount_tables(&server, 2).await;
    let cache = TempDir::new().unwrap();
    let client = SiftsClient::new(config_for(&server, &cache)).unwrap();

    client.load(false).await.unwrap();
    client.load(true).await.unwrap();
}

#[tokio::test]
async fn test_clear_cache_removes_downloads() {
    let server = MockServer::start().await;
    mount_tables(&server, 1).await;
    let cache = TempDir::new().unwrap();
    let client = SiftsClient::new(config_for(&server, &cache)).unwrap();

    client.load(false).await.unwrap();
    assert_eq!(client.clear_cache().unwrap(), 2);
    assert_eq!(client.clear_cache().unwrap(), 0);
    assert!(!client.config().cache_path(ENZYME_FILE).exists());
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_http_error_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let cache = TempDir::new().unwrap();
    let err = load_domain_map(&DomainSource::remote(config_for(&server, &cache)))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("404"));
    assert!(!cache.path().join("sifts").join(ENZYME_FILE).exists());
}

#[test]
fn test_invalid_base_url_rejected() {
    let cache = TempDir::new().unwrap();
    let config = SiftsConfig::new(cache.path()).with_base_url("ftp://example.org");
    assert!(SiftsClient::new(config).is_err());
}
