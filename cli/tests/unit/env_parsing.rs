//! Boundary parsing tests for the staging inputs.

#![allow(clippy::expect_used)]

use appdx_cli::infra::env::{parse_catalog, parse_metadata};
use appdx_common::{ApplicationMetadata, ServiceCatalog};

use crate::mocks::RecordingReporter;

#[test]
fn test_parse_catalog_absent_input_is_empty_and_silent() {
    let reporter = RecordingReporter::default();
    let catalog = parse_catalog(None, &reporter);
    assert_eq!(catalog, ServiceCatalog::default());
    assert!(reporter.messages.lock().expect("lock").is_empty());
}

#[test]
fn test_parse_catalog_malformed_input_degrades_with_warning() {
    let reporter = RecordingReporter::default();
    let catalog = parse_catalog(Some("{broken"), &reporter);
    assert_eq!(catalog, ServiceCatalog::default());
    assert!(reporter.saw("VCAP_SERVICES could not be parsed"));
}

#[test]
fn test_parse_catalog_well_formed_input_round_trips() {
    let reporter = RecordingReporter::default();
    let catalog = parse_catalog(
        Some(r#"{"appdynamics":[{"name":"appdynamics-1","credentials":{"port":443}}]}"#),
        &reporter,
    );
    assert_eq!(catalog.typed_bindings("appdynamics").len(), 1);
    assert!(reporter.messages.lock().expect("lock").is_empty());
}

#[test]
fn test_parse_metadata_absent_input_is_empty_and_silent() {
    let reporter = RecordingReporter::default();
    let metadata = parse_metadata(None, &reporter);
    assert_eq!(metadata, ApplicationMetadata::default());
    assert!(reporter.messages.lock().expect("lock").is_empty());
}

#[test]
fn test_parse_metadata_malformed_input_degrades_with_warning() {
    let reporter = RecordingReporter::default();
    let metadata = parse_metadata(Some("not json"), &reporter);
    assert_eq!(metadata, ApplicationMetadata::default());
    assert!(reporter.saw("VCAP_APPLICATION could not be parsed"));
}
