//! Service-level tests for one activation cycle.

#![allow(clippy::expect_used)]

use appdx_cli::application::services::resolve::{ResolutionOutcome, resolve_configuration};
use appdx_cli::domain::resolved::{
    VAR_ACCESS_KEY, VAR_ACCOUNT_NAME, VAR_APP, VAR_CONTROLLER_HOST, VAR_CONTROLLER_PORT, VAR_HOST,
    VAR_NODE, VAR_SSL_ENABLED, VAR_TIER,
};
use appdx_common::{ApplicationMetadata, BindingEntry, ServiceCatalog, USER_PROVIDED_KEY};

use crate::mocks::RecordingReporter;

fn full_binding(name: &str) -> BindingEntry {
    BindingEntry::new(name)
        .with_credential("host-name", "ctrl.example.com")
        .with_credential("port", 443)
        .with_credential("account-name", "acct1")
        .with_credential("account-accesss-key", "key1")
        .with_credential("ssl-enabled", true)
}

fn metadata() -> ApplicationMetadata {
    ApplicationMetadata {
        space_name: Some("prod".to_string()),
        application_name: Some("svc".to_string()),
        instance_index: Some(0),
    }
}

#[test]
fn test_scenario_one_typed_binding_resolves_full_configuration() {
    let mut catalog = ServiceCatalog::default();
    catalog.insert("appdynamics", vec![full_binding("appdynamics-1")]);
    let reporter = RecordingReporter::default();

    let outcome = resolve_configuration(&catalog, &metadata(), &reporter);
    let config = outcome.configuration().expect("configured");

    assert!(config.binding_detected());
    assert_eq!(config.get(VAR_CONTROLLER_HOST), Some("ctrl.example.com"));
    assert_eq!(config.get(VAR_CONTROLLER_PORT), Some("443"));
    assert_eq!(config.get(VAR_ACCOUNT_NAME), Some("acct1"));
    assert_eq!(config.get(VAR_ACCESS_KEY), Some("key1"));
    assert_eq!(config.get(VAR_SSL_ENABLED), Some("true"));
    assert_eq!(config.get(VAR_APP), Some("prod:svc"));
    assert_eq!(config.get(VAR_TIER), Some("svc"));
    assert_eq!(config.get(VAR_NODE), Some("svc:node"));
    assert!(reporter.saw("AppDynamics service detected"));
}

#[test]
fn test_scenario_user_provided_fallback_takes_identity_from_credentials() {
    let mut catalog = ServiceCatalog::default();
    catalog.insert(
        USER_PROVIDED_KEY,
        vec![
            BindingEntry::new("my-appdynamics")
                .with_credential("host-name", "h")
                .with_credential("application-name", "A")
                .with_credential("tier-name", "T")
                .with_credential("node-name", "N"),
        ],
    );
    let reporter = RecordingReporter::default();

    let outcome = resolve_configuration(&catalog, &metadata(), &reporter);
    let config = outcome.configuration().expect("configured");

    assert_eq!(config.get(VAR_CONTROLLER_HOST), Some("h"));
    // Identity comes straight from the binding, never synthesized from
    // metadata.
    assert_eq!(config.get(VAR_APP), Some("A"));
    assert_eq!(config.get(VAR_TIER), Some("T"));
    assert_eq!(config.get(VAR_NODE), Some("N"));
    assert!(reporter.saw("user-provided service 'my-appdynamics'"));
}

#[test]
fn test_scenario_empty_catalog_is_not_applicable() {
    let reporter = RecordingReporter::default();
    let outcome = resolve_configuration(
        &ServiceCatalog::default(),
        &ApplicationMetadata::default(),
        &reporter,
    );
    assert_eq!(outcome, ResolutionOutcome::NotApplicable);
    assert!(reporter.messages.lock().expect("lock").is_empty());
}

#[test]
fn test_scenario_multiple_typed_bindings_first_wins_with_warning() {
    let mut catalog = ServiceCatalog::default();
    catalog.insert(
        "appdynamics",
        vec![
            full_binding("appdynamics-a"),
            BindingEntry::new("appdynamics-b").with_credential("host-name", "other.example.com"),
        ],
    );
    let reporter = RecordingReporter::default();

    for _ in 0..3 {
        let outcome = resolve_configuration(&catalog, &metadata(), &reporter);
        let config = outcome.configuration().expect("configured");
        assert_eq!(config.get(VAR_CONTROLLER_HOST), Some("ctrl.example.com"));
    }
    assert!(reporter.saw("Multiple AppDynamics services found (2)"));
}

#[test]
fn test_typed_binding_outranks_user_provided_candidates() {
    let mut catalog = ServiceCatalog::default();
    catalog.insert("appdynamics", vec![full_binding("appdynamics-1")]);
    catalog.insert(
        USER_PROVIDED_KEY,
        vec![
            BindingEntry::new("my-appdynamics")
                .with_credential("application-name", "ignored")
                .with_credential("host-name", "ignored.example.com"),
        ],
    );
    let reporter = RecordingReporter::default();

    let outcome = resolve_configuration(&catalog, &metadata(), &reporter);
    let config = outcome.configuration().expect("configured");
    assert_eq!(config.get(VAR_CONTROLLER_HOST), Some("ctrl.example.com"));
    assert_eq!(config.get(VAR_APP), Some("prod:svc"));
}

#[test]
fn test_non_matching_user_provided_names_are_never_selected() {
    let mut catalog = ServiceCatalog::default();
    catalog.insert(
        USER_PROVIDED_KEY,
        vec![
            BindingEntry::new("my-database").with_credential("host-name", "db.example.com"),
            BindingEntry::new("my-appdynamics").with_credential("host-name", "ctrl.example.com"),
        ],
    );
    let reporter = RecordingReporter::default();

    let outcome = resolve_configuration(&catalog, &metadata(), &reporter);
    let config = outcome.configuration().expect("configured");
    assert_eq!(config.get(VAR_CONTROLLER_HOST), Some("ctrl.example.com"));
}

#[test]
fn test_binding_with_empty_credentials_still_configures_with_defaults() {
    let mut catalog = ServiceCatalog::default();
    catalog.insert("appdynamics", vec![BindingEntry::new("appdynamics-bare")]);
    let reporter = RecordingReporter::default();

    let outcome = resolve_configuration(&catalog, &metadata(), &reporter);
    let config = outcome.configuration().expect("configured");

    assert!(config.binding_detected());
    assert_eq!(config.get(VAR_HOST), Some("packages.appdynamics.com"));
    assert_eq!(config.get(VAR_CONTROLLER_HOST), None);
    // Identity is still synthesized for a typed binding.
    assert_eq!(config.get(VAR_APP), Some("prod:svc"));
}

#[test]
fn test_missing_metadata_degrades_identity_to_empty_fields() {
    let mut catalog = ServiceCatalog::default();
    catalog.insert("appdynamics", vec![full_binding("appdynamics-1")]);
    let reporter = RecordingReporter::default();

    let outcome =
        resolve_configuration(&catalog, &ApplicationMetadata::default(), &reporter);
    let config = outcome.configuration().expect("configured");
    assert_eq!(config.get(VAR_APP), Some(""));
    assert_eq!(config.get(VAR_TIER), Some(""));
    assert_eq!(config.get(VAR_NODE), Some(""));
}

#[test]
fn test_coarse_gate_match_without_binding_yields_defaults_only() {
    // The literal appears in a credential value, so the gate opens, but no
    // structural binding matches — the record must still be well-formed.
    let mut catalog = ServiceCatalog::default();
    catalog.insert(
        "syslog",
        vec![BindingEntry::new("drain").with_credential("url", "https://appdynamics.example.com")],
    );
    let reporter = RecordingReporter::default();

    let outcome = resolve_configuration(&catalog, &metadata(), &reporter);
    let config = outcome.configuration().expect("configured");
    assert!(!config.binding_detected());
    assert_eq!(config.get(VAR_HOST), Some("packages.appdynamics.com"));
    assert_eq!(config.get(VAR_CONTROLLER_HOST), None);
    assert_eq!(config.get(VAR_APP), None);
    assert!(reporter.saw("no binding matched"));
}
