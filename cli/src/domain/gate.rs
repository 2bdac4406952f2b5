//! Activation gate — is an AppDynamics service bound at all?

use std::sync::LazyLock;

use appdx_common::ServiceCatalog;
use regex::Regex;

/// Service-type key under which first-class AppDynamics bindings appear.
pub const SERVICE_TYPE_KEY: &str = "appdynamics";

/// Pattern identifying an AppDynamics service, with or without the
/// separating hyphen. Matching is case-sensitive.
pub static SERVICE_FILTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("app[-]?dynamics").expect("valid regex"));

/// Returns true when anything in the catalog mentions an AppDynamics
/// service.
///
/// This is a coarse presence check over the serialized catalog, not a
/// structural lookup — a user-provided binding named `my-app-dynamics`
/// counts just as much as a first-class one. The structural selection
/// happens later in the pipeline; the gate only decides whether running it
/// is worthwhile. An empty catalog never activates.
#[must_use]
pub fn should_activate(catalog: &ServiceCatalog) -> bool {
    serde_json::to_string(catalog)
        .is_ok_and(|serialized| SERVICE_FILTER.is_match(&serialized))
}
