//! Controller credential extraction from the selected binding.

use appdx_common::{BindingEntry, CredentialValue};
use serde::Serialize;

/// Credential field names as they appear on an AppDynamics binding.
/// `account-accesss-key` carries the upstream triple-s; bindings in the
/// wild use that exact spelling, so it must not be corrected here.
pub const FIELD_HOST_NAME: &str = "host-name";
pub const FIELD_PORT: &str = "port";
pub const FIELD_ACCOUNT_NAME: &str = "account-name";
pub const FIELD_ACCOUNT_ACCESS_KEY: &str = "account-accesss-key";
pub const FIELD_SSL_ENABLED: &str = "ssl-enabled";

/// Controller connection credentials read off one binding.
///
/// Every field is optional: a binding may omit any of them and extraction
/// still succeeds. Values stay opaque — a port given as text stays text
/// until something downstream interprets it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ControllerCredentials {
    pub host_name: Option<CredentialValue>,
    pub port: Option<CredentialValue>,
    pub account_name: Option<CredentialValue>,
    pub account_access_key: Option<CredentialValue>,
    pub ssl_enabled: Option<CredentialValue>,
}

impl ControllerCredentials {
    /// Extract the controller credentials. Total: missing fields become
    /// `None`, an empty credentials map yields the all-`None` record.
    #[must_use]
    pub fn from_binding(binding: &BindingEntry) -> Self {
        Self {
            host_name: binding.credential(FIELD_HOST_NAME).cloned(),
            port: binding.credential(FIELD_PORT).cloned(),
            account_name: binding.credential(FIELD_ACCOUNT_NAME).cloned(),
            account_access_key: binding.credential(FIELD_ACCOUNT_ACCESS_KEY).cloned(),
            ssl_enabled: binding.credential(FIELD_SSL_ENABLED).cloned(),
        }
    }
}
