//! Default configuration and the resolved-configuration merge.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::credentials::ControllerCredentials;
use crate::domain::identity::IdentityTriplet;

// ── Configuration variable names ─────────────────────────────────────────────

pub const VAR_HOST: &str = "APPDYNAMICS_HOST";
pub const VAR_VERSION: &str = "APPDYNAMICS_VERSION";
pub const VAR_PACKAGE: &str = "APPDYNAMICS_PACKAGE";
pub const VAR_DOWNLOAD_URL: &str = "APPDYNAMICS_DOWNLOAD_URL";

pub const VAR_CONTROLLER_HOST: &str = "APPD_CONF_CONTROLLER_HOST";
pub const VAR_CONTROLLER_PORT: &str = "APPD_CONF_CONTROLLER_PORT";
pub const VAR_ACCOUNT_NAME: &str = "APPD_CONF_ACCOUNT_NAME";
pub const VAR_ACCESS_KEY: &str = "APPD_CONF_ACCESS_KEY";
pub const VAR_SSL_ENABLED: &str = "APPD_CONF_SSL_ENABLED";
pub const VAR_APP: &str = "APPD_CONF_APP";
pub const VAR_TIER: &str = "APPD_CONF_TIER";
pub const VAR_NODE: &str = "APPD_CONF_NODE";

/// Agent package download defaults. Always present, independent of binding
/// state; the `{...}` placeholders are expanded by the package installer.
#[must_use]
pub fn defaults() -> [(&'static str, &'static str); 4] {
    [
        (VAR_HOST, "packages.appdynamics.com"),
        (VAR_VERSION, "4.2.14.0"),
        (
            VAR_PACKAGE,
            "appdynamics-php-agent-x64-linux-{APPDYNAMICS_VERSION}.tar.bz2",
        ),
        (
            VAR_DOWNLOAD_URL,
            "https://{APPDYNAMICS_HOST}/php/{APPDYNAMICS_VERSION}/{APPDYNAMICS_PACKAGE}",
        ),
    ]
}

/// The final merge of defaults, controller credentials, and identity —
/// the one artifact handed to the install/activation step. Immutable;
/// well-formed even when nothing was bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfiguration {
    vars: BTreeMap<String, String>,
    binding_detected: bool,
}

impl ResolvedConfiguration {
    /// Merge defaults, credentials, and identity into one record.
    ///
    /// Defaults go in first and computed entries overlay them, so a default
    /// can never shadow a present credential or identity field. Absent
    /// source fields produce absent entries — never a substituted default.
    #[must_use]
    pub fn assemble(
        defaults: &[(&str, &str)],
        credentials: Option<&ControllerCredentials>,
        identity: Option<&IdentityTriplet>,
    ) -> Self {
        let mut vars: BTreeMap<String, String> = defaults
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect();
        if let Some(credentials) = credentials {
            let fields = [
                (VAR_CONTROLLER_HOST, &credentials.host_name),
                (VAR_CONTROLLER_PORT, &credentials.port),
                (VAR_ACCOUNT_NAME, &credentials.account_name),
                (VAR_ACCESS_KEY, &credentials.account_access_key),
                (VAR_SSL_ENABLED, &credentials.ssl_enabled),
            ];
            for (name, field) in fields {
                if let Some(value) = field {
                    vars.insert(name.to_string(), value.to_string());
                }
            }
        }
        if let Some(identity) = identity {
            vars.insert(VAR_APP.to_string(), identity.app_name.clone());
            vars.insert(VAR_TIER.to_string(), identity.tier_name.clone());
            vars.insert(VAR_NODE.to_string(), identity.node_name.clone());
        }
        Self {
            vars,
            binding_detected: credentials.is_some(),
        }
    }

    /// Value of one configuration variable, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// True when a binding fed this configuration (as opposed to a
    /// defaults-only record).
    #[must_use]
    pub fn binding_detected(&self) -> bool {
        self.binding_detected
    }

    /// All variables in stable (sorted) order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
