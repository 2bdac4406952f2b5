//! Application identity derivation — the app/tier/node naming triple.

use appdx_common::{ApplicationMetadata, BindingEntry};
use serde::Serialize;

use crate::domain::select::SelectedBinding;

/// Identity field names on a user-provided binding.
pub const FIELD_APPLICATION_NAME: &str = "application-name";
pub const FIELD_TIER_NAME: &str = "tier-name";
pub const FIELD_NODE_NAME: &str = "node-name";

/// Suffix token for synthesized node names. The instance index is
/// deliberately not folded in; see DESIGN.md.
const NODE_SUFFIX: &str = "node";

/// The naming triple the agent uses to label telemetry. Fully populated
/// once derived: unresolvable fields hold the empty string, never a hole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdentityTriplet {
    pub app_name: String,
    pub tier_name: String,
    pub node_name: String,
}

/// Derive the identity triple for the selected binding.
///
/// A user-provided binding names itself through its own credential fields;
/// a typed binding gets its names synthesized from ambient metadata. With
/// no binding there is no identity to derive. Missing source fields
/// degrade to empty strings — derivation never fails and never blocks
/// installation.
#[must_use]
pub fn derive_identity(
    selected: Option<&SelectedBinding<'_>>,
    metadata: &ApplicationMetadata,
) -> Option<IdentityTriplet> {
    match selected {
        None => None,
        Some(SelectedBinding::UserProvided(binding)) => Some(from_credentials(binding)),
        Some(SelectedBinding::Typed(_)) => Some(from_metadata(metadata)),
    }
}

fn from_credentials(binding: &BindingEntry) -> IdentityTriplet {
    let field = |name: &str| {
        binding
            .credential(name)
            .map(ToString::to_string)
            .unwrap_or_default()
    };
    IdentityTriplet {
        app_name: field(FIELD_APPLICATION_NAME),
        tier_name: field(FIELD_TIER_NAME),
        node_name: field(FIELD_NODE_NAME),
    }
}

fn from_metadata(metadata: &ApplicationMetadata) -> IdentityTriplet {
    let application = metadata.application_name.as_deref();
    IdentityTriplet {
        app_name: match (metadata.space_name.as_deref(), application) {
            (Some(space), Some(name)) => format!("{space}:{name}"),
            _ => String::new(),
        },
        tier_name: application.unwrap_or_default().to_string(),
        node_name: application
            .map(|name| format!("{name}:{NODE_SUFFIX}"))
            .unwrap_or_default(),
    }
}
