//! One activation cycle: gate → read → select → extract → derive → assemble.

use appdx_common::{ApplicationMetadata, ServiceCatalog};

use crate::application::ports::ProgressReporter;
use crate::domain::credentials::ControllerCredentials;
use crate::domain::error::ResolutionWarning;
use crate::domain::gate::{self, SERVICE_FILTER, SERVICE_TYPE_KEY};
use crate::domain::identity::derive_identity;
use crate::domain::resolved::{ResolvedConfiguration, defaults};
use crate::domain::select::{SelectedBinding, select_binding};

/// Outcome of one activation cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    /// No matching service anywhere in the catalog; nothing to configure.
    NotApplicable,
    /// A complete configuration record (defaults-only when the coarse gate
    /// matched but no structural binding did).
    Configured(ResolvedConfiguration),
}

impl ResolutionOutcome {
    /// The configuration, when one was produced.
    #[must_use]
    pub fn configuration(&self) -> Option<&ResolvedConfiguration> {
        match self {
            Self::NotApplicable => None,
            Self::Configured(configuration) => Some(configuration),
        }
    }
}

/// Run the resolution pipeline once over freshly read inputs.
///
/// Inputs are borrowed and read-only; every derived record is built exactly
/// once per cycle and owned by the caller. Extraction and derivation are
/// unconditional stages — there is no optional "load" step to forget.
/// Degradations surface through `reporter` as warnings; nothing here fails.
pub fn resolve_configuration(
    catalog: &ServiceCatalog,
    metadata: &ApplicationMetadata,
    reporter: &impl ProgressReporter,
) -> ResolutionOutcome {
    if !gate::should_activate(catalog) {
        return ResolutionOutcome::NotApplicable;
    }
    reporter.step("AppDynamics service detected");

    let typed = catalog.typed_bindings(SERVICE_TYPE_KEY);
    if typed.len() > 1 {
        reporter.warn(
            &ResolutionWarning::MultipleTypedBindings { count: typed.len() }.to_string(),
        );
    }
    let user_provided = catalog.user_provided_candidates(&SERVICE_FILTER);
    let selected = select_binding(typed, &user_provided);
    match selected {
        Some(SelectedBinding::Typed(binding)) => {
            reporter.step(&format!("Using service binding '{}'", binding.name));
        }
        Some(SelectedBinding::UserProvided(binding)) => {
            reporter.step(&format!("Using user-provided service '{}'", binding.name));
        }
        None => {
            reporter.warn("Catalog mentions AppDynamics but no binding matched; emitting defaults only");
        }
    }

    let credentials = selected
        .as_ref()
        .map(|selection| ControllerCredentials::from_binding(selection.entry()));
    let identity = derive_identity(selected.as_ref(), metadata);
    let configuration =
        ResolvedConfiguration::assemble(&defaults(), credentials.as_ref(), identity.as_ref());
    ResolutionOutcome::Configured(configuration)
}
