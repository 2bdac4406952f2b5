//! Typed diagnostics raised — and recovered — during resolution.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`, or
//! `crate::application`. Nothing here aborts a cycle: every variant is
//! reported as a warning and resolution degrades around it.

use thiserror::Error;

/// Non-fatal conditions observed during an activation cycle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolutionWarning {
    #[error("Multiple AppDynamics services found ({count}), using credentials from the first one.")]
    MultipleTypedBindings { count: usize },

    #[error("VCAP_SERVICES could not be parsed, treating the service catalog as empty: {detail}")]
    MalformedCatalog { detail: String },

    #[error("VCAP_APPLICATION could not be parsed, identity fields will use empty defaults: {detail}")]
    MalformedMetadata { detail: String },

    #[error("php-config probe failed, deferring runtime discovery to launch time: {detail}")]
    ProbeFailed { detail: String },
}
