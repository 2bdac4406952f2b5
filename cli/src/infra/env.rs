//! Environment readers for the staging inputs.
//!
//! `VCAP_SERVICES` and `VCAP_APPLICATION` are read once per invocation and
//! parsed leniently: missing or malformed input degrades to empty values
//! with a warning, never an abort. The parse step is a pure function over
//! the raw text so tests never have to mutate process environment.

use appdx_common::{ApplicationMetadata, ServiceCatalog};

use crate::application::ports::ProgressReporter;
use crate::domain::error::ResolutionWarning;

/// Environment variable carrying the service catalog.
pub const VCAP_SERVICES: &str = "VCAP_SERVICES";
/// Environment variable carrying the application metadata.
pub const VCAP_APPLICATION: &str = "VCAP_APPLICATION";

/// Read and parse the service catalog from the process environment.
pub fn read_catalog(reporter: &impl ProgressReporter) -> ServiceCatalog {
    parse_catalog(std::env::var(VCAP_SERVICES).ok().as_deref(), reporter)
}

/// Read and parse the application metadata from the process environment.
pub fn read_metadata(reporter: &impl ProgressReporter) -> ApplicationMetadata {
    parse_metadata(std::env::var(VCAP_APPLICATION).ok().as_deref(), reporter)
}

/// Parse a raw catalog document. Absent input is an empty catalog;
/// malformed input is an empty catalog plus a warning.
pub fn parse_catalog(raw: Option<&str>, reporter: &impl ProgressReporter) -> ServiceCatalog {
    let Some(raw) = raw else {
        return ServiceCatalog::default();
    };
    match ServiceCatalog::from_json(raw) {
        Ok(catalog) => catalog,
        Err(err) => {
            reporter.warn(
                &ResolutionWarning::MalformedCatalog {
                    detail: err.to_string(),
                }
                .to_string(),
            );
            ServiceCatalog::default()
        }
    }
}

/// Parse a raw metadata document. Absent input is empty metadata;
/// malformed input is empty metadata plus a warning.
pub fn parse_metadata(raw: Option<&str>, reporter: &impl ProgressReporter) -> ApplicationMetadata {
    let Some(raw) = raw else {
        return ApplicationMetadata::default();
    };
    match ApplicationMetadata::from_json(raw) {
        Ok(metadata) => metadata,
        Err(err) => {
            reporter.warn(
                &ResolutionWarning::MalformedMetadata {
                    detail: err.to_string(),
                }
                .to_string(),
            );
            ApplicationMetadata::default()
        }
    }
}
