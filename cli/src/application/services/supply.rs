//! The supply use-case: resolve, install the agent package, emit wiring.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use appdx_common::{ApplicationMetadata, ServiceCatalog};

use crate::application::ports::{PackageInstaller, ProgressReporter, RuntimeProbe};
use crate::application::services::resolve::{ResolutionOutcome, resolve_configuration};
use crate::domain::commands::{
    CommandLine, RuntimeDiscovery, ServiceCommand, preprocess_commands, service_commands,
    service_environment,
};
use crate::domain::error::ResolutionWarning;
use crate::domain::resolved::ResolvedConfiguration;

/// The agent package key handed to the package installer.
pub const PACKAGE_KEY: &str = "APPDYNAMICS";

/// Everything one supply cycle produced for the staging harness.
#[derive(Debug, Clone, PartialEq)]
pub enum SupplyOutcome {
    /// No matching service; the extension stayed inert.
    Skipped,
    /// The package was installed and the wiring assembled.
    Installed {
        configuration: ResolvedConfiguration,
        environment: BTreeMap<String, String>,
        services: Vec<ServiceCommand>,
        preprocess: Vec<CommandLine>,
    },
}

/// Run one full supply cycle.
///
/// # Errors
///
/// Returns an error only when the external package install fails; that
/// failure is surfaced unmodified. Every resolution-internal condition
/// degrades with a warning instead.
pub async fn supply_agent(
    catalog: &ServiceCatalog,
    metadata: &ApplicationMetadata,
    installer: &impl PackageInstaller,
    probe: &impl RuntimeProbe,
    reporter: &impl ProgressReporter,
) -> Result<SupplyOutcome> {
    let configuration = match resolve_configuration(catalog, metadata, reporter) {
        ResolutionOutcome::NotApplicable => return Ok(SupplyOutcome::Skipped),
        ResolutionOutcome::Configured(configuration) => configuration,
    };

    reporter.step("Installing AppDynamics");
    installer
        .install(PACKAGE_KEY)
        .await
        .context("installing the AppDynamics agent package")?;
    reporter.success("AppDynamics package installed");

    let runtime = discover_runtime(probe, reporter).await;
    let environment = service_environment(&configuration, &runtime);
    let services = service_commands();
    let preprocess = preprocess_commands(&configuration, &runtime);
    Ok(SupplyOutcome::Installed {
        configuration,
        environment,
        services,
        preprocess,
    })
}

/// Probe the interpreter, falling back to launch-time substitution for
/// whichever fact the probe could not supply.
pub async fn discover_runtime(
    probe: &impl RuntimeProbe,
    reporter: &impl ProgressReporter,
) -> RuntimeDiscovery {
    let mut runtime = RuntimeDiscovery::default();
    match probe.php_version().await {
        Ok(version) => runtime.php_version = version,
        Err(err) => reporter.warn(
            &ResolutionWarning::ProbeFailed {
                detail: format!("{err:#}"),
            }
            .to_string(),
        ),
    }
    match probe.extension_dir().await {
        Ok(dir) => runtime.extension_dir = dir,
        Err(err) => reporter.warn(
            &ResolutionWarning::ProbeFailed {
                detail: format!("{err:#}"),
            }
            .to_string(),
        ),
    }
    runtime
}
