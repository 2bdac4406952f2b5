//! `appdx supply` — run the full activation cycle and install the agent.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::supply::{SupplyOutcome, supply_agent};
use crate::domain::resolved::VAR_CONTROLLER_HOST;
use crate::infra::env::{read_catalog, read_metadata};

/// Arguments for the supply command.
#[derive(Args, Debug)]
pub struct SupplyArgs {
    /// Package helper invoked as `<program> APPDYNAMICS`
    #[arg(
        long,
        env = "APPD_PACKAGE_INSTALLER",
        default_value = "install_package"
    )]
    pub installer: String,
}

/// Run `appdx supply`.
///
/// When no matching service is bound the extension is silently inert: no
/// configuration is emitted, no install is attempted, and the exit code is
/// zero.
///
/// # Errors
///
/// Returns an error when the external package install fails; that failure
/// is surfaced unmodified.
pub async fn run(args: &SupplyArgs, app: &AppContext) -> Result<()> {
    let reporter = app.reporter();
    let catalog = read_catalog(&reporter);
    let metadata = read_metadata(&reporter);
    let installer = app.installer(&args.installer);
    let probe = app.probe();

    let outcome = supply_agent(&catalog, &metadata, &installer, &probe, &reporter).await?;
    match outcome {
        SupplyOutcome::Skipped => {
            if app.json {
                println!(r#"{{"installed":false}}"#);
            }
        }
        SupplyOutcome::Installed {
            configuration,
            environment,
            services,
            preprocess,
        } => {
            if app.json {
                let payload = serde_json::json!({
                    "installed": true,
                    "configuration": configuration,
                    "environment": environment,
                    "services": services,
                    "preprocess": preprocess,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                app.output.success("AppDynamics agent wiring ready.");
                app.output.kv(
                    "Controller",
                    configuration.get(VAR_CONTROLLER_HOST).unwrap_or("(none)"),
                );
                app.output
                    .kv("Environment", &format!("{} variables", environment.len()));
                app.output
                    .kv("Preprocess", &format!("{} commands", preprocess.len()));
                app.output
                    .kv("Services", &format!("{} directives", services.len()));
            }
        }
    }
    Ok(())
}
