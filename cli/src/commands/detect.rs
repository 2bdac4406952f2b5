//! `appdx detect` — is an AppDynamics service bound at all?
//!
//! Buildpack detect contract: print the detection line and exit 0 when a
//! matching service is present, exit 1 silently otherwise.

use std::process::ExitCode;

use crate::app::AppContext;
use crate::domain::gate::should_activate;
use crate::infra::env::read_catalog;

/// Run `appdx detect`.
#[must_use]
pub fn run(app: &AppContext) -> ExitCode {
    let reporter = app.reporter();
    let catalog = read_catalog(&reporter);
    if should_activate(&catalog) {
        if app.json {
            println!(r#"{{"detected":true}}"#);
        } else if !app.output.quiet {
            println!("AppDynamics service detected");
        }
        ExitCode::SUCCESS
    } else {
        if app.json {
            println!(r#"{{"detected":false}}"#);
        }
        ExitCode::from(1)
    }
}
