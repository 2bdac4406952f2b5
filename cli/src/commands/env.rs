//! `appdx env` — print the service environment.
//!
//! Emits `KEY=VALUE` lines (or JSON) for the resolved configuration plus
//! the discovered interpreter version. Prints nothing when no matching
//! service is bound. Progress and warnings go to stderr, so stdout can be
//! consumed directly by the staging harness.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::resolve::resolve_configuration;
use crate::application::services::supply::discover_runtime;
use crate::domain::commands::service_environment;
use crate::infra::env::{read_catalog, read_metadata};

/// Run `appdx env`.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let reporter = app.reporter();
    let catalog = read_catalog(&reporter);
    let metadata = read_metadata(&reporter);
    let outcome = resolve_configuration(&catalog, &metadata, &reporter);
    let Some(configuration) = outcome.configuration() else {
        if app.json {
            println!("{{}}");
        }
        return Ok(());
    };

    let runtime = discover_runtime(&app.probe(), &reporter).await;
    let environment = service_environment(configuration, &runtime);
    if app.json {
        println!("{}", serde_json::to_string_pretty(&environment)?);
    } else {
        for (name, value) in &environment {
            println!("{name}={value}");
        }
    }
    Ok(())
}
