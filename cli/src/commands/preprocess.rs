//! `appdx preprocess` — print the preprocess command sequence.
//!
//! One shell line per command (or JSON token lists). Empty when no binding
//! was detected.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::resolve::resolve_configuration;
use crate::application::services::supply::discover_runtime;
use crate::domain::commands::{CommandLine, preprocess_commands};
use crate::infra::env::{read_catalog, read_metadata};

/// Run `appdx preprocess`.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let reporter = app.reporter();
    let catalog = read_catalog(&reporter);
    let metadata = read_metadata(&reporter);
    let outcome = resolve_configuration(&catalog, &metadata, &reporter);
    let lines: Vec<CommandLine> = match outcome.configuration() {
        None => Vec::new(),
        Some(configuration) => {
            let runtime = discover_runtime(&app.probe(), &reporter).await;
            preprocess_commands(configuration, &runtime)
        }
    };

    if app.json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        for line in &lines {
            println!("{}", line.render());
        }
    }
    Ok(())
}
