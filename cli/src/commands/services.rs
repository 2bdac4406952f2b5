//! `appdx commands` — print process-management directives.
//!
//! The directives are static: the web server is restarted in the
//! foreground whether or not a binding exists.

use anyhow::Result;

use crate::app::AppContext;
use crate::domain::commands::service_commands;

/// Run `appdx commands`.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn run(app: &AppContext) -> Result<()> {
    let services = service_commands();
    if app.json {
        println!("{}", serde_json::to_string_pretty(&services)?);
    } else {
        for service in &services {
            println!("{}: {}", service.name, service.command.render());
        }
    }
    Ok(())
}
