//! Application context — unified state passed to every command handler.
//!
//! Constructed once per invocation and dropped with it: resolution state
//! never outlives an activation cycle and is never shared across cycles.

use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::installer::{CommandPackageInstaller, DEFAULT_INSTALL_TIMEOUT};
use crate::infra::probe::PhpConfigProbe;
use crate::output::{OutputContext, TerminalReporter};

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Whether to render machine-readable JSON.
    pub json: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool, json: bool) -> Self {
        Self {
            output: OutputContext::new(no_color, quiet),
            json,
        }
    }

    /// Progress reporter bound to this invocation's output context.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Interpreter probe backed by a real command runner.
    #[must_use]
    pub fn probe(&self) -> PhpConfigProbe<TokioCommandRunner> {
        PhpConfigProbe::new(TokioCommandRunner::default())
    }

    /// Package installer invoking `program <KEY>` with the install timeout.
    #[must_use]
    pub fn installer(&self, program: &str) -> CommandPackageInstaller<TokioCommandRunner> {
        CommandPackageInstaller::new(TokioCommandRunner::new(DEFAULT_INSTALL_TIMEOUT), program)
    }
}
