//! `TerminalReporter` — presentation-layer implementation of
//! `ProgressReporter`.
//!
//! Progress events go to stderr: the extension's stdout is consumed by the
//! staging harness, and resolution diagnostics must never leak into it.

use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::OutputContext;

/// Progress reporter bound to one invocation's output context.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    fn emit(&self, prefix: impl std::fmt::Display, message: &str) {
        if !self.ctx.quiet {
            eprintln!("  {prefix} {message}");
        }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        self.emit("→".style(self.ctx.styles.info), message);
    }

    fn success(&self, message: &str) {
        self.emit("✓".style(self.ctx.styles.success), message);
    }

    fn warn(&self, message: &str) {
        self.emit("!".style(self.ctx.styles.warning), message);
    }
}
