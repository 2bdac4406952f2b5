//! Package installer adapter — routes installs through an external helper.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, PackageInstaller};

/// Timeout for the package helper (it downloads and unpacks an archive).
pub const DEFAULT_INSTALL_TIMEOUT: Duration = Duration::from_secs(300);

/// Runs the buildpack's package helper through a `CommandRunner`, passing
/// the package key as the sole argument.
///
/// Generic over the runner so tests can inject doubles without spawning
/// processes.
pub struct CommandPackageInstaller<R: CommandRunner> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> CommandPackageInstaller<R> {
    /// Create an installer that invokes `program <PACKAGE_KEY>`.
    #[must_use]
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }
}

impl<R: CommandRunner> PackageInstaller for CommandPackageInstaller<R> {
    async fn install(&self, package_key: &str) -> Result<()> {
        let output = self
            .runner
            .run_with_timeout(&self.program, &[package_key], DEFAULT_INSTALL_TIMEOUT)
            .await
            .with_context(|| format!("failed to run {}", self.program))?;
        if !output.status.success() {
            anyhow::bail!(
                "{} {package_key} failed: {}",
                self.program,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}
