//! Interpreter discovery via `php-config`.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, RuntimeProbe};

/// Location of the staged interpreter's config tool.
pub const PHP_CONFIG_BIN: &str = "/home/vcap/app/php/bin/php-config";

/// `RuntimeProbe` implementation that shells out to `php-config` through a
/// `CommandRunner`. Generic over the runner for test doubles.
pub struct PhpConfigProbe<R: CommandRunner> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> PhpConfigProbe<R> {
    /// Probe using the staged interpreter's `php-config`.
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self::with_program(runner, PHP_CONFIG_BIN)
    }

    /// Probe using an explicit `php-config` path (used in tests).
    #[must_use]
    pub fn with_program(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    async fn query(&self, flag: &str) -> Result<String> {
        let output = self
            .runner
            .run(&self.program, &[flag])
            .await
            .with_context(|| format!("failed to run {}", self.program))?;
        if !output.status.success() {
            anyhow::bail!("{} {flag} exited nonzero", self.program);
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl<R: CommandRunner> RuntimeProbe for PhpConfigProbe<R> {
    async fn php_version(&self) -> Result<String> {
        let raw = self.query("--version").await?;
        // install.sh expects major.minor only.
        Ok(raw.split('.').take(2).collect::<Vec<_>>().join("."))
    }

    async fn extension_dir(&self) -> Result<String> {
        let raw = self.query("--extension-dir").await?;
        // Staging paths move from /tmp/staged to /home/vcap at launch.
        Ok(raw.replacen("/tmp/staged", "/home/vcap", 1))
    }
}
