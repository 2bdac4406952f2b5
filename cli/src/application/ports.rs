//! Port trait definitions for the application layer.
//!
//! Ports are the interfaces infrastructure must fulfill. This file imports
//! only from the standard library and `anyhow` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::process::Output;
use std::time::Duration;

use anyhow::Result;

/// Downloads and unpacks one named agent package into the staging area.
///
/// Package retrieval and caching live outside this crate; production routes
/// the call to the buildpack's package helper, tests use recording doubles.
#[allow(async_fn_in_trait)]
pub trait PackageInstaller {
    /// Install the package registered under `package_key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the helper cannot be spawned or exits nonzero.
    /// Callers must surface this failure, not swallow it.
    async fn install(&self, package_key: &str) -> Result<()>;
}

/// Discovers interpreter facts for the staged application.
#[allow(async_fn_in_trait)]
pub trait RuntimeProbe {
    /// Interpreter version as `major.minor`.
    async fn php_version(&self) -> Result<String>;
    /// Directory the interpreter loads native extensions from, rewritten
    /// to its launch-time location.
    async fn extension_dir(&self) -> Result<String>;
}

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output, using the instance's default
    /// timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds
    /// `timeout`. On timeout, the child process must be killed (not left
    /// orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
}

/// Abstracts progress reporting so services can emit diagnostics without
/// depending on the presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
