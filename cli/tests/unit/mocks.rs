//! Hand-rolled port doubles shared across unit tests.

#![allow(clippy::expect_used)]

use std::sync::Mutex;

use anyhow::Result;
use appdx_cli::application::ports::{PackageInstaller, ProgressReporter, RuntimeProbe};

/// Reporter double that records every emitted message.
#[derive(Default)]
pub struct RecordingReporter {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn saw(&self, needle: &str) -> bool {
        self.messages
            .lock()
            .expect("lock")
            .iter()
            .any(|message| message.contains(needle))
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.messages
            .lock()
            .expect("lock")
            .push(format!("step: {message}"));
    }

    fn success(&self, message: &str) {
        self.messages
            .lock()
            .expect("lock")
            .push(format!("success: {message}"));
    }

    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .expect("lock")
            .push(format!("warn: {message}"));
    }
}

/// Installer double that records package keys and optionally fails.
pub struct StubInstaller {
    fail: bool,
    pub installed: Mutex<Vec<String>>,
}

impl StubInstaller {
    pub fn ok() -> Self {
        Self {
            fail: false,
            installed: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            installed: Mutex::new(Vec::new()),
        }
    }

    pub fn install_count(&self) -> usize {
        self.installed.lock().expect("lock").len()
    }
}

impl PackageInstaller for StubInstaller {
    async fn install(&self, package_key: &str) -> Result<()> {
        if self.fail {
            anyhow::bail!("package helper exited nonzero");
        }
        self.installed
            .lock()
            .expect("lock")
            .push(package_key.to_string());
        Ok(())
    }
}

/// Probe double with canned results; `None` simulates probe failure.
pub struct StubProbe {
    pub version: Option<&'static str>,
    pub extension_dir: Option<&'static str>,
}

impl StubProbe {
    pub fn available() -> Self {
        Self {
            version: Some("7.4"),
            extension_dir: Some("/home/vcap/app/php/lib/php/extensions"),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            version: None,
            extension_dir: None,
        }
    }
}

impl RuntimeProbe for StubProbe {
    async fn php_version(&self) -> Result<String> {
        self.version
            .map(ToString::to_string)
            .ok_or_else(|| anyhow::anyhow!("php-config not found"))
    }

    async fn extension_dir(&self) -> Result<String> {
        self.extension_dir
            .map(ToString::to_string)
            .ok_or_else(|| anyhow::anyhow!("php-config not found"))
    }
}
