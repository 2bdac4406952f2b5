//! Emitted wiring — process-management directives, the service
//! environment, and the preprocess command sequence handed to the staging
//! environment.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::resolved::{
    ResolvedConfiguration, VAR_ACCESS_KEY, VAR_ACCOUNT_NAME, VAR_APP, VAR_CONTROLLER_HOST,
    VAR_CONTROLLER_PORT, VAR_NODE, VAR_SSL_ENABLED, VAR_TIER,
};

// ── Staging layout ───────────────────────────────────────────────────────────

const APP_ROOT: &str = "/home/vcap/app";
const AGENT_ROOT: &str = "/home/vcap/app/appdynamics/appdynamics-php-agent";
const AGENT_LOG_DIR: &str = "/home/vcap/app/appdynamics/appdynamics-php-agent/logs";
const AGENT_INSTALL_SCRIPT: &str =
    "/home/vcap/app/appdynamics/appdynamics-php-agent/install.sh";
const AGENT_INI_DIR: &str = "/home/vcap/app/appdynamics/phpini";
const AGENT_INI_FILE: &str = "/home/vcap/app/appdynamics/phpini/appdynamics_agent.ini";
const PHP_BIN_DIR: &str = "/home/vcap/app/php/bin";
const PHP_INI_FILE: &str = "/home/vcap/app/php/etc/php.ini";

/// Variable name for the discovered interpreter version.
pub const VAR_PHP_VERSION: &str = "PHP_VERSION";
/// Variable name for the discovered extension directory.
pub const VAR_PHP_EXT_DIR: &str = "PHP_EXT_DIR";

// ── Runtime discovery ────────────────────────────────────────────────────────

/// Interpreter facts used to parameterize the installer invocation.
///
/// The defaults are deferred shell substitutions, so an emitted script
/// still resolves them at launch time when probing was impossible during
/// staging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeDiscovery {
    pub php_version: String,
    pub extension_dir: String,
}

/// Launch-time fallback for the interpreter version (major.minor).
pub const DEFERRED_PHP_VERSION: &str =
    "$(/home/vcap/app/php/bin/php-config --version | cut -d '.' -f 1,2)";

/// Launch-time fallback for the extension directory. Staging paths move
/// from /tmp/staged to /home/vcap once the droplet runs.
pub const DEFERRED_PHP_EXT_DIR: &str =
    "$(/home/vcap/app/php/bin/php-config --extension-dir | sed 's|/tmp/staged|/home/vcap|')";

impl Default for RuntimeDiscovery {
    fn default() -> Self {
        Self {
            php_version: DEFERRED_PHP_VERSION.to_string(),
            extension_dir: DEFERRED_PHP_EXT_DIR.to_string(),
        }
    }
}

// ── Command model ────────────────────────────────────────────────────────────

/// One shell command as a structured token list.
///
/// Rendering joins the program and arguments with single spaces; tokens are
/// emitted verbatim, so anything needing shell quoting must already carry
/// its quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Build a command from string tokens.
    #[must_use]
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// Render as one shell line.
    #[must_use]
    pub fn render(&self) -> String {
        if self.args.is_empty() {
            return self.program.clone();
        }
        format!("{} {}", self.program, self.args.join(" "))
    }
}

/// A named process-management directive for the staging environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCommand {
    pub name: String,
    pub command: CommandLine,
}

// ── Emitted wiring ───────────────────────────────────────────────────────────

/// Web-server restart directives. Static — independent of credentials.
#[must_use]
pub fn service_commands() -> Vec<ServiceCommand> {
    vec![ServiceCommand {
        name: "httpd".to_string(),
        command: CommandLine::new(
            "$HOME/httpd/bin/apachectl",
            &[
                "-f",
                "\"$HOME/httpd/conf/httpd.conf\"",
                "-k",
                "restart",
                "-DFOREGROUND",
            ],
        ),
    }]
}

/// The environment handed to the staging harness: every resolved variable
/// plus the discovered interpreter version.
#[must_use]
pub fn service_environment(
    config: &ResolvedConfiguration,
    runtime: &RuntimeDiscovery,
) -> BTreeMap<String, String> {
    let mut environment: BTreeMap<String, String> = config
        .vars()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    environment.insert(VAR_PHP_VERSION.to_string(), runtime.php_version.clone());
    environment
}

/// Build the ordered preprocess sequence.
///
/// Empty when no binding was detected — an unbound application gets no
/// agent wiring at all. Otherwise: permission fixups, environment exports
/// drawn from the resolved configuration, the native installer invocation,
/// and the ini append.
#[must_use]
pub fn preprocess_commands(
    config: &ResolvedConfiguration,
    runtime: &RuntimeDiscovery,
) -> Vec<CommandLine> {
    if !config.binding_detected() {
        return Vec::new();
    }
    let mut lines = vec![
        CommandLine::new("chmod", &["-R", "755", APP_ROOT]),
        CommandLine::new("chmod", &["-R", "777", AGENT_LOG_DIR]),
        export(VAR_PHP_VERSION, &runtime.php_version),
        export(VAR_PHP_EXT_DIR, &runtime.extension_dir),
    ];
    for name in [
        VAR_CONTROLLER_HOST,
        VAR_CONTROLLER_PORT,
        VAR_ACCOUNT_NAME,
        VAR_ACCESS_KEY,
        VAR_SSL_ENABLED,
        VAR_APP,
        VAR_TIER,
        VAR_NODE,
    ] {
        if let Some(value) = config.get(name) {
            lines.push(export(name, value));
        }
    }
    lines.push(install_command(config, runtime));
    lines.push(CommandLine::new(
        "cat",
        &[AGENT_INI_FILE, ">>", PHP_INI_FILE],
    ));
    lines
}

fn export(name: &str, value: &str) -> CommandLine {
    CommandLine {
        program: "export".to_string(),
        args: vec![format!("{name}={value}")],
    }
}

/// The native installer invocation. The positional contract is fixed:
/// `[-s] -a <account>@<key> -e <ext-dir> -p <php-bin> -i <ini-dir>
/// -v <version> --ignore-permissions <host> <port> <app> <tier> <node>`.
fn install_command(config: &ResolvedConfiguration, runtime: &RuntimeDiscovery) -> CommandLine {
    let value = |name: &str| config.get(name).unwrap_or_default().to_string();
    let mut args = Vec::new();
    if config.get(VAR_SSL_ENABLED) == Some("true") {
        args.push("-s".to_string());
    }
    args.push("-a".to_string());
    args.push(format!(
        "{}@{}",
        value(VAR_ACCOUNT_NAME),
        value(VAR_ACCESS_KEY)
    ));
    args.push("-e".to_string());
    args.push(runtime.extension_dir.clone());
    args.push("-p".to_string());
    args.push(PHP_BIN_DIR.to_string());
    args.push("-i".to_string());
    args.push(AGENT_INI_DIR.to_string());
    args.push("-v".to_string());
    args.push(runtime.php_version.clone());
    args.push("--ignore-permissions".to_string());
    for name in [VAR_CONTROLLER_HOST, VAR_CONTROLLER_PORT, VAR_APP, VAR_TIER, VAR_NODE] {
        args.push(value(name));
    }
    CommandLine {
        program: AGENT_INSTALL_SCRIPT.to_string(),
        args,
    }
}
