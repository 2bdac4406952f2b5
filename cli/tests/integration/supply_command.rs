//! End-to-end tests for `appdx supply`.
//!
//! The package helper is swapped for `true`/`false` so no real download
//! happens; the install step's success and failure paths are still
//! exercised through a real child process.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn appdx() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("appdx"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("VCAP_SERVICES");
    cmd.env_remove("VCAP_APPLICATION");
    cmd.env_remove("APPD_PACKAGE_INSTALLER");
    cmd
}

const TYPED_CATALOG: &str = r#"{"appdynamics":[{"name":"appdynamics-1","credentials":{"host-name":"ctrl.example.com","port":443,"account-name":"acct1","account-accesss-key":"key1","ssl-enabled":true}}]}"#;
const METADATA: &str = r#"{"space_name":"prod","application_name":"svc","instance_index":0}"#;

#[test]
fn test_supply_without_binding_is_silently_inert() {
    appdx()
        .args(["supply", "--installer", "false"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_supply_with_binding_installs_and_summarizes() {
    appdx()
        .args(["supply", "--installer", "true"])
        .env("VCAP_SERVICES", TYPED_CATALOG)
        .env("VCAP_APPLICATION", METADATA)
        .assert()
        .success()
        .stderr(predicate::str::contains("AppDynamics service detected"))
        .stderr(predicate::str::contains("AppDynamics package installed"))
        .stdout(predicate::str::contains("AppDynamics agent wiring ready."))
        .stdout(predicate::str::contains("ctrl.example.com"));
}

#[test]
fn test_supply_install_failure_is_surfaced_with_nonzero_exit() {
    appdx()
        .args(["supply", "--installer", "false"])
        .env("VCAP_SERVICES", TYPED_CATALOG)
        .env("VCAP_APPLICATION", METADATA)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "installing the AppDynamics agent package",
        ));
}

#[test]
fn test_supply_installer_program_from_environment() {
    appdx()
        .arg("supply")
        .env("APPD_PACKAGE_INSTALLER", "true")
        .env("VCAP_SERVICES", TYPED_CATALOG)
        .env("VCAP_APPLICATION", METADATA)
        .assert()
        .success();
}

#[test]
fn test_supply_json_reports_full_wiring() {
    let output = appdx()
        .args(["supply", "--quiet", "--json", "--installer", "true"])
        .env("VCAP_SERVICES", TYPED_CATALOG)
        .env("VCAP_APPLICATION", METADATA)
        .output()
        .expect("run appdx supply");
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout must be JSON");
    assert_eq!(parsed["installed"], true);
    assert_eq!(
        parsed["environment"]["APPD_CONF_CONTROLLER_HOST"],
        "ctrl.example.com"
    );
    assert_eq!(parsed["services"][0]["name"], "httpd");
    assert!(
        parsed["preprocess"]
            .as_array()
            .expect("preprocess array")
            .iter()
            .any(|line| {
                line["program"]
                    .as_str()
                    .is_some_and(|program| program.ends_with("install.sh"))
            })
    );
}
