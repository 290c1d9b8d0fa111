//! End-to-end tests for the `endurance` binary.

use std::{fs, path::Path};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Sandbox with an install directory holding the templates and an empty
/// project directory to run in.
struct Sandbox {
    _temp: TempDir,
    install: std::path::PathBuf,
    project: std::path::PathBuf,
    config: std::path::PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let install = temp.path().join("install");
        let project = temp.path().join("project");
        let config = temp.path().join("endurance.toml");
        fs::create_dir_all(&install).unwrap();
        fs::create_dir_all(&project).unwrap();
        fs::write(&config, "").unwrap();
        Self {
            _temp: temp,
            install,
            project,
            config,
        }
    }

    fn write(&self, root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn module_template(&self, rel: &str, content: &str) {
        let root = self.install.join("node_modules/endurance-template-module");
        self.write(&root, rel, content);
    }

    fn project_file(&self, rel: &str, content: &str) {
        self.write(&self.project, rel, content);
    }

    fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("endurance");
        cmd.current_dir(&self.project)
            .env("ENDURANCE__TEMPLATES__BASE_DIR", &self.install)
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(&self.config);
        cmd
    }
}

#[test]
fn version_flag() {
    cargo_bin_cmd!("endurance")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag() {
    cargo_bin_cmd!("endurance")
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    cargo_bin_cmd!("endurance")
        .arg("frobnicate")
        .assert()
        .code(2);
}

// ── new-module ────────────────────────────────────────────────────────────────

#[test]
fn new_module_scaffolds_into_modules_dir() {
    let sandbox = Sandbox::new();
    sandbox.module_template("{module-name}/index.js", r#"module.exports = "{module-name}";"#);
    sandbox.module_template("{module-name}.routes.js", "// routes for {module-name}");
    sandbox.module_template("package.json", r#"{"name": "{module-name}"}"#);

    sandbox
        .cmd()
        .args(["new-module", "billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Module \"billing\" created successfully in",
        ))
        .stdout(predicate::str::contains("billing"));

    let module = sandbox.project.join("modules/billing");
    assert_eq!(
        fs::read_to_string(module.join("billing/index.js")).unwrap(),
        r#"module.exports = "billing";"#
    );
    assert_eq!(
        fs::read_to_string(module.join("billing.routes.js")).unwrap(),
        "// routes for billing"
    );
    assert!(!module.join("package.json").exists());
}

#[test]
fn new_module_quiet_prints_nothing() {
    let sandbox = Sandbox::new();
    sandbox.module_template("index.js", "{module-name}");

    sandbox
        .cmd()
        .args(["-q", "new-module", "orders"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(sandbox.project.join("modules/orders/index.js").exists());
}

#[test]
fn new_module_empty_name_is_used_verbatim() {
    let sandbox = Sandbox::new();
    sandbox.module_template("index.js", "name = '{module-name}'");

    sandbox.cmd().args(["new-module", ""]).assert().success();

    assert_eq!(
        fs::read_to_string(sandbox.project.join("modules/index.js")).unwrap(),
        "name = ''"
    );
}

#[test]
fn new_module_without_template_is_not_found() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["new-module", "billing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No such file or directory"));
}

#[test]
fn new_module_custom_placeholder_from_env() {
    let sandbox = Sandbox::new();
    sandbox.module_template("__NAME__.js", "run('__NAME__')");

    sandbox
        .cmd()
        .env("ENDURANCE__SCAFFOLD__PLACEHOLDER", "__NAME__")
        .args(["new-module", "jobs"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(sandbox.project.join("modules/jobs/jobs.js")).unwrap(),
        "run('jobs')"
    );
}

// ── new-project ───────────────────────────────────────────────────────────────

#[test]
fn new_project_copies_template_verbatim() {
    let sandbox = Sandbox::new();
    let template = sandbox.install.join("node_modules/endurance-template");
    sandbox.write(&template, "package.json", r#"{"name": "app"}"#);
    sandbox.write(&template, "modules/{module-name}/.gitkeep", "");

    sandbox
        .cmd()
        .arg("new-project")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project created successfully"));

    assert_eq!(
        fs::read_to_string(sandbox.project.join("package.json")).unwrap(),
        r#"{"name": "app"}"#
    );
    assert!(sandbox.project.join("modules/{module-name}/.gitkeep").exists());
}

#[test]
fn new_project_failure_is_reported_but_exits_zero() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .arg("new-project")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project created successfully").not())
        .stderr(predicate::str::contains("Error creating project"));
}

// ── list-events ───────────────────────────────────────────────────────────────

#[test]
fn list_events_prints_one_line_per_call() {
    let sandbox = Sandbox::new();
    sandbox.project_file(
        "modules/users/index.js",
        "emitter.emit(eventTypes.USER_CREATED, user);\nemitter.emit(eventTypes.USER_DELETED);",
    );
    sandbox.project_file(
        "node_modules/edrm-mailer/index.js",
        "emitter.emit(eventTypes.MAIL_SENT)",
    );

    let assert = sandbox.cmd().arg("list-events").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<_> = stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Event: emitter.emit(eventTypes.USER_CREATED | File: "));
    assert!(lines[0].ends_with("| Module: users"));
    assert!(lines[1].contains("eventTypes.USER_DELETED"));
    assert!(lines[2].contains("eventTypes.MAIL_SENT"));
    assert!(lines[2].ends_with("| Module: edrm-mailer"));
}

#[test]
fn list_events_with_no_calls() {
    let sandbox = Sandbox::new();
    sandbox.project_file("modules/users/index.js", "module.exports = {};");

    sandbox
        .cmd()
        .arg("list-events")
        .assert()
        .success()
        .stdout(predicate::str::contains("No events found."));
}

#[test]
fn list_events_without_modules_dir_is_not_found() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .arg("list-events")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty());
}

#[test]
fn list_events_json_output() {
    let sandbox = Sandbox::new();
    sandbox.project_file(
        "modules/users/index.js",
        "emitter.emit(eventTypes.USER_CREATED)",
    );
    sandbox.project_file("modules/loose.js", "emitter.emit(eventTypes.LOOSE)");

    let assert = sandbox
        .cmd()
        .args(["list-events", "--format", "json"])
        .assert()
        .success();

    let records: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["event"], "emitter.emit(eventTypes.LOOSE");
    assert!(records[0]["module"].is_null());
    assert_eq!(records[1]["event"], "emitter.emit(eventTypes.USER_CREATED");
    assert_eq!(records[1]["module"], "users");
}

#[test]
fn list_events_invalid_pattern_is_configuration_error() {
    let sandbox = Sandbox::new();
    sandbox.project_file("modules/users/index.js", "");
    fs::write(&sandbox.config, "[events]\npattern = \"emitter\\\\.emit\\\\((\"\n").unwrap();

    sandbox.cmd().arg("list-events").assert().code(4);
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_get_reads_layered_value() {
    let sandbox = Sandbox::new();
    fs::write(&sandbox.config, "[scaffold]\nmodules_dir = \"src/modules\"\n").unwrap();

    sandbox
        .cmd()
        .args(["config", "get", "scaffold.modules_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scaffold.modules_dir = src/modules"));
}

#[test]
fn missing_explicit_config_file_exits_four() {
    cargo_bin_cmd!("endurance")
        .args(["--config", "/definitely/not/here.toml", "list-events"])
        .assert()
        .code(4);
}
