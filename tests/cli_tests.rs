//! CLI integration tests
//!
//! Drives the compiled binary the way an operator would.

use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::fixtures;

fn get_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_depsize"))
}

#[test]
fn test_no_arguments_generates_report_in_current_directory() {
    let project = fixtures::create_scenario_project().expect("fixture");

    let mut cmd = get_bin();
    cmd.current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Disk Usage Audit"))
        .stdout(predicate::str::contains("Report written to"));

    assert!(project.path().join("dependency-report.md").exists());
}

#[test]
fn test_report_subcommand_with_project_root_flag() {
    let project = fixtures::create_scenario_project().expect("fixture");

    let mut cmd = get_bin();
    cmd.arg("report")
        .arg("--project-root")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Heaviest Packages"))
        .stdout(predicate::str::contains("moment"));

    assert!(project.path().join("dependency-report.md").exists());
}

#[test]
fn test_report_json_flag_emits_parseable_statistics() {
    let project = fixtures::create_scenario_project().expect("fixture");

    let mut cmd = get_bin();
    let output = cmd
        .arg("report")
        .arg("--project-root")
        .arg(project.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dependency_percent\""))
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");
    assert_eq!(parsed["declared_dependencies"], 3);
    assert_eq!(parsed["packages"]["total_packages"], 3);

    // The report file is still written on JSON runs
    assert!(project.path().join("dependency-report.md").exists());
}

#[test]
fn test_missing_project_root_exits_with_noinput_code() {
    let mut cmd = get_bin();
    cmd.arg("report")
        .arg("--project-root")
        .arg("/definitely/not/a/real/root")
        .assert()
        .failure()
        .code(66)
        .stderr(predicate::str::contains("Project root not found"))
        .stderr(predicate::str::contains("--project-root"));
}

#[test]
fn test_no_emoji_flag_is_accepted() {
    let project = fixtures::create_bare_project().expect("fixture");

    let mut cmd = get_bin();
    cmd.arg("--no-emoji")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));
}

#[test]
fn test_completions_subcommand_prints_script() {
    let mut cmd = get_bin();
    cmd.arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("depsize"));
}

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = get_bin();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("completions"));
}
