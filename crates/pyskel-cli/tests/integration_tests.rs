//! End-to-end tests for the `pyskel` binary.

use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// `pyskel` running in `temp` with an isolated, empty config file.
fn pyskel(temp: &TempDir) -> assert_cmd::Command {
    let config = temp.path().join("pyskel.toml");
    if !config.exists() {
        std::fs::write(&config, "").unwrap();
    }

    let mut cmd = cargo::cargo_bin_cmd!("pyskel");
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("PYSKEL_FINALIZE__COMMAND")
        .arg("--config")
        .arg(&config);
    cmd
}

fn assert_empty_except_config(dir: &Path) {
    let names: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["pyskel.toml".to_string()]);
}

#[test]
fn help_lists_subcommands() {
    cargo::cargo_bin_cmd!("pyskel")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("finalize"));
}

#[test]
fn version_flag() {
    cargo::cargo_bin_cmd!("pyskel")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn default_generation_creates_expected_files() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .args(["generate", "--no-input", "--no-finalize"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'pymx' created"));

    let root = temp.path().join("pymx");
    for expected in ["pymx", ".gitignore", "README.md", "setup.py", "tests", "Makefile"] {
        assert!(root.join(expected).exists(), "missing {expected}");
    }

    let makefile = std::fs::read_to_string(root.join("Makefile")).unwrap();
    assert!(makefile.contains("pip3 install -e .[lint]"));
    assert!(makefile.contains("flake8 pymx tests"));
    assert!(makefile.contains("black --line-length=79 --check --diff pymx tests"));
}

#[test]
fn invalid_package_name_exits_with_user_error() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .args(["generate", "--no-input", "--package-name", "Foo-Bar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "'Foo-Bar' is not a valid Python module name",
        ));

    assert_empty_except_config(temp.path());
}

#[test]
fn short_line_length_exits_with_user_error() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .args(["generate", "--no-input", "--line-length", "78"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("below the minimum of 79"));

    assert_empty_except_config(temp.path());
}

#[test]
fn non_numeric_line_length_is_rejected() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .args(["generate", "--no-input", "--set", "line_length=wide"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not an integer"));
}

#[test]
fn package_named_tests_is_rejected_before_writing() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .args(["generate", "--no-input", "--package-name", "tests"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("clashes with the generated tests/ directory"))
        .stderr(predicate::str::contains("Nothing was written."));

    assert_empty_except_config(temp.path());
}

#[test]
fn padded_line_length_is_normalised_in_generated_files() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .args(["generate", "--no-input", "--no-finalize", "--line-length", " 088 "])
        .assert()
        .success();

    let root = temp.path().join("pymx");
    let makefile = std::fs::read_to_string(root.join("Makefile")).unwrap();
    assert!(makefile.contains("black --line-length=88 --check --diff pymx tests"));
    let pyproject = std::fs::read_to_string(root.join("pyproject.toml")).unwrap();
    assert!(pyproject.contains("line-length = 88\n"));
}

#[test]
fn json_format_from_config_applies_to_logs() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("pyskel.toml"), "[output]\nformat = \"json\"\n").unwrap();

    let output = pyskel(&temp)
        .args(["-v", "validate", "--no-input"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let verdict: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(verdict["valid"], true);

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<_> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty());
    for line in lines {
        let event: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("not a JSON log line ({e}): {line}"));
        assert!(event["level"].is_string());
    }
}

#[cfg(unix)]
#[test]
fn finalizer_leaves_lock_file_in_project_root() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .env("PYSKEL_FINALIZE__COMMAND", "touch poetry.lock")
        .args(["generate", "--no-input", "--package-name", "pymx", "--line-length", "79"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependencies locked"));

    assert!(temp.path().join("pymx/poetry.lock").is_file());
}

#[test]
fn failed_lock_is_a_warning() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .env("PYSKEL_FINALIZE__COMMAND", "pyskel-missing-lock-tool")
        .args(["generate", "--no-input"])
        .assert()
        .success()
        .stderr(predicate::str::contains("dependency lock failed"));

    assert!(temp.path().join("pymx/setup.py").exists());
    assert!(!temp.path().join("pymx/poetry.lock").exists());
}

#[test]
fn failed_lock_is_fatal_with_strict_lock() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .env("PYSKEL_FINALIZE__COMMAND", "pyskel-missing-lock-tool")
        .args(["generate", "--no-input", "--strict-lock"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Dependency lock failed"));
}

#[test]
fn existing_project_is_refused() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("pymx")).unwrap();

    pyskel(&temp)
        .args(["generate", "--no-input", "--no-finalize"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn toggles_and_answers_file_shape_the_project() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("answers.toml"),
        "package_name = \"my_tool\"\nline_length = 100\nuse_mypy = true\n",
    )
    .unwrap();

    pyskel(&temp)
        .args([
            "generate",
            "out",
            "--no-input",
            "--no-finalize",
            "--answers",
            "answers.toml",
            "--use-pylint",
        ])
        .assert()
        .success();

    let makefile = std::fs::read_to_string(temp.path().join("out/my_tool/Makefile")).unwrap();
    assert!(makefile.contains("black --line-length=100 --check --diff my_tool tests"));
    assert!(makefile.contains("pylint my_tool tests"));
    assert!(makefile.contains("mypy my_tool tests"));
}

#[test]
fn dry_run_json_lists_files_without_writing() {
    let temp = TempDir::new().unwrap();

    let output = pyskel(&temp)
        .args(["--output-format", "json", "generate", "--no-input", "--dry-run"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let files: Vec<&str> = plan["files"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|f| f.as_str())
        .collect();
    assert!(files.contains(&"Makefile"));
    assert!(files.contains(&"pymx/__init__.py"));

    assert_empty_except_config(temp.path());
}

#[test]
fn json_report_records_skipped_lock() {
    let temp = TempDir::new().unwrap();

    let output = pyskel(&temp)
        .args(["--output-format", "json", "generate", "--no-input", "--no-finalize"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["package_name"], "pymx");
    assert_eq!(report["finalize"]["status"], "skipped");
    assert!(report["run_id"].is_string());
}

#[test]
fn config_file_defaults_apply() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("pyskel.toml"),
        "[defaults]\npackage_name = \"from_config\"\n\n[finalize]\nenabled = false\n",
    )
    .unwrap();

    pyskel(&temp)
        .args(["generate", "--no-input"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependency lock skipped"));

    assert!(temp.path().join("from_config/from_config/__init__.py").exists());
}

// ── validate ──────────────────────────────────────────────────────────────────

#[test]
fn validate_accepts_defaults() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .args(["validate", "--no-input"])
        .assert()
        .success()
        .stdout(predicate::str::contains("package_name, line_length"));

    assert_empty_except_config(temp.path());
}

#[test]
fn validate_name_only_ignores_line_length() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .args(["validate", "--no-input", "--line-length", "40"])
        .assert()
        .code(2);

    pyskel(&temp)
        .args(["validate", "--no-input", "--line-length", "40", "--name-only"])
        .assert()
        .success();

    pyskel(&temp)
        .args(["validate", "--no-input", "--package-name", "1abc", "--name-only"])
        .assert()
        .code(2);
}

// ── finalize ──────────────────────────────────────────────────────────────────

#[test]
fn finalize_missing_directory_is_not_found() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .args(["finalize", "does-not-exist"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Project directory not found"));
}

#[cfg(unix)]
#[test]
fn finalize_locks_existing_project() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("proj")).unwrap();

    pyskel(&temp)
        .env("PYSKEL_FINALIZE__COMMAND", "touch poetry.lock")
        .args(["finalize", "proj"])
        .assert()
        .success();

    assert!(temp.path().join("proj/poetry.lock").is_file());
}

// ── config / init ─────────────────────────────────────────────────────────────

#[test]
fn config_get_reads_merged_value() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("pyskel.toml"),
        "[defaults]\nline_length = 88\n",
    )
    .unwrap();

    pyskel(&temp)
        .args(["config", "get", "defaults.line_length"])
        .assert()
        .success()
        .stdout(predicate::str::diff("88\n"));

    pyskel(&temp)
        .args(["config", "get", "defaults.package_name"])
        .assert()
        .success()
        .stdout(predicate::str::diff("pymx\n"));
}

#[test]
fn config_get_unknown_key_is_configuration_error() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .args(["config", "get", "nope.nope"])
        .assert()
        .code(4);
}

#[test]
fn missing_config_file_is_configuration_error() {
    cargo::cargo_bin_cmd!("pyskel")
        .args(["--config", "/definitely/missing/pyskel.toml", "validate", "--no-input"])
        .assert()
        .code(4);
}

#[test]
fn init_writes_loadable_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fresh.toml");

    cargo::cargo_bin_cmd!("pyskel")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[finalize]"));
    assert!(written.contains("package_name = \"pymx\""));

    cargo::cargo_bin_cmd!("pyskel")
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "finalize.command"])
        .assert()
        .success()
        .stdout(predicate::str::diff("poetry lock\n"));
}

#[test]
fn completions_for_bash() {
    cargo::cargo_bin_cmd!("pyskel")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pyskel"));
}
