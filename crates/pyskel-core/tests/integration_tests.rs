//! Integration tests for pyskel-core wired to the real adapters.

use std::path::{Path, PathBuf};

use pyskel_adapters::{LocalFilesystem, MemoryFilesystem, PythonBlueprint};
use pyskel_core::{
    application::ApplicationError,
    domain::DomainError,
    prelude::*,
};

/// Resolver that behaves like a successful `poetry lock`.
struct TouchLockResolver;

impl LockResolver for TouchLockResolver {
    fn resolve(&self, project_root: &Path) -> LockRun {
        let written = std::fs::write(project_root.join("poetry.lock"), "# locked\n").is_ok();
        LockRun {
            command: "touch poetry.lock".into(),
            exit_code: Some(if written { 0 } else { 1 }),
            output: String::new(),
        }
    }

    fn lock_file_name(&self) -> String {
        "poetry.lock".into()
    }
}

/// Resolver that behaves like poetry missing from PATH.
struct BrokenLockResolver;

impl LockResolver for BrokenLockResolver {
    fn resolve(&self, _project_root: &Path) -> LockRun {
        LockRun {
            command: "poetry lock".into(),
            exit_code: None,
            output: "Command error: No such file or directory".into(),
        }
    }

    fn lock_file_name(&self) -> String {
        "poetry.lock".into()
    }
}

fn config(package_name: &str, line_length: &str) -> GenerationConfig {
    GenerationConfig::default()
        .with(keys::PACKAGE_NAME, package_name)
        .with(keys::LINE_LENGTH, line_length)
}

fn local_service(resolver: Box<dyn LockResolver>, strict: bool) -> GenerationService {
    GenerationService::new(
        Box::new(PythonBlueprint::new()),
        Box::new(LocalFilesystem::new()),
    )
    .with_finalizer(Finalizer::new(resolver, Box::new(LocalFilesystem::new())).strict(strict))
}

#[test]
fn valid_config_generates_and_locks() {
    let temp = tempfile::tempdir().unwrap();
    let service = local_service(Box::new(TouchLockResolver), false);

    let report = service.generate(&config("pymx", "79"), temp.path()).unwrap();

    let root = temp.path().join("pymx");
    assert_eq!(report.root, root);
    for expected in ["pymx", ".gitignore", "README.md", "setup.py", "tests"] {
        assert!(root.join(expected).exists(), "missing {expected}");
    }
    assert!(root.join("poetry.lock").is_file());
    assert_eq!(
        report.finalize,
        FinalizeOutcome::Locked {
            lock_file: root.join("poetry.lock")
        }
    );
}

#[test]
fn invalid_package_name_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let service = local_service(Box::new(TouchLockResolver), false);

    let err = service
        .generate(&config("Foo-Bar", "79"), temp.path())
        .unwrap_err();

    assert!(matches!(
        err,
        PyskelError::Domain(DomainError::InvalidName { .. })
    ));
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn short_line_length_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let service = local_service(Box::new(TouchLockResolver), false);

    let err = service
        .generate(&config("pymx", "78"), temp.path())
        .unwrap_err();

    match err {
        PyskelError::Domain(e) => assert_eq!(
            e,
            DomainError::TooShort {
                value: "78".into(),
                minimum: 79
            }
        ),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!temp.path().join("pymx").exists());
}

#[test]
fn reserved_package_name_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let service = local_service(Box::new(TouchLockResolver), false);

    let err = service
        .generate(&config("tests", "79"), temp.path())
        .unwrap_err();

    assert!(err.is_validation());
    assert!(matches!(
        err,
        PyskelError::Domain(DomainError::ReservedName { .. })
    ));
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn padded_line_length_is_written_canonically() {
    let fs = MemoryFilesystem::new();
    let service = GenerationService::new(Box::new(PythonBlueprint::new()), Box::new(fs.clone()));

    service.generate(&config("pymx", " 088 "), "/out").unwrap();

    let makefile = fs.read_file(Path::new("/out/pymx/Makefile")).unwrap();
    assert!(makefile.contains("black --line-length=88 --check --diff pymx tests"));
    let pyproject = fs.read_file(Path::new("/out/pymx/pyproject.toml")).unwrap();
    assert!(pyproject.contains("line-length = 88\n"));
}

#[test]
fn failed_lock_keeps_project_unless_strict() {
    let temp = tempfile::tempdir().unwrap();

    let report = local_service(Box::new(BrokenLockResolver), false)
        .generate(&config("lenient", "79"), temp.path())
        .unwrap();
    assert!(report.finalize.warning().is_some());
    assert!(temp.path().join("lenient/setup.py").exists());

    let err = local_service(Box::new(BrokenLockResolver), true)
        .generate(&config("strict", "79"), temp.path())
        .unwrap_err();
    assert!(matches!(
        err,
        PyskelError::Application(ApplicationError::FinalizationFailed { .. })
    ));
    // Files stay on disk; only the lock step is reported as failed.
    assert!(temp.path().join("strict/setup.py").exists());
}

#[test]
fn second_generation_into_same_root_is_refused() {
    let temp = tempfile::tempdir().unwrap();
    let service = local_service(Box::new(TouchLockResolver), false);

    service.generate(&config("pymx", "79"), temp.path()).unwrap();
    let err = service
        .generate(&config("pymx", "79"), temp.path())
        .unwrap_err();

    assert!(matches!(
        err,
        PyskelError::Application(ApplicationError::ProjectExists { .. })
    ));
}

#[test]
fn finalizer_is_rerunnable() {
    let temp = tempfile::tempdir().unwrap();
    let finalizer = Finalizer::new(
        Box::new(TouchLockResolver),
        Box::new(LocalFilesystem::new()),
    );

    let first = finalizer.finalize(temp.path());
    let second = finalizer.finalize(temp.path());
    assert!(first.is_locked());
    assert_eq!(first, second);
}

#[test]
fn memory_filesystem_write_failure_rolls_back() {
    let fs = MemoryFilesystem::new();
    fs.fail_writes_under("/out/pymx/tests");

    let service = GenerationService::new(Box::new(PythonBlueprint::new()), Box::new(fs.clone()));
    let result = service.generate(&GenerationConfig::default(), "/out");

    assert!(result.is_err());
    assert!(!fs.exists(Path::new("/out/pymx")));
    assert!(fs.list_files().is_empty());
}

#[test]
fn memory_generation_lists_every_blueprint_file() {
    let fs = MemoryFilesystem::new();
    let service = GenerationService::new(Box::new(PythonBlueprint::new()), Box::new(fs.clone()));

    let report = service
        .generate(&config("_tool2", "100"), "/out")
        .unwrap();

    assert_eq!(report.finalize, FinalizeOutcome::Skipped);
    let expected: Vec<PathBuf> = [
        ".gitignore",
        "Makefile",
        "README.md",
        "_tool2/__init__.py",
        "pyproject.toml",
        "setup.cfg",
        "setup.py",
        "tests/__init__.py",
        "tests/test__tool2.py",
    ]
    .iter()
    .map(|p| Path::new("/out/_tool2").join(p))
    .collect();
    assert_eq!(fs.list_files(), expected);

    let makefile = fs
        .read_file(Path::new("/out/_tool2/Makefile"))
        .unwrap();
    assert!(makefile.contains("black --line-length=100 --check --diff _tool2 tests"));
}

#[test]
fn dry_run_plan_touches_nothing() {
    let fs = MemoryFilesystem::new();
    let service = GenerationService::new(Box::new(PythonBlueprint::new()), Box::new(fs.clone()));

    let plan = service.plan(&GenerationConfig::default(), "/out").unwrap();

    assert!(plan.file("Makefile").is_some());
    assert!(fs.list_files().is_empty());
}
