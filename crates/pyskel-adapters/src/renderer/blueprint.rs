//! The built-in Python project blueprint.

use std::path::Path;

use pyskel_core::{
    application::{ApplicationError, ports::ProjectRenderer},
    domain::{
        DomainValidator as validator, GenerationConfig, Permissions, ProjectStructure,
        RenderContext, canonical_line_length, keys,
    },
    error::PyskelResult,
};
use tracing::{debug, instrument};

use super::files;

/// Renders a pip/poetry-ready Python package with lint, test and build
/// tooling wired into a Makefile.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonBlueprint;

impl PythonBlueprint {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectRenderer for PythonBlueprint {
    #[instrument(skip_all, fields(root = %project_root.display()))]
    fn render(
        &self,
        config: &GenerationConfig,
        project_root: &Path,
    ) -> PyskelResult<ProjectStructure> {
        let package = config.package_name()?;
        let use_pylint = config.flag(keys::USE_PYLINT);
        let use_mypy = config.flag(keys::USE_MYPY);
        debug!(package, use_pylint, use_mypy, "rendering python blueprint");

        // black reads line-length from pyproject.toml, where integers are i64.
        let line_length = canonical_line_length(config.require(keys::LINE_LENGTH)?)?;
        if line_length.parse::<i64>().is_err() {
            return Err(ApplicationError::RenderingFailed {
                reason: format!("line length {line_length} does not fit a TOML integer"),
            }
            .into());
        }

        let base = RenderContext::from_config(config).with_variable("LINE_LENGTH", line_length);

        // Fragments reference other variables, so render them before they
        // become variables themselves.
        let mut lint_extras = String::new();
        let mut dev_extras = String::new();
        let mut lint_commands = String::new();
        if use_pylint {
            lint_extras.push_str(files::PYLINT_EXTRA);
            dev_extras.push_str(files::PYLINT_DEV);
            lint_commands.push_str(&base.render(files::PYLINT_COMMAND));
        }
        if use_mypy {
            lint_extras.push_str(files::MYPY_EXTRA);
            dev_extras.push_str(files::MYPY_DEV);
            lint_commands.push_str(&base.render(files::MYPY_COMMAND));
        }

        let ctx = base
            .with_variable("LINT_EXTRAS", lint_extras)
            .with_variable("DEV_EXTRAS", dev_extras)
            .with_variable("LINT_COMMANDS", lint_commands);

        let rw = Permissions::read_write();
        let structure = ProjectStructure::new(project_root)
            .with_directory(package, rw)
            .with_file(
                format!("{package}/__init__.py"),
                files::PACKAGE_INIT.to_string(),
                rw,
            )
            .with_directory("tests", rw)
            .with_file("tests/__init__.py", files::TESTS_INIT.to_string(), rw)
            .with_file(
                format!("tests/test_{package}.py"),
                ctx.render(files::SMOKE_TEST),
                rw,
            )
            .with_file(".gitignore", files::GITIGNORE.to_string(), rw)
            .with_file("README.md", ctx.render(files::README), rw)
            .with_file("setup.py", ctx.render(files::SETUP_PY), rw)
            .with_file("setup.cfg", ctx.render(files::SETUP_CFG), rw)
            .with_file("pyproject.toml", ctx.render(files::PYPROJECT), rw)
            .with_file("Makefile", ctx.render(files::MAKEFILE), rw);

        validator::validate_project_structure(&structure)?;

        Ok(structure)
    }
}
