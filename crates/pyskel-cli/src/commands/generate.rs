//! Implementation of the `pyskel generate` command.
//!
//! Responsibility: assemble the generation values, run the core
//! generation service, and display results.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use pyskel_adapters::{LocalFilesystem, PythonBlueprint};
use pyskel_core::{
    application::{FinalizeOutcome, GenerationReport, GenerationService},
    domain::ProjectStructure,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// What `--dry-run` reports.
#[derive(Debug, Serialize)]
struct DryRun {
    root: PathBuf,
    files: Vec<PathBuf>,
    directories: Vec<PathBuf>,
}

impl From<&ProjectStructure> for DryRun {
    fn from(plan: &ProjectStructure) -> Self {
        Self {
            root: plan.root().to_path_buf(),
            files: plan.files().map(|f| f.path.clone()).collect(),
            directories: plan.directories().map(|d| d.path.clone()).collect(),
        }
    }
}

/// Execute the `pyskel generate` command.
///
/// 1. Collect values (config, answers, flags, prompts)
/// 2. Validate and render (stop here on `--dry-run`)
/// 3. Write the project and run the lock step
/// 4. Report
#[instrument(skip_all, fields(output_dir = %args.output_dir.display()))]
pub fn execute(args: GenerateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let values = super::values::collect(&args.values, config)?;

    let mut service = GenerationService::new(
        Box::new(PythonBlueprint::new()),
        Box::new(LocalFilesystem::new()),
    );

    if args.dry_run {
        let plan = service.plan(&values, &args.output_dir)?;
        return show_plan(&DryRun::from(&plan), output);
    }

    let finalize = config.finalize.enabled && !args.no_finalize;
    if finalize {
        let strict = args.strict_lock || config.finalize.strict;
        service = service.with_finalizer(super::build_finalizer(config, strict));
    }

    let spinner = output.spinner(if finalize {
        "Generating project and locking dependencies..."
    } else {
        "Generating project..."
    });
    let result = service.generate(&values, &args.output_dir);
    spinner.finish_and_clear();

    let report = result?;
    info!(
        run_id = %report.run_id,
        root = %report.root.display(),
        files = report.files.len(),
        "project generated"
    );

    show_report(&report, output)
}

fn show_plan(plan: &DryRun, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(plan)?;
        return Ok(());
    }

    output.info(&format!("Dry run: would create {}", plan.root.display()))?;
    for dir in &plan.directories {
        output.print(&format!("  {}/", dir.display()))?;
    }
    for file in &plan.files {
        output.print(&format!("  {}", file.display()))?;
    }
    Ok(())
}

fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    if let Some(warning) = report.finalize.warning() {
        output.warning(&warning)?;
    }

    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    output.success(&format!(
        "Project '{}' created at {}",
        report.package_name,
        report.root.display()
    ))?;

    match &report.finalize {
        FinalizeOutcome::Locked { lock_file } => {
            output.success(&format!("Dependencies locked ({})", lock_file.display()))?;
        }
        FinalizeOutcome::Skipped => output.info("Dependency lock skipped")?,
        FinalizeOutcome::Failed { run, .. } => {
            output.info(&format!(
                "Run `{}` inside the project once the problem is fixed",
                run.command
            ))?;
        }
    }

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", report.root.display()))?;
    output.print("  make lint test")?;

    Ok(())
}
