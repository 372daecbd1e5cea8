//! `pyskel finalize`: run the lock step on an existing project.

use tracing::instrument;

use pyskel_core::application::FinalizeOutcome;

use crate::{
    cli::FinalizeArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(dir = %args.project_dir.display()))]
pub fn execute(args: FinalizeArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    if !args.project_dir.is_dir() {
        return Err(CliError::ProjectDirNotFound {
            path: args.project_dir,
        });
    }

    let finalizer =
        super::build_finalizer(config, args.strict_lock || config.finalize.strict);

    let spinner = output.spinner("Locking dependencies...");
    let result = finalizer.run(&args.project_dir);
    spinner.finish_and_clear();

    let outcome = result?;

    if let Some(warning) = outcome.warning() {
        output.warning(&warning)?;
    }

    if output.is_json() {
        output.json(&outcome)?;
        return Ok(());
    }

    if let FinalizeOutcome::Locked { lock_file } = &outcome {
        output.success(&format!("Dependencies locked ({})", lock_file.display()))?;
    }

    Ok(())
}
