//! `pyskel validate`: the pre-generation checks on their own.

use serde::Serialize;

use pyskel_core::{domain::ValidationGate, error::PyskelError};

use crate::{
    cli::ValidateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct Verdict {
    valid: bool,
    checks: Vec<&'static str>,
}

pub fn execute(args: ValidateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let values = super::values::collect(&args.values, config)?;

    let gate = if args.name_only {
        ValidationGate::name_only()
    } else {
        ValidationGate::standard()
    };

    gate.validate(&values)
        .map_err(|e| CliError::Core(PyskelError::Domain(e)))?;

    if output.is_json() {
        output.json(&Verdict {
            valid: true,
            checks: gate.check_names(),
        })?;
        return Ok(());
    }

    output.success(&format!(
        "Values are valid ({})",
        gate.check_names().join(", ")
    ))?;
    Ok(())
}
