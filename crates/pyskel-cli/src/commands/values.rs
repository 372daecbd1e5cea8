//! Assemble the [`GenerationConfig`] for one run.
//!
//! Layers, lowest first: blueprint defaults, `[defaults]` from config,
//! `--answers`, `--set`, dedicated flags, then interactive prompts for
//! anything the operator did not supply explicitly.

use std::io::IsTerminal as _;

use pyskel_adapters::load_answers;
use pyskel_core::domain::{GenerationConfig, keys};
use tracing::debug;

use crate::{
    cli::ValueArgs,
    config::AppConfig,
    error::CliResult,
};

pub fn collect(args: &ValueArgs, config: &AppConfig) -> CliResult<GenerationConfig> {
    let explicit = explicit_values(args)?;
    let merged = GenerationConfig::default()
        .merge(&config.defaults)
        .merge(&explicit);

    if args.no_input || !std::io::stdin().is_terminal() {
        debug!(values = %merged, "generation values resolved");
        return Ok(merged);
    }

    let prompted = prompt_missing(merged, &explicit)?;
    debug!(values = %prompted, "generation values resolved");
    Ok(prompted)
}

/// Everything given on the command line or in the answers file.
fn explicit_values(args: &ValueArgs) -> CliResult<GenerationConfig> {
    let mut values = match &args.answers {
        Some(path) => load_answers(path)?,
        None => GenerationConfig::new(),
    };

    for (key, value) in &args.set {
        values.set(key.clone(), value.clone());
    }

    let flags = [
        (keys::PACKAGE_NAME, &args.package_name),
        (keys::LINE_LENGTH, &args.line_length),
        (keys::SHORT_DESCRIPTION, &args.description),
        (keys::AUTHOR_NAME, &args.author_name),
        (keys::AUTHOR_EMAIL, &args.author_email),
    ];
    for (key, value) in flags {
        if let Some(value) = value {
            values.set(key, value.clone());
        }
    }
    if args.use_pylint {
        values.set(keys::USE_PYLINT, "y");
    }
    if args.use_mypy {
        values.set(keys::USE_MYPY, "y");
    }

    Ok(values)
}

#[cfg(feature = "interactive")]
fn prompt_missing(
    mut values: GenerationConfig,
    explicit: &GenerationConfig,
) -> CliResult<GenerationConfig> {
    use dialoguer::{Confirm, Input};

    use crate::error::CliError;

    for key in keys::ALL {
        if explicit.contains(key) {
            continue;
        }

        let answer = if key == keys::USE_PYLINT || key == keys::USE_MYPY {
            let enabled = Confirm::new()
                .with_prompt(key)
                .default(values.flag(key))
                .interact()
                .map_err(|e| CliError::Prompt {
                    message: e.to_string(),
                })?;
            String::from(if enabled { "y" } else { "n" })
        } else {
            Input::<String>::new()
                .with_prompt(key)
                .default(values.get(key).unwrap_or_default().to_string())
                .interact_text()
                .map_err(|e| CliError::Prompt {
                    message: e.to_string(),
                })?
        };

        values.set(key, answer);
    }

    Ok(values)
}

#[cfg(not(feature = "interactive"))]
fn prompt_missing(
    values: GenerationConfig,
    _explicit: &GenerationConfig,
) -> CliResult<GenerationConfig> {
    Ok(values)
}
