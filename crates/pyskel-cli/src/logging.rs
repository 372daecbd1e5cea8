//! Tracing setup for the `pyskel` binary.
//!
//! The library crates only emit events; this module decides where they go.
//! Everything is written to stderr so generation reports on stdout stay
//! parseable. `RUST_LOG`, when set, replaces the level picked from the flags.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    cli::{GlobalArgs, OutputFormat},
    config::AppConfig,
};

/// Crates whose events are shown at the chosen level.
const TARGETS: [&str; 3] = ["pyskel", "pyskel_core", "pyskel_adapters"];

/// How the subscriber should be built for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `error` with `-q`, then `warn`, `info`, `debug`, `trace` per `-v`.
    /// Warn is the default so lock failures reach the log as well.
    pub level: &'static str,
    pub json: bool,
    pub ansi: bool,
}

impl LogSettings {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let level = match (args.quiet, args.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            (false, _) => "trace",
        };
        let json = OutputFormat::requested(args.output_format, &config.output.format)
            == OutputFormat::Json;

        Self {
            level,
            json,
            ansi: !json
                && !args.no_color
                && !config.output.no_color
                && std::io::stderr().is_terminal(),
        }
    }

    fn directives(&self) -> String {
        TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.level))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Install the global subscriber. Fails if one is already installed.
    pub fn init(&self) -> anyhow::Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.directives()));

        let layer = if self.json {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_ansi(self.ansi)
                .with_writer(std::io::stderr)
                .boxed()
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
            .map_err(|e| anyhow::anyhow!("cannot install log subscriber: {e}"))
    }
}
