use std::path::Path;

use anyhow::{bail, Context};
use confique::Config as DeriveConfig;
use serde::Deserialize;

/// Looked up in the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "leptcheck.toml";

#[derive(Debug, DeriveConfig)]
pub struct Config {
    /// Print the parsed value to stdout when the input is valid.
    #[config(default = true, env = "LEPTCHECK_PRINT_VALUE")]
    pub print_value: bool,

    /// Colorize diagnostics. Color is still dropped when stderr is not a terminal.
    #[config(default = true, env = "LEPTCHECK_COLOR")]
    pub color: bool,

    /// How results are reported: `human` renders source diagnostics on stderr, `json` prints a
    /// one-line summary on stdout.
    #[config(default = "human", env = "LEPTCHECK_FORMAT")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Human,
    Json,
}

/// Load config from the environment, then `explicit` (which must exist), then
/// [`DEFAULT_CONFIG_FILE`] if it exists, then the defaults.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let mut builder = Config::builder().env();

    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("config file `{}` does not exist", path.display());
        }
        builder = builder.file(path);
    }

    builder
        .file(DEFAULT_CONFIG_FILE)
        .load()
        .context("failed to load configuration")
}
