use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use ariadne::Source;
use clap::Parser as ClapParser;
use leptjson::{ParseError, Value};
use serde::Serialize;
use tracing::*;

use crate::config::{Config, OutputFormat};

mod config;
mod diagnostics;
mod logging;

#[derive(Debug, ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to a file holding one JSON value, or `-` to read stdin.
    input: PathBuf,

    /// A TOML config file. `leptcheck.toml` in the working directory is also read when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the `format` config option.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

/// One-line summary printed with `--format json`.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    path: &'a str,
    #[serde(flatten)]
    outcome: Outcome,
}

#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
enum Outcome {
    Ok {
        tag: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        number: Option<f64>,
    },
    Error {
        kind: &'static str,
        message: String,
        span: [usize; 2],
    },
}

impl From<&Result<Value, ParseError>> for Outcome {
    fn from(res: &Result<Value, ParseError>) -> Self {
        match res {
            Ok(value) => Outcome::Ok {
                tag: value.tag().desc(),
                number: value.as_number(),
            },
            Err(e) => Outcome::Error {
                kind: e.kind().code(),
                message: e.to_string(),
                span: [e.span().lo, e.span().hi],
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging::setup_logging();

    let cli = Args::parse();

    debug!(input = ?cli.input, config = ?cli.config);

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    debug!(?config);

    let json_string = read_input(&cli.input)?;
    let path = cli.input.display().to_string();

    let res = leptjson::parse(&json_string);
    debug!(?res);

    match config.format {
        OutputFormat::Human => report_human(&config, &path, &json_string, &res)?,
        OutputFormat::Json => {
            let summary = Summary {
                path: &path,
                outcome: Outcome::from(&res),
            };
            println!("{}", serde_json::to_string(&summary)?);
        }
    }

    if res.is_err() {
        bail!("`{path}` is not a valid JSON value");
    }

    Ok(())
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }

    match std::fs::read_to_string(input) {
        Ok(file) => Ok(file),
        Err(e) => {
            error!(path = ?input, "failed to read input");
            Err(e).with_context(|| format!("failed to read file `{}`", input.display()))
        }
    }
}

fn report_human(
    config: &Config,
    path: &String,
    src: &str,
    res: &Result<Value, ParseError>,
) -> anyhow::Result<()> {
    match res {
        Ok(value) => {
            if config.print_value {
                println!("{}", display_value(value));
            }
        }
        Err(e) => {
            diagnostics::parse_error_report(path, e, config.color)
                .eprint((path, Source::from(src)))?;
        }
    }
    Ok(())
}

fn display_value(value: &Value) -> String {
    match value.as_number() {
        Some(n) => n.to_string(),
        None => value.tag().desc().to_string(),
    }
}
