// likeness - Structural equality and pattern dispatch over JSON values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::fs;
use std::io;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use likeness_core::{Comparator, DEFAULT_MAX_DEPTH, Dispatch, Error, Limits};
use likeness_embed::{from_json, pattern_from_json};
use serde_json::Value as Json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "likeness", version, about, long_about = None)]
struct Cli {
    /// Deepest nesting level compared before giving up
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// String that stands for "anything" inside patterns
    #[arg(long, global = true, default_value = "_")]
    wildcard: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two JSON values
    Compare {
        /// Left value: inline JSON, or @FILE
        lhs: String,

        /// Right value (the pattern in pattern mode): inline JSON, or @FILE
        rhs: String,

        #[arg(long, value_enum, default_value_t = Mode::Content)]
        mode: Mode,
    },

    /// Print the label of the first arm a value matches, or "default"
    Match {
        /// Value to dispatch on: inline JSON, or @FILE
        value: String,

        /// JSON array of arms, each `[pattern..., label]`: inline, or @FILE
        arms: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Same content, ignoring element order
    Content,
    /// Built from the same kinds
    Shape,
    /// Left value fits the right pattern
    Pattern,
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let comparator = Comparator::new(Limits::default().with_max_depth(cli.max_depth));

    let result = match &cli.command {
        Command::Compare { lhs, rhs, mode } => {
            run_compare(&comparator, lhs, rhs, *mode, &cli.wildcard)
        }
        Command::Match { value, arms } => run_match(&comparator, value, arms, &cli.wildcard),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Log to stderr, filtered by `LIKENESS_LOG` (default `warn`)
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("LIKENESS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Read an argument: `@path` names a file, anything else is inline JSON
fn read_json(arg: &str) -> Result<Json, String> {
    let text = match arg.strip_prefix('@') {
        Some(path) => {
            debug!(path, "reading input file");
            fs::read_to_string(path).map_err(|e| format!("reading '{}': {}", path, e))?
        }
        None => arg.to_string(),
    };
    serde_json::from_str(&text).map_err(|e| Error::invalid_json(e).to_string())
}

fn run_compare(
    comparator: &Comparator,
    lhs: &str,
    rhs: &str,
    mode: Mode,
    wildcard: &str,
) -> Result<String, String> {
    let lhs = from_json(&read_json(lhs)?);
    let rhs = read_json(rhs)?;
    let output = match mode {
        Mode::Content => comparator.compare(&lhs, &from_json(&rhs)).to_string(),
        Mode::Shape => comparator.same_shape(&lhs, &from_json(&rhs)).to_string(),
        Mode::Pattern => comparator
            .satisfies(&lhs, &pattern_from_json(&rhs, wildcard))
            .to_string(),
    };
    Ok(output)
}

fn run_match(
    comparator: &Comparator,
    value: &str,
    arms: &str,
    wildcard: &str,
) -> Result<String, String> {
    let value = from_json(&read_json(value)?);
    let Json::Array(arms) = read_json(arms)? else {
        return Err("arms must be a JSON array".to_string());
    };

    let mut dispatch = Dispatch::new().with_comparator(*comparator);
    for (index, arm) in arms.iter().enumerate() {
        let Some((label, patterns)) = arm.as_array().and_then(|a| a.split_last()) else {
            return Err(format!("arm {} must be a JSON array", index));
        };
        if patterns.is_empty() {
            return Err(format!("arm {} needs at least one pattern and a label", index));
        }
        let label = match label {
            Json::String(s) => s.clone(),
            other => other.to_string(),
        };
        let patterns: Vec<_> = patterns
            .iter()
            .map(|p| pattern_from_json(p, wildcard))
            .collect();
        dispatch = dispatch.arm(patterns, move || label);
    }

    Ok(dispatch.run(&value, |_, _| "default".to_string()))
}
