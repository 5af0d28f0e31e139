//! `streamavg` command-line interface.
//!
//! ```bash
//! # Running average of a few numbers
//! streamavg average 1 2 3
//!
//! # Numbers from a file, paced, with the curve exported as CSV
//! streamavg average --file values.txt --delay-ms 500 --export curve.csv
//!
//! # First recurring character
//! streamavg recurring ABCA
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use streamavg::config::{
    ExportParams, FileParameters, RunConfig, StreamChoice, TokensParameters, UniformParameters,
    build_task,
};
use streamavg::report::CurveFormat;
use streamavg::tasks::{InvalidPolicy, LineReporter};
use streamavg::text::first_recurring_char;
use streamavg::ui::cli::drivers::InquireDriver;
use streamavg::ui::cli::wizard::prompt_run_config;
use tracing_subscriber::EnvFilter;

/// Running averages over streams of numbers.
#[derive(Parser)]
#[command(name = "streamavg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the running average after each value.
    Average(AverageArgs),

    /// Print the first character that appears twice in TEXT.
    Recurring {
        /// String to scan.
        text: String,
    },

    /// Print the JSON Schema of the run configuration file.
    Schema,
}

#[derive(Args)]
struct AverageArgs {
    /// Values to average, in order.
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Read values from a text file instead.
    #[arg(short, long, conflicts_with_all = ["values", "random"])]
    file: Option<PathBuf>,

    /// Average N uniform random values in [0, 1).
    #[arg(long, value_name = "N", conflicts_with = "values")]
    random: Option<u64>,

    /// Seed for --random.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Load a JSON run configuration (see `streamavg schema`).
    #[arg(short, long, conflicts_with_all = ["values", "file", "random"])]
    config: Option<PathBuf>,

    /// Build the run configuration interactively.
    #[arg(short, long, conflicts_with_all = ["values", "file", "random", "config"])]
    interactive: bool,

    /// Pause between two values, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Stop after this many values.
    #[arg(long)]
    max_values: Option<u64>,

    /// Skip values that are not numbers instead of stopping.
    #[arg(long)]
    skip_invalid: bool,

    /// Write the sampled curve to this file.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Export format (csv, tsv, json); guessed from the file extension if omitted.
    #[arg(long, requires = "export")]
    format: Option<CurveFormat>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Average(args) => average(args),
        Commands::Recurring { text } => {
            match first_recurring_char(&text) {
                Some(c) => println!("{c} is the first recurring character."),
                None => println!("None found."),
            }
            Ok(())
        }
        Commands::Schema => {
            let schema = serde_json::to_string_pretty(&RunConfig::schema())?;
            println!("{schema}");
            Ok(())
        }
    }
}

/// `RUST_LOG` when it is set and parses, `warn` otherwise.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn average(args: AverageArgs) -> Result<()> {
    let cfg = resolve_config(args)?;
    tracing::debug!(?cfg, "resolved run configuration");

    let reporter = LineReporter::new(io::stdout().lock());
    let mut task = build_task(&cfg, Box::new(reporter)).context("failed to set up the run")?;
    task.run()?;

    if let Some(export) = &cfg.export {
        task.curve()
            .export(&export.path, export.format)
            .with_context(|| format!("failed to export curve to {}", export.path.display()))?;
        tracing::info!(path = %export.path.display(), format = %export.format, "curve exported");
    }
    Ok(())
}

/// Base config from the wizard, a file or the positional arguments, with
/// command-line flags layered on top.
fn resolve_config(args: AverageArgs) -> Result<RunConfig> {
    let mut cfg = if args.interactive {
        prompt_run_config(&InquireDriver)?
    } else if let Some(path) = &args.config {
        RunConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?
    } else if let Some(path) = args.file {
        RunConfig::new(StreamChoice::File(FileParameters { path }))
    } else if let Some(n) = args.random {
        RunConfig::new(StreamChoice::Uniform(UniformParameters {
            max_values: Some(n),
            seed: args.seed,
            ..UniformParameters::default()
        }))
    } else {
        RunConfig::new(StreamChoice::Tokens(TokensParameters {
            tokens: args.values,
        }))
    };

    if let Some(ms) = args.delay_ms {
        cfg.delay_ms = ms;
    }
    if args.max_values.is_some() {
        cfg.max_values = args.max_values;
    }
    if args.skip_invalid {
        cfg.on_invalid = InvalidPolicy::Skip;
    }
    if let Some(path) = args.export {
        let format = args.format.unwrap_or_else(|| format_from_extension(&path));
        cfg.export = Some(ExportParams { path, format });
    }
    Ok(cfg)
}

fn format_from_extension(path: &Path) -> CurveFormat {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(|e| e.parse().ok())
        .unwrap_or_default()
}
