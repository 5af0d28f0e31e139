use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

use crate::config::{
    ExportParams, FileParameters, RunConfig, StreamChoice, StreamKind, TokensParameters,
    UniformParameters, ValuesParameters,
};
use crate::core::Observation;
use crate::report::CurveFormat;
use crate::streams::split_tokens;
use crate::tasks::InvalidPolicy;
use crate::ui::cli::drivers::PromptDriver;

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_labels<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            (k, text)
        })
        .collect()
}

/// Walks the user through every field of a [`RunConfig`].
pub fn prompt_run_config<D: PromptDriver>(driver: &D) -> Result<RunConfig> {
    let stream = prompt_stream(driver)?;
    let mut cfg = RunConfig::new(stream);

    cfg.delay_ms = driver.ask_u64(
        "Delay (ms)",
        "Pause between two observations",
        0,
        None,
        None,
    )?;
    cfg.max_values = ask_optional_u64(driver, "Max Values", "Stop after this many values")?;
    cfg.sample_frequency = driver.ask_u64(
        "Sample Frequency",
        "Record a snapshot every N values",
        1,
        Some(1),
        None,
    )?;
    cfg.on_invalid = if driver.ask_bool(
        "Skip invalid values?",
        "No stops at the first value that is not a number",
        false,
    )? {
        InvalidPolicy::Skip
    } else {
        InvalidPolicy::Abort
    };

    if driver.ask_bool("Export curve?", "Write the sampled means to a file", false)? {
        let formats: Vec<CurveFormat> = CurveFormat::iter().collect();
        let labels: Vec<String> = formats.iter().map(|f| f.to_string()).collect();
        let idx = driver.ask_select("Format", "", &labels)?;
        let format = *formats.get(idx).context("format selection out of range")?;
        let default_path = format!("curve.{format}");
        let path = driver.ask_string("Export Path", "Where to write the curve", &default_path)?;
        cfg.export = Some(ExportParams {
            path: PathBuf::from(path.trim()),
            format,
        });
    }

    Ok(cfg)
}

pub fn prompt_stream<D: PromptDriver>(driver: &D) -> Result<StreamChoice> {
    let kinds = kind_labels::<StreamKind>();
    let labels: Vec<String> = kinds.iter().map(|(_, t)| t.clone()).collect();
    let idx = driver.ask_select("Choose a stream:", "↑/↓ to navigate, ↵ to select", &labels)?;
    let (kind, _) = kinds.get(idx).context("stream selection out of range")?;

    let choice = match kind {
        StreamKind::Values => StreamChoice::Values(ValuesParameters {
            values: prompt_values_until_ok(driver)?,
        }),
        StreamKind::Tokens => {
            let raw = driver.ask_string(
                "Tokens",
                "Separated by spaces or commas; parsed while streaming",
                "",
            )?;
            StreamChoice::Tokens(TokensParameters {
                tokens: split_tokens(&raw).collect(),
            })
        }
        StreamKind::File => StreamChoice::File(FileParameters {
            path: prompt_path_until_ok(driver, "Path", "Text file with numbers", "")?,
        }),
        StreamKind::Uniform => {
            let defaults = UniformParameters::default();
            let low = driver.ask_f64("Low", "Inclusive lower bound", defaults.low, None, None)?;
            let high = driver.ask_f64("High", "Exclusive upper bound", defaults.high, None, None)?;
            let max_values = ask_optional_u64(driver, "Max Values", "Values to generate")?;
            let seed = driver.ask_u64("Seed", "PRNG seed", defaults.seed, None, None)?;
            StreamChoice::Uniform(UniformParameters {
                low,
                high,
                max_values,
                seed,
            })
        }
    };
    Ok(choice)
}

fn ask_optional_u64<D: PromptDriver>(driver: &D, title: &str, help: &str) -> Result<Option<u64>> {
    let answer = driver.ask_string(title, &format!("{help}\n(leave blank for none)"), "")?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }
    let n: u64 = answer
        .parse()
        .with_context(|| format!("invalid integer for {title}"))?;
    Ok(Some(n))
}

fn prompt_values_until_ok<D: PromptDriver>(driver: &D) -> Result<Vec<Observation>> {
    loop {
        let raw = driver.ask_string("Values", "Numbers separated by spaces or commas", "")?;
        let parsed: Result<Vec<Observation>, _> = split_tokens(&raw)
            .enumerate()
            .map(|(i, t)| t.parse::<Observation>().map_err(|e| e.at_position(i)))
            .collect();
        match parsed {
            Ok(values) => return Ok(values),
            Err(e) => eprintln!("✗ {e}"),
        }
    }
}

fn validate_path_str(input: &str) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    Ok(())
}

fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_path_str(&answer) {
            Ok(()) => return Ok(PathBuf::from(answer.trim())),
            Err(msg) => {
                eprintln!("✗ {}", msg);
            }
        }
    }
}
