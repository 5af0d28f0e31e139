use crate::config::{BuildError, StreamChoice};
use crate::report::CurveFormat;
use crate::tasks::InvalidPolicy;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_sample_frequency() -> u64 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExportParams {
    #[schemars(
        with = "String",
        title = "Export Path",
        description = "Where to write the sampled curve",
        extend("format" = "path")
    )]
    pub path: PathBuf,

    #[serde(default)]
    #[schemars(title = "Format", description = "csv, tsv or json")]
    pub format: CurveFormat,
}

/// Everything needed to run one streaming average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunConfig {
    pub stream: StreamChoice,

    #[serde(default)]
    #[schemars(
        title = "Delay (ms)",
        description = "Pause between two observations, for pacing only"
    )]
    pub delay_ms: u64,

    #[serde(default)]
    #[schemars(
        title = "Max Values",
        description = "Stop after this many values (None = unlimited)"
    )]
    pub max_values: Option<u64>,

    #[serde(default = "default_sample_frequency")]
    #[schemars(
        title = "Sample Frequency",
        description = "Record a snapshot every N values",
        range(min = 1),
        default = "default_sample_frequency"
    )]
    pub sample_frequency: u64,

    #[serde(default)]
    #[schemars(
        title = "On Invalid",
        description = "abort stops at the first non-numeric value, skip logs and continues"
    )]
    pub on_invalid: InvalidPolicy,

    #[serde(default)]
    #[schemars(title = "Export", description = "Optional curve export")]
    pub export: Option<ExportParams>,
}

impl RunConfig {
    pub fn new(stream: StreamChoice) -> Self {
        Self {
            stream,
            delay_ms: 0,
            max_values: None,
            sample_frequency: default_sample_frequency(),
            on_invalid: InvalidPolicy::default(),
            export: None,
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BuildError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn schema() -> Schema {
        schema_for!(RunConfig)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(StreamChoice::default())
    }
}
