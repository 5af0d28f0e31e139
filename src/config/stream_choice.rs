use crate::core::Observation;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_high() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct ValuesParameters {
    #[schemars(title = "Values", description = "Numbers to average, in order")]
    pub values: Vec<Observation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct TokensParameters {
    #[schemars(
        title = "Tokens",
        description = "Raw text tokens, parsed one at a time as they are consumed"
    )]
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct FileParameters {
    #[schemars(
        with = "String",
        title = "Path",
        description = "Text file with numbers separated by whitespace or commas",
        extend("format" = "path", "x-file" = true, "x-must-exist" = true)
    )]
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UniformParameters {
    #[serde(default)]
    #[schemars(title = "Low", description = "Inclusive lower bound")]
    pub low: f64,

    #[serde(default = "default_high")]
    #[schemars(
        title = "High",
        description = "Exclusive upper bound",
        default = "default_high"
    )]
    pub high: f64,

    #[serde(default)]
    #[schemars(
        title = "Max Values",
        description = "Upper bound on generated values; empty = unbounded"
    )]
    pub max_values: Option<u64>,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for UniformParameters {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: default_high(),
            max_values: Some(100),
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(StreamKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum StreamChoice {
    #[strum_discriminants(strum(
        message = "Values",
        detailed_message = "A fixed list of numbers."
    ))]
    Values(ValuesParameters),

    #[strum_discriminants(strum(
        message = "Tokens",
        detailed_message = "Text tokens parsed lazily, like command-line arguments."
    ))]
    Tokens(TokensParameters),

    #[strum_discriminants(strum(
        message = "Text File",
        detailed_message = "Numbers read line by line from a text file."
    ))]
    File(FileParameters),

    #[strum_discriminants(strum(
        message = "Uniform Generator",
        detailed_message = "Seeded uniform random floats."
    ))]
    Uniform(UniformParameters),
}

impl Default for StreamChoice {
    fn default() -> Self {
        StreamChoice::Tokens(TokensParameters::default())
    }
}
