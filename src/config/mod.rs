mod build;
mod run_config;
mod stream_choice;

pub use build::{BuildError, build_stream, build_task};
pub use run_config::{ExportParams, RunConfig};
pub use stream_choice::*;
