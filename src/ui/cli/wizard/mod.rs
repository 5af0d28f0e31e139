mod wizard;

pub use wizard::{prompt_run_config, prompt_stream};
