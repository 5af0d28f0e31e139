mod reporter;
mod streaming_average;

pub use reporter::{LineReporter, SilentReporter, StepReporter};
pub use streaming_average::{InvalidPolicy, StreamingAverageTask, Summary, TaskError};
