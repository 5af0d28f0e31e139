pub mod recording_reporter;
pub mod scripted_stream;

pub use recording_reporter::{BrokenPipeReporter, RecordingReporter};
pub use scripted_stream::ScriptedStream;
