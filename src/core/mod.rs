mod error;
mod observation;

pub use error::AccumulatorError;
pub use observation::Observation;
