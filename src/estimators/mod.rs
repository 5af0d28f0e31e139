mod estimator;
mod incremental_mean;

pub use estimator::Estimator;
pub use incremental_mean::IncrementalMean;
