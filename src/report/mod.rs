mod curve;
mod snapshot;

pub use curve::{AverageCurve, CurveFormat};
pub use snapshot::Snapshot;
