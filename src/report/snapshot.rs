use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub values_seen: u64,
    pub value: f64,
    pub mean: f64,
    pub seconds: f64,
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "seen={}, value={}, mean={:.6}, t={:.3}s",
            self.values_seen, self.value, self.mean, self.seconds
        )
    }
}
