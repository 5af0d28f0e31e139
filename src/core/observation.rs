use crate::core::AccumulatorError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// A single numeric value fed to an accumulator.
///
/// Integers are kept apart from floats only so they print the way they were
/// given (`Seen 3`, not `Seen 3.0`); arithmetic always happens in `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Observation {
    Int(i64),
    Float(f64),
}

impl Observation {
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Observation::Int(i) => i as f64,
            Observation::Float(x) => x,
        }
    }
}

impl Display for Observation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Observation::Int(i) => write!(f, "{i}"),
            Observation::Float(x) => write!(f, "{x}"),
        }
    }
}

impl FromStr for Observation {
    type Err = AccumulatorError;

    /// Integers first, then finite floats. `NaN` and infinities are not
    /// accepted even though `f64::from_str` knows them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if let Ok(i) = t.parse::<i64>() {
            return Ok(Observation::Int(i));
        }
        match t.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Observation::Float(x)),
            _ => Err(AccumulatorError::invalid(s)),
        }
    }
}

impl TryFrom<&Value> for Observation {
    type Error = AccumulatorError;

    fn try_from(v: &Value) -> Result<Self, Self::Error> {
        match v {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Observation::Int(i))
                } else if let Some(x) = n.as_f64() {
                    Ok(Observation::Float(x))
                } else {
                    Err(AccumulatorError::invalid(n.to_string()))
                }
            }
            other => Err(AccumulatorError::invalid(other.to_string())),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Observation {
            #[inline]
            fn from(v: $t) -> Self {
                Observation::Int(v as i64)
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Observation {
    #[inline]
    fn from(v: f64) -> Self {
        Observation::Float(v)
    }
}

impl From<f32> for Observation {
    #[inline]
    fn from(v: f32) -> Self {
        Observation::Float(v as f64)
    }
}
