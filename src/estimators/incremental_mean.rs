use crate::core::{AccumulatorError, Observation};
use crate::estimators::Estimator;
use serde_json::Value;

/// Running arithmetic mean in O(1) space.
///
/// Each new value moves the mean by `(value - mean) / n` written as
/// `mean * (1 - 1/n) + value / n`, so no sum is kept and the history is never
/// stored. After `k >= 1` observations `mean()` is the mean of those `k`
/// values; before the first one it is [`AccumulatorError::EmptySequence`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct IncrementalMean {
    count: u64,
    mean: Option<f64>,
}

impl IncrementalMean {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `value` into the running mean and returns the updated mean.
    pub fn observe<V: Into<Observation>>(&mut self, value: V) -> f64 {
        let x = value.into().as_f64();
        let next = match self.mean {
            None => x,
            Some(mean) => {
                let n = (self.count + 1) as f64;
                mean * (1.0 - 1.0 / n) + x / n
            }
        };
        self.count += 1;
        self.mean = Some(next);
        next
    }

    /// Parses a raw token and observes it. On a non-numeric token the state is
    /// left untouched.
    pub fn observe_token(&mut self, token: &str) -> Result<f64, AccumulatorError> {
        let obs: Observation = token.parse()?;
        Ok(self.observe(obs))
    }

    pub fn observe_json(&mut self, value: &Value) -> Result<f64, AccumulatorError> {
        let obs = Observation::try_from(value)?;
        Ok(self.observe(obs))
    }

    pub fn mean(&self) -> Result<f64, AccumulatorError> {
        self.mean.ok_or(AccumulatorError::EmptySequence)
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Estimator for IncrementalMean {
    #[inline]
    fn add(&mut self, v: f64) {
        self.observe(v);
    }

    #[inline]
    fn estimation(&self) -> f64 {
        self.mean.unwrap_or(f64::NAN)
    }
}

impl<V: Into<Observation>> Extend<V> for IncrementalMean {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for v in iter {
            self.observe(v);
        }
    }
}

impl<V: Into<Observation>> FromIterator<V> for IncrementalMean {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut acc = IncrementalMean::new();
        acc.extend(iter);
        acc
    }
}
