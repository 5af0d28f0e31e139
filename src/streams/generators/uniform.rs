use std::io::{Error, ErrorKind};

use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;

use crate::core::{AccumulatorError, Observation};
use crate::streams::ValueStream;

/// Seeded generator of floats drawn uniformly from `[low, high)`.
#[derive(Debug)]
pub struct UniformGenerator {
    seed: u64,
    rng: StdRng,
    dist: Uniform<f64>,
    max_values: Option<usize>,
    produced: usize,
}

impl UniformGenerator {
    pub fn new(low: f64, high: f64, max_values: Option<usize>, seed: u64) -> Result<Self, Error> {
        if !low.is_finite() || !high.is_finite() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Bounds must be finite numbers",
            ));
        }
        if low >= high {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Lower bound must be strictly below upper bound",
            ));
        }
        // Rejects bounds whose width overflows to infinity.
        let dist = Uniform::new(low, high).map_err(|e| Error::new(ErrorKind::InvalidInput, e))?;

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            dist,
            max_values,
            produced: 0,
        })
    }
}

impl ValueStream for UniformGenerator {
    fn has_more_values(&self) -> bool {
        self.max_values.is_none_or(|max| self.produced < max)
    }

    fn next_value(&mut self) -> Option<Result<Observation, AccumulatorError>> {
        if !self.has_more_values() {
            return None;
        }

        let x = self.dist.sample(&mut self.rng);
        self.produced += 1;
        Some(Ok(Observation::Float(x)))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}
