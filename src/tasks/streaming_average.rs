use crate::core::AccumulatorError;
use crate::estimators::IncrementalMean;
use crate::report::{AverageCurve, Snapshot};
use crate::streams::ValueStream;
use crate::tasks::StepReporter;
use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::{Error, ErrorKind};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, Instant};
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// What to do with a value that is not a number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, EnumString, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum InvalidPolicy {
    /// Stop the run and return the error.
    #[default]
    Abort,
    /// Log the bad value and keep going.
    Skip,
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Accumulator(#[from] AccumulatorError),

    #[error(transparent)]
    Io(#[from] Error),
}

/// Outcome of a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub values_seen: u64,
    pub skipped: u64,
    /// `None` when the stream produced no usable value.
    pub mean: Option<f64>,
}

pub struct StreamingAverageTask {
    stream: Box<dyn ValueStream>,
    reporter: Box<dyn StepReporter>,

    curve: AverageCurve,

    max_values: Option<u64>,
    delay: Duration,
    sample_frequency: u64,
    invalid_policy: InvalidPolicy,

    progress_tx: Option<Sender<Snapshot>>,
}

impl StreamingAverageTask {
    pub fn new(
        stream: Box<dyn ValueStream>,
        reporter: Box<dyn StepReporter>,
        sample_frequency: u64,
    ) -> Result<Self, Error> {
        if sample_frequency == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "sample_frequency must be > 0",
            ));
        }

        Ok(Self {
            stream,
            reporter,
            curve: AverageCurve::default(),
            max_values: None,
            delay: Duration::ZERO,
            sample_frequency,
            invalid_policy: InvalidPolicy::default(),
            progress_tx: None,
        })
    }
}

impl StreamingAverageTask {
    pub fn with_max_values(mut self, max_values: Option<u64>) -> Self {
        self.max_values = max_values;
        self
    }

    /// Pause between two observations. Pacing only; results do not depend on it.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_invalid_policy(mut self, policy: InvalidPolicy) -> Self {
        self.invalid_policy = policy;
        self
    }

    pub fn with_progress(mut self, tx: Sender<Snapshot>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    /// Feeds the stream through a fresh accumulator until it is exhausted or
    /// `max_values` values have been observed.
    pub fn run(&mut self) -> Result<Summary, TaskError> {
        let start = Instant::now();
        self.curve = AverageCurve::new(Utc::now());

        let mut acc = IncrementalMean::new();
        let mut skipped = 0u64;
        let mut last_sampled = 0u64;
        let mut last_value = None;

        while self.stream.has_more_values() {
            if let Some(n) = self.max_values {
                if acc.count() >= n {
                    break;
                }
            }
            let Some(next) = self.stream.next_value() else {
                break;
            };
            let value = match next {
                Ok(v) => v,
                Err(e) => match self.invalid_policy {
                    InvalidPolicy::Abort => return Err(e.into()),
                    InvalidPolicy::Skip => {
                        tracing::warn!(error = %e, "skipping value");
                        skipped += 1;
                        continue;
                    }
                },
            };

            if !self.delay.is_zero() && !acc.is_empty() {
                thread::sleep(self.delay);
            }

            let mean = acc.observe(value);
            tracing::debug!(count = acc.count(), %value, mean, "observed");
            self.reporter.report(value, mean)?;
            last_value = Some(value.as_f64());

            if acc.count() % self.sample_frequency == 0 {
                self.push_snapshot(acc.count(), value.as_f64(), mean, start);
                last_sampled = acc.count();
            }
        }

        if let (Some(value), Ok(mean)) = (last_value, acc.mean()) {
            if last_sampled != acc.count() {
                self.push_snapshot(acc.count(), value, mean, start);
            }
        }

        let summary = Summary {
            values_seen: acc.count(),
            skipped,
            mean: acc.mean().ok(),
        };
        tracing::info!(
            values_seen = summary.values_seen,
            skipped = summary.skipped,
            mean = ?summary.mean,
            "stream finished"
        );
        Ok(summary)
    }

    pub fn curve(&self) -> &AverageCurve {
        &self.curve
    }

    fn push_snapshot(&mut self, values_seen: u64, value: f64, mean: f64, start: Instant) {
        let snapshot = Snapshot {
            values_seen,
            value,
            mean,
            seconds: start.elapsed().as_secs_f64(),
        };

        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(snapshot);
        }

        self.curve.push(snapshot);
    }
}
