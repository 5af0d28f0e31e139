use crate::core::Observation;
use crate::tasks::StepReporter;
use std::io::{Error, ErrorKind};
use std::sync::{Arc, Mutex};

/// Keeps every reported step in a shared buffer the test can read back.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    steps: Arc<Mutex<Vec<(Observation, f64)>>>,
}

impl RecordingReporter {
    pub fn steps(&self) -> Vec<(Observation, f64)> {
        self.steps.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn means(&self) -> Vec<f64> {
        self.steps().into_iter().map(|(_, m)| m).collect()
    }
}

impl StepReporter for RecordingReporter {
    fn report(&mut self, value: Observation, mean: f64) -> Result<(), Error> {
        self.steps
            .lock()
            .map_err(|_| Error::other("recorder poisoned"))?
            .push((value, mean));
        Ok(())
    }
}

/// Fails on every step, for exercising output errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrokenPipeReporter;

impl StepReporter for BrokenPipeReporter {
    fn report(&mut self, _value: Observation, _mean: f64) -> Result<(), Error> {
        Err(Error::new(ErrorKind::BrokenPipe, "reader went away"))
    }
}
