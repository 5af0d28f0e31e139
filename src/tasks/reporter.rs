use crate::core::Observation;
use std::io::{Error, Write};

/// Receives every step of a streaming-average run.
pub trait StepReporter {
    fn report(&mut self, value: Observation, mean: f64) -> Result<(), Error>;
}

/// Writes `Seen <value>\tCurrent average is <mean>` per step.
pub struct LineReporter<W: Write> {
    out: W,
}

impl<W: Write> LineReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepReporter for LineReporter<W> {
    fn report(&mut self, value: Observation, mean: f64) -> Result<(), Error> {
        writeln!(self.out, "Seen {value}\tCurrent average is {mean}")?;
        self.out.flush()
    }
}

/// Discards every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl StepReporter for SilentReporter {
    fn report(&mut self, _value: Observation, _mean: f64) -> Result<(), Error> {
        Ok(())
    }
}
