use crate::core::{AccumulatorError, Observation};
use crate::streams::ValueStream;
use std::io::Error;

/// Replays a fixed script of results, errors included.
pub struct ScriptedStream {
    script: Vec<Result<Observation, AccumulatorError>>,
    idx: usize,
}

impl ScriptedStream {
    pub fn new(script: Vec<Result<Observation, AccumulatorError>>) -> Self {
        Self { script, idx: 0 }
    }

    /// Integers, with `None` standing for a token that fails to parse.
    pub fn with_gaps(items: &[Option<i64>]) -> Self {
        let script = items
            .iter()
            .enumerate()
            .map(|(pos, item)| match item {
                Some(v) => Ok(Observation::Int(*v)),
                None => Err(AccumulatorError::invalid("?").at_position(pos)),
            })
            .collect();
        Self::new(script)
    }
}

impl ValueStream for ScriptedStream {
    fn has_more_values(&self) -> bool {
        self.idx < self.script.len()
    }

    fn next_value(&mut self) -> Option<Result<Observation, AccumulatorError>> {
        let item = self.script.get(self.idx)?.clone();
        self.idx += 1;
        Some(item)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
