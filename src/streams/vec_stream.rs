use crate::core::{AccumulatorError, Observation};
use crate::streams::ValueStream;
use std::io::Error;

/// Finite stream over an in-memory list of values.
#[derive(Debug, Clone, Default)]
pub struct VecStream {
    values: Vec<Observation>,
    idx: usize,
}

impl VecStream {
    pub fn new(values: Vec<Observation>) -> Self {
        Self { values, idx: 0 }
    }

    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Observation>,
    {
        Self::new(values.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ValueStream for VecStream {
    fn has_more_values(&self) -> bool {
        self.idx < self.values.len()
    }

    fn next_value(&mut self) -> Option<Result<Observation, AccumulatorError>> {
        if !self.has_more_values() {
            return None;
        }

        let v = self.values[self.idx];
        self.idx += 1;
        Some(Ok(v))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stream_yields_nothing() {
        let mut s = VecStream::default();
        assert!(s.is_empty());
        assert!(!s.has_more_values());
        assert!(s.next_value().is_none());
    }

    #[test]
    fn yields_in_order_and_restarts() {
        let mut s = VecStream::from_values([1.5, -2.0]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.next_value(), Some(Ok(Observation::Float(1.5))));
        s.restart().unwrap();
        assert_eq!(s.next_value(), Some(Ok(Observation::Float(1.5))));
        assert_eq!(s.next_value(), Some(Ok(Observation::Float(-2.0))));
        assert!(!s.has_more_values());
    }
}
