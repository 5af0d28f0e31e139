use crate::core::{AccumulatorError, Observation};
use crate::streams::ValueStream;
use std::io::Error;

/// Stream over raw text tokens, typically command-line arguments.
///
/// Tokens are parsed lazily: a token is only looked at when it is pulled, so
/// a bad token further down does not stop the values before it.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<String>,
    idx: usize,
}

impl TokenStream {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            idx: 0,
        }
    }
}

impl ValueStream for TokenStream {
    fn has_more_values(&self) -> bool {
        self.idx < self.tokens.len()
    }

    fn next_value(&mut self) -> Option<Result<Observation, AccumulatorError>> {
        let token = self.tokens.get(self.idx)?;
        let pos = self.idx;
        self.idx += 1;
        Some(
            token
                .parse::<Observation>()
                .map_err(|e| e.at_position(pos)),
        )
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
