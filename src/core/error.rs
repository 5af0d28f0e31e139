use thiserror::Error;

/// Errors raised while feeding values into an accumulator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccumulatorError {
    /// A value could not be read as a number. `position` is the zero-based
    /// index of the value in its stream, when known.
    #[error("invalid input{}: {input:?} is not a number", at(.position))]
    InvalidInput {
        input: String,
        position: Option<usize>,
    },

    /// The mean was read before any value was observed.
    #[error("empty sequence: no value has been observed yet")]
    EmptySequence,
}

fn at(position: &Option<usize>) -> String {
    position.map(|p| format!(" at position {p}")).unwrap_or_default()
}

impl AccumulatorError {
    pub fn invalid<S: Into<String>>(input: S) -> Self {
        AccumulatorError::InvalidInput {
            input: input.into(),
            position: None,
        }
    }

    /// Attaches a stream position to an `InvalidInput`; other variants are
    /// returned unchanged.
    pub fn at_position(self, pos: usize) -> Self {
        match self {
            AccumulatorError::InvalidInput { input, .. } => AccumulatorError::InvalidInput {
                input,
                position: Some(pos),
            },
            other => other,
        }
    }
}
