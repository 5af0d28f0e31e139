use crate::core::{AccumulatorError, Observation};
use std::io::Error;

/// Pull-based interface for sources that produce numeric values.
///
/// Implementations may represent finite inputs (lists, files, command-line
/// tokens) or bounded generators. Values come out strictly in order, one per
/// call to [`next_value`].
///
/// [`next_value`]: ValueStream::next_value
pub trait ValueStream {
    /// Indicates whether the stream *may* produce more values.
    ///
    /// This call should be cheap and side effect free. If it returns `false`,
    /// a subsequent call to [`next_value`] must return `None`.
    ///
    /// [`next_value`]: ValueStream::next_value
    fn has_more_values(&self) -> bool;

    /// Produces the next value, or `None` once the stream is exhausted.
    ///
    /// A raw item that cannot be read as a number is returned as
    /// `Some(Err(AccumulatorError::InvalidInput { .. }))` carrying its
    /// position; the stream stays usable and the following call moves on to
    /// the next item.
    fn next_value(&mut self) -> Option<Result<Observation, AccumulatorError>>;

    /// Rewinds the stream by re-deriving it from its original source.
    ///
    /// Lists rewind their cursor, files are reopened, generators re-seed.
    /// Returns an error if the underlying source cannot be reopened.
    fn restart(&mut self) -> Result<(), Error>;

    /// Borrowing iterator over the remaining values.
    fn values(&mut self) -> Values<'_, Self>
    where
        Self: Sized,
    {
        Values { stream: self }
    }
}

impl<S: ValueStream + ?Sized> ValueStream for Box<S> {
    fn has_more_values(&self) -> bool {
        (**self).has_more_values()
    }

    fn next_value(&mut self) -> Option<Result<Observation, AccumulatorError>> {
        (**self).next_value()
    }

    fn restart(&mut self) -> Result<(), Error> {
        (**self).restart()
    }
}

/// Iterator returned by [`ValueStream::values`].
pub struct Values<'a, S> {
    stream: &'a mut S,
}

impl<S: ValueStream> Iterator for Values<'_, S> {
    type Item = Result<Observation, AccumulatorError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.stream.next_value()
    }
}
