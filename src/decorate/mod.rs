mod decorator;

pub use decorator::{Decorated, Invoke, decorate, polite};
