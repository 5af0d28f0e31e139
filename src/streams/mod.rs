pub mod generators;
mod stream;
mod text_file;
mod token_stream;
mod vec_stream;

pub use generators::UniformGenerator;
pub use stream::{ValueStream, Values};
pub use text_file::TextFileStream;
pub(crate) use text_file::split_tokens;
pub use token_stream::TokenStream;
pub use vec_stream::VecStream;
