mod uniform;

pub use uniform::UniformGenerator;
