mod error;
mod loader;

pub use error::{LoadErr, Result};
pub use loader::SampleLoader;
