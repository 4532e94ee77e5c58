pub mod build;
pub mod tokenize;
pub mod types;

pub use build::{build_from_reader, build_index};
pub use tokenize::tokenize;
pub use types::*;
