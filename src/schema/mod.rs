//! Schema module - Configuration, algorithm selection and demo values.

mod algorithm;
mod config;
mod values;

pub use algorithm::*;
pub use config::*;
pub use values::*;
