//! Compute module - Sorting engines that record animation traces.

mod bubble;
mod engine;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::*;
pub use engine::*;
pub use heap::*;
pub use insertion::*;
pub use merge::*;
pub use quick::*;
pub use selection::*;
