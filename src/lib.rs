//! Sorting Visualizer - Replayable animation traces for comparison sorts.
//!
//! This crate runs one of six sorting algorithms over an array and records
//! every comparison and every write as an animation trace that a separate
//! renderer plays back as bar-height changes and compare highlights.
//!
//! # Architecture
//!
//! The crate is split into three main modules:
//!
//! - `schema`: Configuration, algorithm selection and demo values
//! - `compute`: The sorting engines (merge, quick, heap, bubble, insertion, selection)
//! - `animation`: Trace recording, the untagged pair encoding, decoding and playback
//!
//! # Example
//!
//! ```rust,no_run
//! use sortviz::{
//!     animation::{BarState, Player},
//!     compute::SortEngine,
//!     schema::{Algorithm, VisualizerConfig, generate_values},
//! };
//!
//! let config = VisualizerConfig::default();
//! let original = generate_values(&config.array);
//!
//! // Generate the full trace eagerly
//! let mut values = original.clone();
//! let trace = SortEngine::seeded(7).run(Algorithm::Heap, &mut values);
//!
//! // Legacy consumers get the untagged pair stream
//! let pairs = trace.encode();
//! println!("{} encoded events", pairs.len());
//!
//! // Or play the trace back directly
//! let player = Player::from_trace(&trace, &config.playback);
//! let mut bars = BarState::new(original);
//! player.play(&mut bars).unwrap();
//! assert_eq!(bars.heights, values);
//! ```

pub mod animation;
pub mod compute;
pub mod schema;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use animation::{EventPair, PlaybackStep, Player, Trace, TraceEvent};
pub use compute::{SortEngine, run};
pub use schema::{Algorithm, Dialect, Value, VisualizerConfig};
