//! Animation traces: recording, encoding, decoding and playback.
//!
//! Engines record a tagged [`Trace`] through a [`TraceRecorder`]. The trace
//! can be played back directly, or encoded into the compact untagged pair
//! stream that browser players consume.
//!
//! # Untagged stream
//!
//! ```text
//! Compare:     (i, j) (i, j)          highlight on, highlight off
//! Set:         (index, value)         bar index takes height value
//! Swap block:  (-1, -1)               sentinel
//!              (left, values[right])  set
//!              (right, old_left)      set
//!              (left, right) x2       repaint compare
//! ```
//!
//! Merge sort never swaps, so its stream is a fixed stride of
//! compare/compare/set. The in-place algorithms need the sentinel-driven
//! decoder. Which [`Dialect`](crate::schema::Dialect) applies is known only
//! from the algorithm that produced the stream.

mod decoder;
mod format;
mod player;
mod recorder;

pub use decoder::{BarColor, DecodeError, MergeDecoder, PlaybackStep, SwapDecoder, decode};
pub use format::{EventPair, MERGE_STRIDE, SWAP_BLOCK_LEN, SWAP_SENTINEL, TraceEvent, encode};
pub use player::{BarState, PlaybackError, PlaybackOutcome, Player, Renderer};
pub use recorder::{Trace, TraceRecorder, TraceStats};
