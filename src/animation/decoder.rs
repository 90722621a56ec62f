//! Decoders turning the untagged pair stream back into playback steps.
//!
//! Both dialects produce exactly one [`PlaybackStep`] per input pair so that
//! playback timing is the same whichever path the steps came from.

use serde::{Deserialize, Serialize};

use super::format::EventPair;
use crate::schema::{Dialect, Value};

/// Color a compared bar pair is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarColor {
    /// Compare in progress.
    Highlight,
    /// Resting color.
    Base,
}

/// One observable playback effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackStep {
    /// Paint two bars.
    Recolor {
        first: usize,
        second: usize,
        color: BarColor,
    },
    /// Change one bar's height.
    Resize { index: usize, height: Value },
    /// Nothing to draw this tick (the swap sentinel).
    Idle,
}

/// Errors raised while decoding a pair stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Swap sentinel at position {position} in a merge-dialect stream")]
    SentinelInMergeStream { position: usize },
    #[error("Swap sentinel at position {position} inside an open swap block")]
    NestedSwap { position: usize },
    #[error("Negative index in pair ({a}, {b}) at position {position}")]
    NegativeIndex { position: usize, a: i64, b: i64 },
    #[error("Merge-dialect stream of length {len} is not a multiple of 3")]
    TruncatedMergeGroup { len: usize },
    #[error("Stream of length {len} ends inside a swap block")]
    UnterminatedSwap { len: usize },
}

fn index(raw: i64, pair: EventPair, position: usize) -> Result<usize, DecodeError> {
    usize::try_from(raw).map_err(|_| DecodeError::NegativeIndex {
        position,
        a: pair.0,
        b: pair.1,
    })
}

/// Stateless fixed-stride decoder for merge sort streams.
#[derive(Debug, Default, Clone)]
pub struct MergeDecoder {
    position: usize,
}

impl MergeDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next pair.
    pub fn push(&mut self, pair: EventPair) -> Result<PlaybackStep, DecodeError> {
        let position = self.position;
        if pair.is_sentinel() {
            return Err(DecodeError::SentinelInMergeStream { position });
        }
        let step = match position % 3 {
            2 => PlaybackStep::Resize {
                index: index(pair.0, pair, position)?,
                height: pair.1,
            },
            phase => PlaybackStep::Recolor {
                first: index(pair.0, pair, position)?,
                second: index(pair.1, pair, position)?,
                color: if phase == 0 {
                    BarColor::Highlight
                } else {
                    BarColor::Base
                },
            },
        };
        self.position += 1;
        Ok(step)
    }

    /// Check that the stream ended on a group boundary.
    pub fn finish(&self) -> Result<(), DecodeError> {
        if self.position % 3 != 0 {
            return Err(DecodeError::TruncatedMergeGroup { len: self.position });
        }
        Ok(())
    }
}

/// Sentinel-driven decoder for the in-place algorithms.
#[derive(Debug, Default, Clone)]
pub struct SwapDecoder {
    position: usize,
    in_swap: bool,
    sets_seen: u8,
    compares_seen: u8,
}

impl SwapDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the two sets of a swap block are still pending.
    pub fn in_swap(&self) -> bool {
        self.in_swap
    }

    /// Decode the next pair.
    pub fn push(&mut self, pair: EventPair) -> Result<PlaybackStep, DecodeError> {
        let position = self.position;
        let step = if pair.is_sentinel() {
            if self.in_swap {
                return Err(DecodeError::NestedSwap { position });
            }
            self.in_swap = true;
            PlaybackStep::Idle
        } else if self.in_swap {
            let step = PlaybackStep::Resize {
                index: index(pair.0, pair, position)?,
                height: pair.1,
            };
            self.sets_seen += 1;
            if self.sets_seen == 2 {
                self.in_swap = false;
                self.sets_seen = 0;
            }
            step
        } else {
            let first = index(pair.0, pair, position)?;
            let second = index(pair.1, pair, position)?;
            self.compares_seen += 1;
            let color = if self.compares_seen == 1 {
                BarColor::Highlight
            } else {
                BarColor::Base
            };
            if self.compares_seen == 2 {
                self.compares_seen = 0;
            }
            PlaybackStep::Recolor {
                first,
                second,
                color,
            }
        };
        self.position += 1;
        Ok(step)
    }

    /// Check that no swap block is left open.
    pub fn finish(&self) -> Result<(), DecodeError> {
        if self.in_swap {
            return Err(DecodeError::UnterminatedSwap { len: self.position });
        }
        Ok(())
    }
}

/// Decode a whole stream with the given dialect.
pub fn decode(pairs: &[EventPair], dialect: Dialect) -> Result<Vec<PlaybackStep>, DecodeError> {
    let mut steps = Vec::with_capacity(pairs.len());
    match dialect {
        Dialect::Merge => {
            let mut decoder = MergeDecoder::new();
            for &pair in pairs {
                steps.push(decoder.push(pair)?);
            }
            decoder.finish()?;
        }
        Dialect::Swap => {
            let mut decoder = SwapDecoder::new();
            for &pair in pairs {
                steps.push(decoder.push(pair)?);
            }
            decoder.finish()?;
        }
    }
    Ok(steps)
}
