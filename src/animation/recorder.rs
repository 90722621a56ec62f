//! Trace recorder that sorting engines emit into.

use super::decoder::{BarColor, PlaybackStep};
use super::format::{EventPair, TraceEvent, encode};
use crate::schema::{Algorithm, Dialect, Value};

/// Records the animation trace of one engine run.
///
/// Usage:
/// ```ignore
/// let mut recorder = TraceRecorder::new(Algorithm::Bubble);
/// recorder.compare(0, 1);
/// if values[0] > values[1] {
///     recorder.swap(&mut values, 0, 1);
/// }
/// let trace = recorder.finish();
/// ```
#[derive(Debug)]
pub struct TraceRecorder {
    algorithm: Algorithm,
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    /// Create an empty recorder for an algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            events: Vec::new(),
        }
    }

    /// Record that positions `i` and `j` are being compared.
    #[inline]
    pub fn compare(&mut self, i: usize, j: usize) {
        self.events.push(TraceEvent::Compare { i, j });
    }

    /// Record that position `index` now holds `value`.
    #[inline]
    pub fn set(&mut self, index: usize, value: Value) {
        self.events.push(TraceEvent::SetHeight { index, value });
    }

    /// Exchange `values[left]` and `values[right]` and record the swap block.
    ///
    /// The block is emitted even when `left == right`; the exchange is then
    /// a no-op.
    pub fn swap(&mut self, values: &mut [Value], left: usize, right: usize) {
        let old_left = values[left];
        self.events.push(TraceEvent::SwapBegin);
        self.set(left, values[right]);
        self.set(right, old_left);
        self.events.push(TraceEvent::SwapEnd);
        self.compare(left, right);
        values.swap(left, right);
        log::trace!("{}: swap {} <-> {}", self.algorithm, left, right);
    }

    /// Number of tagged events recorded so far.
    pub fn events_recorded(&self) -> usize {
        self.events.len()
    }

    /// Finish recording and hand the trace off.
    pub fn finish(self) -> Trace {
        Trace {
            algorithm: self.algorithm,
            events: self.events,
        }
    }
}

/// Complete, immutable animation trace of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    algorithm: Algorithm,
    events: Vec<TraceEvent>,
}

impl Trace {
    /// Empty trace, as produced for inputs of length 0 or 1.
    pub fn empty(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            events: Vec::new(),
        }
    }

    /// Algorithm that produced this trace.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Dialect needed to decode [`Trace::encode`] output.
    pub fn dialect(&self) -> Dialect {
        self.algorithm.dialect()
    }

    /// Tagged events in emission order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }

    /// Number of tagged events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Length of the untagged encoding.
    pub fn encoded_len(&self) -> usize {
        self.events.iter().map(TraceEvent::encoded_len).sum()
    }

    /// Encode as the untagged pair stream.
    pub fn encode(&self) -> Vec<EventPair> {
        encode(&self.events)
    }

    /// Playback steps, one per encoded pair.
    ///
    /// Identical to decoding [`Trace::encode`] with the trace's dialect.
    pub fn steps(&self) -> Vec<PlaybackStep> {
        let mut steps = Vec::with_capacity(self.encoded_len());
        for event in &self.events {
            match *event {
                TraceEvent::Compare { i, j } => {
                    steps.push(PlaybackStep::Recolor {
                        first: i,
                        second: j,
                        color: BarColor::Highlight,
                    });
                    steps.push(PlaybackStep::Recolor {
                        first: i,
                        second: j,
                        color: BarColor::Base,
                    });
                }
                TraceEvent::SetHeight { index, value } => steps.push(PlaybackStep::Resize {
                    index,
                    height: value,
                }),
                TraceEvent::SwapBegin => steps.push(PlaybackStep::Idle),
                TraceEvent::SwapEnd => {}
            }
        }
        steps
    }

    /// Summary counts for this trace.
    pub fn stats(&self) -> TraceStats {
        let mut stats = TraceStats {
            algorithm: self.algorithm,
            compares: 0,
            sets: 0,
            swaps: 0,
            encoded_len: 0,
        };
        for event in &self.events {
            match event {
                TraceEvent::Compare { .. } => stats.compares += 1,
                TraceEvent::SetHeight { .. } => stats.sets += 1,
                TraceEvent::SwapBegin => stats.swaps += 1,
                TraceEvent::SwapEnd => {}
            }
            stats.encoded_len += event.encoded_len();
        }
        stats
    }
}

/// Statistics of a recorded trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TraceStats {
    /// Algorithm that produced the trace.
    pub algorithm: Algorithm,
    /// Compare events, including swap repaints.
    pub compares: usize,
    /// Set events, including those inside swap blocks.
    pub sets: usize,
    /// Swap blocks.
    pub swaps: usize,
    /// Length of the untagged encoding.
    pub encoded_len: usize,
}

impl std::fmt::Display for TraceStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} compares, {} sets, {} swaps, {} encoded events",
            self.algorithm, self.compares, self.sets, self.swaps, self.encoded_len
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{SWAP_BLOCK_LEN, SWAP_SENTINEL};

    #[test]
    fn test_swap_exchanges_and_records_block() {
        let mut values = vec![10, 20, 30];
        let mut recorder = TraceRecorder::new(Algorithm::Quick);
        recorder.swap(&mut values, 0, 2);

        assert_eq!(values, vec![30, 20, 10]);
        let trace = recorder.finish();
        assert_eq!(
            trace.encode(),
            vec![
                SWAP_SENTINEL,
                EventPair(0, 30),
                EventPair(2, 10),
                EventPair(0, 2),
                EventPair(0, 2),
            ]
        );
    }

    #[test]
    fn test_swap_with_itself_still_emits_block() {
        let mut values = vec![7, 8];
        let mut recorder = TraceRecorder::new(Algorithm::Quick);
        recorder.swap(&mut values, 1, 1);

        assert_eq!(values, vec![7, 8]);
        let trace = recorder.finish();
        assert_eq!(trace.encoded_len(), SWAP_BLOCK_LEN);
        assert_eq!(trace.encode()[1..3], [EventPair(1, 8), EventPair(1, 8)]);
    }

    #[test]
    fn test_steps_one_per_encoded_pair() {
        let mut values = vec![2, 1];
        let mut recorder = TraceRecorder::new(Algorithm::Bubble);
        recorder.compare(0, 1);
        recorder.swap(&mut values, 0, 1);
        let trace = recorder.finish();

        let steps = trace.steps();
        assert_eq!(steps.len(), trace.encoded_len());
        assert_eq!(steps[2], PlaybackStep::Idle);
        assert_eq!(
            steps[3],
            PlaybackStep::Resize {
                index: 0,
                height: 1
            }
        );
    }

    #[test]
    fn test_stats_counts() {
        let mut values = vec![3, 1, 2];
        let mut recorder = TraceRecorder::new(Algorithm::Selection);
        recorder.compare(0, 1);
        recorder.set(2, 9);
        recorder.swap(&mut values, 0, 1);
        let stats = recorder.finish().stats();

        assert_eq!(stats.compares, 2);
        assert_eq!(stats.sets, 3);
        assert_eq!(stats.swaps, 1);
        assert_eq!(stats.encoded_len, 2 + 1 + SWAP_BLOCK_LEN);
        assert!(stats.to_string().starts_with("selection sort:"));
    }

    #[test]
    fn test_empty_trace() {
        let trace = Trace::empty(Algorithm::Heap);
        assert!(trace.is_empty());
        assert!(trace.encode().is_empty());
        assert!(trace.steps().is_empty());
        assert_eq!(trace.dialect(), Dialect::Swap);
    }
}
