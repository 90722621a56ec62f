//! Event vocabulary and the untagged pair encoding consumed by legacy players.

use serde::{Deserialize, Serialize};

use crate::schema::Value;

/// Pair announcing that the next two entries are the sets of a swap.
pub const SWAP_SENTINEL: EventPair = EventPair(-1, -1);

/// Encoded length of one swap: sentinel, two sets, repaint on and off.
pub const SWAP_BLOCK_LEN: usize = 5;

/// Group size of the merge dialect: compare on, compare off, set.
pub const MERGE_STRIDE: usize = 3;

/// One entry of the untagged stream.
///
/// Serializes as a two-element array, `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventPair(pub i64, pub i64);

impl EventPair {
    /// Compare-shaped entry for two indices.
    #[inline]
    pub fn compare(i: usize, j: usize) -> Self {
        Self(i as i64, j as i64)
    }

    /// Set-shaped entry: index and its new value.
    #[inline]
    pub fn set(index: usize, value: Value) -> Self {
        Self(index as i64, value)
    }

    /// Check whether this is the swap sentinel.
    #[inline]
    pub fn is_sentinel(self) -> bool {
        self == SWAP_SENTINEL
    }
}

impl From<(i64, i64)> for EventPair {
    fn from((a, b): (i64, i64)) -> Self {
        Self(a, b)
    }
}

impl From<EventPair> for (i64, i64) {
    fn from(pair: EventPair) -> Self {
        (pair.0, pair.1)
    }
}

/// Tagged trace event recorded by the sorting engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Highlight two positions, then revert them.
    Compare { i: usize, j: usize },
    /// Position `index` now holds `value`.
    SetHeight { index: usize, value: Value },
    /// Opens a swap block.
    SwapBegin,
    /// Closes a swap block after its two sets. Has no encoded form.
    SwapEnd,
}

impl TraceEvent {
    /// Number of untagged pairs this event encodes to.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        match self {
            TraceEvent::Compare { .. } => 2,
            TraceEvent::SetHeight { .. } | TraceEvent::SwapBegin => 1,
            TraceEvent::SwapEnd => 0,
        }
    }

    /// Append the untagged encoding of this event.
    pub fn encode_into(&self, out: &mut Vec<EventPair>) {
        match *self {
            TraceEvent::Compare { i, j } => {
                // Once to highlight, once to revert.
                out.push(EventPair::compare(i, j));
                out.push(EventPair::compare(i, j));
            }
            TraceEvent::SetHeight { index, value } => out.push(EventPair::set(index, value)),
            TraceEvent::SwapBegin => out.push(SWAP_SENTINEL),
            TraceEvent::SwapEnd => {}
        }
    }
}

/// Encode tagged events into the untagged pair stream.
pub fn encode(events: &[TraceEvent]) -> Vec<EventPair> {
    let len = events.iter().map(TraceEvent::encoded_len).sum();
    let mut out = Vec::with_capacity(len);
    for event in events {
        event.encode_into(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_encodes_twice() {
        let pairs = encode(&[TraceEvent::Compare { i: 3, j: 1 }]);
        assert_eq!(pairs, vec![EventPair(3, 1), EventPair(3, 1)]);
    }

    #[test]
    fn test_swap_block_shape() {
        let events = [
            TraceEvent::SwapBegin,
            TraceEvent::SetHeight { index: 0, value: 40 },
            TraceEvent::SetHeight { index: 2, value: 10 },
            TraceEvent::SwapEnd,
            TraceEvent::Compare { i: 0, j: 2 },
        ];
        let pairs = encode(&events);
        assert_eq!(pairs.len(), SWAP_BLOCK_LEN);
        assert_eq!(
            pairs,
            vec![
                SWAP_SENTINEL,
                EventPair(0, 40),
                EventPair(2, 10),
                EventPair(0, 2),
                EventPair(0, 2),
            ]
        );
    }

    #[test]
    fn test_pair_serializes_as_array() {
        let json = serde_json::to_string(&vec![SWAP_SENTINEL, EventPair(4, 250)]).unwrap();
        assert_eq!(json, "[[-1,-1],[4,250]]");
        let parsed: Vec<EventPair> = serde_json::from_str("[[0,1],[-1,-1]]").unwrap();
        assert_eq!(parsed, vec![EventPair(0, 1), SWAP_SENTINEL]);
    }

    #[test]
    fn test_tagged_event_json() {
        let json = serde_json::to_string(&TraceEvent::SetHeight { index: 2, value: 17 }).unwrap();
        assert_eq!(json, r#"{"type":"set_height","index":2,"value":17}"#);
    }

    #[test]
    fn test_sentinel_detection() {
        assert!(EventPair::from((-1, -1)).is_sentinel());
        assert!(!EventPair(-1, 0).is_sentinel());
        assert!(!EventPair::set(0, 5).is_sentinel());
    }
}
