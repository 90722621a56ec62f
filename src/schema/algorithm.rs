//! Supported sorting algorithms and the decode dialect each one emits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six supported comparison sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Merge,
    Quick,
    Heap,
    Bubble,
    Insertion,
    Selection,
}

/// Interpretation rules for an untagged event stream.
///
/// Which dialect applies is a property of the algorithm that produced the
/// stream; it cannot be recovered from the stream itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Fixed stride of three: compare on, compare off, set.
    Merge,
    /// Sentinel-driven: `(-1, -1)` opens a block of two sets.
    Swap,
}

impl Algorithm {
    /// All algorithms in UI order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
    ];

    /// Decode dialect a consumer must use for this algorithm's stream.
    #[inline]
    pub fn dialect(self) -> Dialect {
        match self {
            Algorithm::Merge => Dialect::Merge,
            _ => Dialect::Swap,
        }
    }

    /// Short lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sort", self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sorting algorithm: {0:?}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower
            .strip_suffix("sort")
            .map(|n| n.trim_end_matches(['_', '-', ' ']))
            .unwrap_or(lower.as_str());
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_merge_uses_merge_dialect() {
        for algorithm in Algorithm::ALL {
            let expected = if algorithm == Algorithm::Merge {
                Dialect::Merge
            } else {
                Dialect::Swap
            };
            assert_eq!(algorithm.dialect(), expected, "{algorithm}");
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("quick".parse::<Algorithm>().unwrap(), Algorithm::Quick);
        assert_eq!("Heap Sort".parse::<Algorithm>().unwrap(), Algorithm::Heap);
        assert_eq!(
            "insertion_sort".parse::<Algorithm>().unwrap(),
            Algorithm::Insertion
        );
        assert_eq!("selectionSort".parse::<Algorithm>().unwrap(), Algorithm::Selection);
        assert!("bogo".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_name_roundtrip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Algorithm::Bubble).unwrap();
        assert_eq!(json, "\"bubble\"");
        let parsed: Algorithm = serde_json::from_str("\"selection\"").unwrap();
        assert_eq!(parsed, Algorithm::Selection);
    }
}
