//! Engine driver - runs one algorithm to completion and returns its trace.

use crate::animation::{Trace, TraceRecorder};
use crate::schema::{Algorithm, Value};

use super::{
    PivotSelector, RandomPivot, bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort,
    selection_sort,
};

/// Run `algorithm` over `values`, sorting them in place.
///
/// Inputs of length 0 or 1 are left untouched and produce an empty trace.
/// `pivots` is only consulted by quick sort.
pub fn run(algorithm: Algorithm, values: &mut [Value], pivots: &mut dyn PivotSelector) -> Trace {
    if values.len() <= 1 {
        log::debug!("{algorithm}: {} values, nothing to animate", values.len());
        return Trace::empty(algorithm);
    }

    let mut recorder = TraceRecorder::new(algorithm);
    match algorithm {
        Algorithm::Merge => merge_sort(values, &mut recorder),
        Algorithm::Quick => quick_sort(values, pivots, &mut recorder),
        Algorithm::Heap => heap_sort(values, &mut recorder),
        Algorithm::Bubble => bubble_sort(values, &mut recorder),
        Algorithm::Insertion => insertion_sort(values, &mut recorder),
        Algorithm::Selection => selection_sort(values, &mut recorder),
    }
    let trace = recorder.finish();

    log::debug!(
        "{algorithm}: {} values -> {} events ({} encoded)",
        values.len(),
        trace.len(),
        trace.encoded_len()
    );
    trace
}

/// Sorting engine owning the pivot source for quick sort.
///
/// Usage:
/// ```ignore
/// let mut engine = SortEngine::seeded(7);
/// let trace = engine.run(Algorithm::Quick, &mut values);
/// let pairs = trace.encode();
/// ```
pub struct SortEngine {
    pivots: Box<dyn PivotSelector + Send>,
}

impl SortEngine {
    /// Engine with deterministic random pivots.
    pub fn seeded(seed: u64) -> Self {
        Self::with_pivots(RandomPivot::new(seed))
    }

    /// Engine with entropy-seeded random pivots.
    pub fn random() -> Self {
        Self::with_pivots(RandomPivot::random())
    }

    /// Engine from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::random(),
        }
    }

    /// Engine with a custom pivot selector.
    pub fn with_pivots<P: PivotSelector + Send + 'static>(pivots: P) -> Self {
        Self {
            pivots: Box::new(pivots),
        }
    }

    /// Run one algorithm; see [`run`].
    pub fn run(&mut self, algorithm: Algorithm, values: &mut [Value]) -> Trace {
        run(algorithm, values, self.pivots.as_mut())
    }
}

impl Default for SortEngine {
    fn default() -> Self {
        Self::random()
    }
}
