//! Quick sort with a pluggable pivot choice and Lomuto-style partition.

use rand::prelude::*;

use crate::animation::TraceRecorder;
use crate::schema::Value;

/// Chooses the pivot index for a partition of `[low, high]`.
pub trait PivotSelector {
    /// Return an index in `[low, high]`.
    fn choose(&mut self, low: usize, high: usize) -> usize;
}

impl<F> PivotSelector for F
where
    F: FnMut(usize, usize) -> usize,
{
    fn choose(&mut self, low: usize, high: usize) -> usize {
        self(low, high)
    }
}

/// Uniformly random pivot.
pub struct RandomPivot {
    rng: StdRng,
}

impl RandomPivot {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl PivotSelector for RandomPivot {
    fn choose(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }
}

/// Sort `values` in place, recording every pivot comparison and swap.
pub fn quick_sort(
    values: &mut [Value],
    pivots: &mut dyn PivotSelector,
    recorder: &mut TraceRecorder,
) {
    if values.len() < 2 {
        return;
    }
    let high = values.len() - 1;
    sort_range(values, 0, high, pivots, recorder);
}

fn sort_range(
    values: &mut [Value],
    low: usize,
    high: usize,
    pivots: &mut dyn PivotSelector,
    recorder: &mut TraceRecorder,
) {
    if high <= low {
        return;
    }
    let pivot = partition(values, low, high, pivots, recorder);
    if pivot > low {
        sort_range(values, low, pivot - 1, pivots, recorder);
    }
    sort_range(values, pivot + 1, high, pivots, recorder);
}

/// Partition `[low, high]` and return the pivot's final index.
fn partition(
    values: &mut [Value],
    low: usize,
    high: usize,
    pivots: &mut dyn PivotSelector,
    recorder: &mut TraceRecorder,
) -> usize {
    let chosen = pivots.choose(low, high);
    debug_assert!((low..=high).contains(&chosen), "pivot {chosen} outside [{low}, {high}]");
    let chosen = chosen.clamp(low, high);

    // Park the pivot at `low` while scanning.
    recorder.swap(values, low, chosen);
    let mut border = low + 1;
    for i in low + 1..=high {
        recorder.compare(i, low);
        if values[i] < values[low] {
            recorder.swap(values, i, border);
            border += 1;
        }
    }
    recorder.swap(values, low, border - 1);
    border - 1
}
