//! Bubble sort with early exit.

use crate::animation::TraceRecorder;
use crate::schema::Value;

/// Sort `values` in place by adjacent swaps.
///
/// Every pass scans the whole array; sorting stops after the first pass
/// without a swap.
pub fn bubble_sort(values: &mut [Value], recorder: &mut TraceRecorder) {
    let len = values.len();
    if len < 2 {
        return;
    }
    for _ in 0..len {
        let mut swapped = false;
        for j in 0..len - 1 {
            recorder.compare(j, j + 1);
            if values[j] > values[j + 1] {
                recorder.swap(values, j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
