//! Insertion sort by repeated adjacent swaps.

use crate::animation::TraceRecorder;
use crate::schema::Value;

/// Sort `values` in place, shifting each new element left while its
/// neighbour is greater.
pub fn insertion_sort(values: &mut [Value], recorder: &mut TraceRecorder) {
    for i in 1..values.len() {
        let mut j = i;
        recorder.compare(j, i);
        while j > 0 && values[j - 1] > values[j] {
            recorder.compare(j, i);
            recorder.swap(values, j, j - 1);
            j -= 1;
        }
    }
}
