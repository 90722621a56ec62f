//! Selection sort.

use crate::animation::TraceRecorder;
use crate::schema::Value;

/// Sort `values` in place, placing the minimum of the remainder at each
/// position. Swaps only when the minimum is elsewhere.
pub fn selection_sort(values: &mut [Value], recorder: &mut TraceRecorder) {
    let n = values.len();
    for i in 0..n {
        let mut min_index = i;
        for j in i..n {
            recorder.compare(j, min_index);
            if values[j] < values[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            recorder.swap(values, i, min_index);
        }
    }
}
