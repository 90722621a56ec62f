//! Heap sort over an implicit max-heap.

use crate::animation::TraceRecorder;
use crate::schema::Value;

/// Sort `values` in place.
///
/// Builds a max-heap bottom-up, then repeatedly swaps the root to the end
/// and sifts the new root down through the shrinking heap.
pub fn heap_sort(values: &mut [Value], recorder: &mut TraceRecorder) {
    let n = values.len();
    if n < 2 {
        return;
    }
    for root in (0..n / 2).rev() {
        sift_down(values, n, root, recorder);
    }
    for end in (1..n).rev() {
        recorder.swap(values, 0, end);
        sift_down(values, end, 0, recorder);
    }
}

/// Restore the heap property below `root` within the first `len` values.
fn sift_down(values: &mut [Value], len: usize, mut root: usize, recorder: &mut TraceRecorder) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < len {
            recorder.compare(left, largest);
            if values[left] > values[largest] {
                largest = left;
            }
        }
        if right < len {
            recorder.compare(right, largest);
            if values[right] > values[largest] {
                largest = right;
            }
        }
        if largest == root {
            return;
        }
        recorder.swap(values, root, largest);
        root = largest;
    }
}
