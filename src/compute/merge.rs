//! Merge sort through a ping-pong auxiliary buffer.

use crate::animation::TraceRecorder;
use crate::schema::Value;

/// Sort `values` in place, recording compares and direct sets.
///
/// Never uses the swap primitive, so the trace decodes with the merge
/// dialect: every placement is compare, compare, set.
pub fn merge_sort(values: &mut [Value], recorder: &mut TraceRecorder) {
    if values.len() < 2 {
        return;
    }
    let end = values.len() - 1;
    let mut auxiliary = values.to_vec();
    sort_range(values, &mut auxiliary, 0, end, recorder);
}

/// Sort `[start, end]` of `main`, using `auxiliary` as the merge source.
///
/// Sub-ranges are sorted into `auxiliary` with the roles swapped, so both
/// buffers must hold the same values on entry.
fn sort_range(
    main: &mut [Value],
    auxiliary: &mut [Value],
    start: usize,
    end: usize,
    recorder: &mut TraceRecorder,
) {
    if start == end {
        return;
    }
    let middle = (start + end) / 2;
    sort_range(auxiliary, main, start, middle, recorder);
    sort_range(auxiliary, main, middle + 1, end, recorder);
    merge(main, auxiliary, start, middle, end, recorder);
}

fn merge(
    main: &mut [Value],
    auxiliary: &[Value],
    start: usize,
    middle: usize,
    end: usize,
    recorder: &mut TraceRecorder,
) {
    let mut k = start;
    let mut i = start;
    let mut j = middle + 1;

    while i <= middle && j <= end {
        recorder.compare(i, j);
        let next = if auxiliary[i] <= auxiliary[j] {
            i += 1;
            auxiliary[i - 1]
        } else {
            j += 1;
            auxiliary[j - 1]
        };
        recorder.set(k, next);
        main[k] = next;
        k += 1;
    }

    // One run is exhausted; the other drains with self-compares.
    while i <= middle {
        recorder.compare(i, i);
        recorder.set(k, auxiliary[i]);
        main[k] = auxiliary[i];
        i += 1;
        k += 1;
    }
    while j <= end {
        recorder.compare(j, j);
        recorder.set(k, auxiliary[j]);
        main[k] = auxiliary[j];
        j += 1;
        k += 1;
    }
}
