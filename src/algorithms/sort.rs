// Step generators for the sorting algorithms
//
// Every generator moves values exclusively by swapping, so the multiset of
// values in each recorded snapshot equals the multiset of the input. Merge
// sort keeps that property by rotating the right-run head into place with
// adjacent swaps instead of copying through a buffer; the buffer-based
// variant lives in the memory-map generators.

use super::recorder::Recorder;
use crate::snapshot::{Snapshot, Tag};

pub(crate) fn bubble(input: &[i32]) -> Vec<Snapshot> {
    let mut rec = Recorder::new(input);
    rec.record(&[], "Initial array");
    let n = rec.len();
    for pass in 0..n.saturating_sub(1) {
        let limit = n - 1 - pass;
        for i in 0..limit {
            let (a, b) = (rec.value(i), rec.value(i + 1));
            rec.compare(i, i + 1, format!("Comparing {} and {}", a, b));
            if a > b {
                rec.swap(i, i + 1);
            }
        }
        let v = rec.value(limit);
        rec.finalize(limit, Tag::Sorted, format!("{} settled into final position", v));
    }
    if n > 0 {
        let v = rec.value(0);
        rec.finalize(0, Tag::Sorted, format!("{} settled into final position", v));
    }
    rec.complete_sort()
}

pub(crate) fn insertion(input: &[i32]) -> Vec<Snapshot> {
    let mut rec = Recorder::new(input);
    rec.record(&[], "Initial array");
    let n = rec.len();
    for i in 1..n {
        // The key bubbles left past every strictly greater predecessor,
        // shifting each one right as it goes.
        let mut j = i;
        while j > 0 {
            let (left, key) = (rec.value(j - 1), rec.value(j));
            rec.compare(j - 1, j, format!("Comparing {} and {}", left, key));
            if left > key {
                rec.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }
    }
    rec.complete_sort()
}

pub(crate) fn selection(input: &[i32]) -> Vec<Snapshot> {
    let mut rec = Recorder::new(input);
    rec.record(&[], "Initial array");
    let n = rec.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            let (candidate, current) = (rec.value(j), rec.value(min));
            rec.compare(
                j,
                min,
                format!("Comparing {} with current minimum {}", candidate, current),
            );
            // Strict comparison keeps the first occurrence on ties.
            if candidate < current {
                min = j;
            }
        }
        if min != i {
            rec.swap(i, min);
        }
        let v = rec.value(i);
        rec.finalize(i, Tag::Sorted, format!("{} settled into final position", v));
    }
    if n > 0 {
        let v = rec.value(n - 1);
        rec.finalize(n - 1, Tag::Sorted, format!("{} settled into final position", v));
    }
    rec.complete_sort()
}

pub(crate) fn quick(input: &[i32]) -> Vec<Snapshot> {
    let mut rec = Recorder::new(input);
    rec.record(&[], "Initial array");
    let n = rec.len();
    if n > 0 {
        quick_range(&mut rec, 0, n - 1);
    }
    rec.complete_sort()
}

fn quick_range(rec: &mut Recorder, lo: usize, hi: usize) {
    if lo == hi {
        let v = rec.value(lo);
        rec.finalize(lo, Tag::Sorted, format!("{} settled into final position", v));
        return;
    }
    let p = partition(rec, lo, hi);
    if p > lo {
        quick_range(rec, lo, p - 1);
    }
    if p < hi {
        quick_range(rec, p + 1, hi);
    }
}

// Lomuto partition around the last element of the range.
fn partition(rec: &mut Recorder, lo: usize, hi: usize) -> usize {
    let pivot = rec.value(hi);
    rec.record(&[(hi, Tag::Comparing)], format!("Choosing pivot {}", pivot));
    let mut boundary = lo;
    for j in lo..hi {
        let v = rec.value(j);
        rec.compare(j, hi, format!("Comparing {} with pivot {}", v, pivot));
        if v < pivot {
            if boundary != j {
                rec.swap(boundary, j);
            }
            boundary += 1;
        }
    }
    if boundary != hi {
        rec.swap(boundary, hi);
    }
    rec.finalize(
        boundary,
        Tag::Sorted,
        format!("Pivot {} placed at index {}", pivot, boundary),
    );
    boundary
}

pub(crate) fn merge(input: &[i32]) -> Vec<Snapshot> {
    let mut rec = Recorder::new(input);
    rec.record(&[], "Initial array");
    let n = rec.len();
    if n > 1 {
        merge_range(&mut rec, 0, n - 1);
    }
    rec.complete_sort()
}

fn merge_range(rec: &mut Recorder, lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    merge_range(rec, lo, mid);
    merge_range(rec, mid + 1, hi);
    merge_runs(rec, lo, mid, hi);
}

// In-place merge: when the right head wins a comparison it is rotated into
// position with adjacent swaps, shifting the rest of the left run one step
// right. Ties prefer the left run.
fn merge_runs(rec: &mut Recorder, lo: usize, mut mid: usize, hi: usize) {
    rec.record(
        &[],
        format!("Merging runs {}..{} and {}..{}", lo, mid, mid + 1, hi),
    );
    let mut i = lo;
    let mut j = mid + 1;
    while i <= mid && j <= hi {
        let (a, b) = (rec.value(i), rec.value(j));
        rec.compare(i, j, format!("Comparing {} and {}", a, b));
        if a <= b {
            i += 1;
        } else {
            let mut k = j;
            while k > i {
                rec.swap(k - 1, k);
                k -= 1;
            }
            i += 1;
            mid += 1;
            j += 1;
        }
    }
}

pub(crate) fn heap(input: &[i32]) -> Vec<Snapshot> {
    let mut rec = Recorder::new(input);
    rec.record(&[], "Initial array");
    let n = rec.len();
    if n > 1 {
        rec.record(&[], "Building max-heap");
        for root in (0..n / 2).rev() {
            sift_down(&mut rec, root, n);
        }
        rec.record(&[], "Max-heap built");
        for end in (1..n).rev() {
            rec.swap(0, end);
            let v = rec.value(end);
            rec.finalize(end, Tag::Sorted, format!("{} extracted to final position", v));
            sift_down(&mut rec, 0, end);
        }
    }
    if n > 0 {
        let v = rec.value(0);
        rec.finalize(0, Tag::Sorted, format!("{} settled into final position", v));
    }
    rec.complete_sort()
}

fn sift_down(rec: &mut Recorder, mut root: usize, len: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= len {
            break;
        }
        let mut child = left;
        let right = left + 1;
        if right < len {
            let (a, b) = (rec.value(left), rec.value(right));
            rec.compare(left, right, format!("Comparing children {} and {}", a, b));
            if b > a {
                child = right;
            }
        }
        let (parent, largest) = (rec.value(root), rec.value(child));
        rec.compare(
            root,
            child,
            format!("Comparing {} with child {}", parent, largest),
        );
        if largest > parent {
            rec.swap(root, child);
            root = child;
        } else {
            break;
        }
    }
}
