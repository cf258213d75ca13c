// Step generators for the searching algorithms
//
// Binary and jump search assume the input is already sorted ascending; the
// dataset layer guarantees that for their runs. A found element ends the run
// immediately, so the `Found` tag only ever appears in a final snapshot.

use super::recorder::Recorder;
use crate::snapshot::{Snapshot, Tag};

pub(crate) fn linear(input: &[i32], target: i32) -> Vec<Snapshot> {
    let mut rec = Recorder::new(input);
    rec.record(&[], format!("Searching for {}", target));
    for i in 0..rec.len() {
        let v = rec.value(i);
        rec.check(i, format!("Checking index {}: {}", i, v));
        if v == target {
            rec.finalize(i, Tag::Found, format!("Found {} at index {}", target, i));
            return rec.finish();
        }
        rec.finalize(i, Tag::Eliminated, format!("{} is not the target", v));
    }
    rec.record(&[], format!("{} is not in the array", target));
    rec.finish()
}

pub(crate) fn binary(input: &[i32], target: i32) -> Vec<Snapshot> {
    let mut rec = Recorder::new(input);
    rec.record(&[], format!("Searching for {}", target));
    let mut lo = 0_i64;
    let mut hi = rec.len() as i64 - 1;
    while lo <= hi {
        let mid = (lo + hi) / 2;
        let mut overlay: Vec<(usize, Tag)> = (lo..=hi)
            .filter(|&k| k != mid)
            .map(|k| (k as usize, Tag::Range))
            .collect();
        overlay.push((mid as usize, Tag::Checking));
        let v = rec.value(mid as usize);
        rec.record(&overlay, format!("Checking middle index {}: {}", mid, v));
        if v == target {
            rec.finalize(
                mid as usize,
                Tag::Found,
                format!("Found {} at index {}", target, mid),
            );
            return rec.finish();
        }
        if v < target {
            rec.finalize_many(
                (lo as usize)..=(mid as usize),
                Tag::Eliminated,
                format!("{} < {}: dropping index {} and everything left of it", v, target, mid),
            );
            lo = mid + 1;
        } else {
            rec.finalize_many(
                (mid as usize)..=(hi as usize),
                Tag::Eliminated,
                format!("{} > {}: dropping index {} and everything right of it", v, target, mid),
            );
            hi = mid - 1;
        }
    }
    rec.record(&[], format!("{} is not in the array", target));
    rec.finish()
}

pub(crate) fn jump(input: &[i32], target: i32) -> Vec<Snapshot> {
    let mut rec = Recorder::new(input);
    rec.record(&[], format!("Searching for {}", target));
    let n = rec.len();
    if n == 0 {
        rec.record(&[], format!("{} is not in the array", target));
        return rec.finish();
    }
    let step = ((n as f64).sqrt() as usize).max(1);
    let mut block_start = 0;
    let mut block_end = step.min(n);
    loop {
        let probe = block_end - 1;
        let v = rec.value(probe);
        let mut overlay = block_overlay(block_start, block_end, probe);
        overlay.push((probe, Tag::Checking));
        rec.record(&overlay, format!("Probing block end index {}: {}", probe, v));
        if v < target {
            rec.finalize_many(
                block_start..block_end,
                Tag::Eliminated,
                format!("Block {}..{} is entirely below {}", block_start, probe, target),
            );
            block_start = block_end;
            if block_start >= n {
                rec.record(&[], format!("{} is not in the array", target));
                return rec.finish();
            }
            block_end = (block_end + step).min(n);
        } else {
            break;
        }
    }
    // Linear scan inside the one block that can still hold the target.
    for i in block_start..block_end {
        let v = rec.value(i);
        let mut overlay = block_overlay(block_start, block_end, i);
        overlay.push((i, Tag::Checking));
        rec.record(&overlay, format!("Scanning index {}: {}", i, v));
        if v == target {
            rec.finalize(i, Tag::Found, format!("Found {} at index {}", target, i));
            return rec.finish();
        }
        if v > target {
            rec.finalize(
                i,
                Tag::Eliminated,
                format!("{} passed {} in a sorted array: target is absent", v, target),
            );
            break;
        }
        rec.finalize(i, Tag::Eliminated, format!("{} is not the target", v));
    }
    let remaining: Vec<usize> = (0..n).filter(|&k| !rec.is_final(k)).collect();
    if !remaining.is_empty() {
        rec.finalize_many(
            remaining,
            Tag::Eliminated,
            "Eliminating the remaining candidates",
        );
    }
    rec.record(&[], format!("{} is not in the array", target));
    rec.finish()
}

fn block_overlay(start: usize, end: usize, skip: usize) -> Vec<(usize, Tag)> {
    (start..end)
        .filter(|&k| k != skip)
        .map(|k| (k, Tag::JumpBlock))
        .collect()
}
