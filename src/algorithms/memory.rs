// Memory-map step generators
//
// These run merge sort and quick sort while simulating the call stack and
// heap alongside the array. Merge sort allocates its scratch buffers as heap
// objects and retires them with an explicit mark event followed by a sweep
// event; quick sort partitions in place, so its runs never allocate and its
// stack frames are the whole story.

use rustc_hash::FxHashMap;

use super::recorder::Recorder;
use crate::snapshot::{HeapKind, HeapObject, HeapStatus, Local, MemoryState, Snapshot, StackFrame, Tag};

/// Simulated call stack and heap.
struct MemorySim {
    frames: Vec<StackFrame>,
    heap: Vec<HeapObject>,
    slots: FxHashMap<u32, usize>,
    next_frame_id: u32,
    next_object_id: u32,
}

impl MemorySim {
    fn new() -> Self {
        MemorySim {
            frames: Vec::new(),
            heap: Vec::new(),
            slots: FxHashMap::default(),
            next_frame_id: 0,
            next_object_id: 0,
        }
    }

    fn alloc(&mut self, label: String, kind: HeapKind, elements: Vec<i32>) -> u32 {
        let id = self.next_object_id;
        self.next_object_id += 1;
        self.slots.insert(id, self.heap.len());
        self.heap.push(HeapObject {
            id,
            label,
            kind,
            elements,
            status: HeapStatus::Alive,
        });
        id
    }

    fn mark_garbage(&mut self, ids: &[u32]) {
        for id in ids {
            if let Some(&slot) = self.slots.get(id) {
                self.heap[slot].status = HeapStatus::Garbage;
            }
        }
    }

    /// Drop every object marked garbage. Returns how many were swept.
    fn sweep(&mut self) -> usize {
        let before = self.heap.len();
        self.heap.retain(|obj| obj.status == HeapStatus::Alive);
        self.slots = self
            .heap
            .iter()
            .enumerate()
            .map(|(slot, obj)| (obj.id, slot))
            .collect();
        before - self.heap.len()
    }

    fn push_frame(&mut self, function: &str) {
        let id = self.next_frame_id;
        self.next_frame_id += 1;
        self.frames.push(StackFrame::new(id, function));
    }

    fn pop_frame(&mut self) {
        self.frames.pop();
    }

    fn set_local(&mut self, name: &str, value: Local) {
        if let Some(frame) = self.frames.last_mut() {
            frame.set_local(name, value);
        }
    }

    /// Clone the current state with the main array object (always the first
    /// allocation) refreshed from the recorder's working values.
    fn state_with(&self, values: &[i32]) -> MemoryState {
        let mut state = MemoryState {
            frames: self.frames.clone(),
            heap: self.heap.clone(),
        };
        if let Some(main) = state.heap.first_mut() {
            main.elements = values.to_vec();
        }
        state
    }
}

/// A `Recorder` paired with a `MemorySim`. Every recorded step first pushes
/// the current stack and heap into the recorder so the snapshot carries them.
struct MemoryRun {
    rec: Recorder,
    sim: MemorySim,
}

impl MemoryRun {
    fn new(input: &[i32]) -> Self {
        let mut sim = MemorySim::new();
        sim.alloc("arr".to_string(), HeapKind::Array, input.to_vec());
        let mut rec = Recorder::new(input);
        rec.set_memory(sim.state_with(input));
        MemoryRun { rec, sim }
    }

    fn refresh(&mut self) {
        let state = self.sim.state_with(self.rec.values());
        self.rec.set_memory(state);
    }

    fn record(&mut self, overlay: &[(usize, Tag)], message: impl Into<String>) {
        self.refresh();
        self.rec.record(overlay, message);
    }

    fn compare(&mut self, i: usize, j: usize, message: impl Into<String>) {
        self.refresh();
        self.rec.compare(i, j, message);
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.refresh();
        self.rec.swap(i, j);
    }

    fn write(&mut self, i: usize, value: i32, message: impl Into<String>) {
        self.refresh();
        self.rec.write(i, value, message);
    }

    fn finalize(&mut self, i: usize, tag: Tag, message: impl Into<String>) {
        self.refresh();
        self.rec.finalize(i, tag, message);
    }

    /// Push a frame with its initial locals and record the call.
    fn call(&mut self, function: &str, locals: &[(&str, Local)], message: impl Into<String>) {
        self.sim.push_frame(function);
        for &(name, value) in locals {
            self.sim.set_local(name, value);
        }
        self.record(&[], message);
    }

    /// Pop the top frame and record the return.
    fn ret(&mut self, message: impl Into<String>) {
        self.sim.pop_frame();
        self.record(&[], message);
    }

    fn set_local(&mut self, name: &str, value: Local) {
        self.sim.set_local(name, value);
    }

    /// Allocate a temporary buffer, bind it to a local, and record the event.
    fn alloc(&mut self, local: &str, label: String, elements: Vec<i32>) -> u32 {
        let len = elements.len();
        let message = format!("Allocated {} ({} elements)", label, len);
        let id = self.sim.alloc(label, HeapKind::TempArray, elements);
        self.sim.set_local(local, Local::Ref(id));
        self.record(&[], message);
        id
    }

    /// Retire buffers in two recorded events: mark, then sweep.
    fn collect_garbage(&mut self, ids: &[u32]) {
        self.sim.mark_garbage(ids);
        self.record(
            &[],
            format!("Marked {} unreachable buffers as garbage", ids.len()),
        );
        let swept = self.sim.sweep();
        self.record(&[], format!("Swept {} garbage buffers", swept));
    }

    fn value(&self, i: usize) -> i32 {
        self.rec.value(i)
    }

    fn values(&self) -> &[i32] {
        self.rec.values()
    }

    fn len(&self) -> usize {
        self.rec.len()
    }

    fn complete_sort(mut self) -> Vec<Snapshot> {
        self.refresh();
        self.rec.complete_sort()
    }
}

pub(crate) fn merge_sort(input: &[i32]) -> Vec<Snapshot> {
    let mut run = MemoryRun::new(input);
    run.record(&[], "Initial array");
    let n = run.len();
    if n > 1 {
        merge_sort_call(&mut run, 0, n - 1);
    }
    run.complete_sort()
}

fn merge_sort_call(run: &mut MemoryRun, lo: usize, hi: usize) {
    run.call(
        "merge_sort",
        &[
            ("lo", Local::Int(lo as i32)),
            ("hi", Local::Int(hi as i32)),
            ("mid", Local::Null),
        ],
        format!("Calling merge_sort({}, {})", lo, hi),
    );
    if lo >= hi {
        run.ret(format!("merge_sort({}, {}) returned: single element", lo, hi));
        return;
    }
    let mid = lo + (hi - lo) / 2;
    run.set_local("mid", Local::Int(mid as i32));
    run.record(&[], format!("Split at mid = {}", mid));
    merge_sort_call(run, lo, mid);
    merge_sort_call(run, mid + 1, hi);
    merge_call(run, lo, mid, hi);
    run.ret(format!("merge_sort({}, {}) returned", lo, hi));
}

fn merge_call(run: &mut MemoryRun, lo: usize, mid: usize, hi: usize) {
    run.call(
        "merge",
        &[
            ("lo", Local::Int(lo as i32)),
            ("mid", Local::Int(mid as i32)),
            ("hi", Local::Int(hi as i32)),
            ("left", Local::Null),
            ("right", Local::Null),
        ],
        format!("Calling merge({}, {}, {})", lo, mid, hi),
    );
    let left: Vec<i32> = run.values()[lo..=mid].to_vec();
    let right: Vec<i32> = run.values()[mid + 1..=hi].to_vec();
    let left_id = run.alloc("left", format!("left[{}..{}]", lo, mid), left.clone());
    let right_id = run.alloc("right", format!("right[{}..{}]", mid + 1, hi), right.clone());

    let (mut i, mut j, mut k) = (0, 0, lo);
    run.set_local("i", Local::Int(0));
    run.set_local("j", Local::Int(0));
    run.set_local("k", Local::Int(lo as i32));
    while i < left.len() && j < right.len() {
        let (a, b) = (left[i], right[j]);
        // Slots below k already hold merged output, not the compared values.
        let overlay: Vec<(usize, Tag)> = [lo + i, mid + 1 + j]
            .into_iter()
            .filter(|&p| p >= k)
            .map(|p| (p, Tag::Comparing))
            .collect();
        run.record(&overlay, format!("Comparing {} and {}", a, b));
        if a <= b {
            run.write(k, a, format!("Writing {} from left buffer to index {}", a, k));
            i += 1;
            run.set_local("i", Local::Int(i as i32));
        } else {
            run.write(k, b, format!("Writing {} from right buffer to index {}", b, k));
            j += 1;
            run.set_local("j", Local::Int(j as i32));
        }
        k += 1;
        run.set_local("k", Local::Int(k as i32));
    }
    while i < left.len() {
        let a = left[i];
        run.write(k, a, format!("Draining {} from left buffer to index {}", a, k));
        i += 1;
        k += 1;
        run.set_local("i", Local::Int(i as i32));
        run.set_local("k", Local::Int(k as i32));
    }
    while j < right.len() {
        let b = right[j];
        run.write(k, b, format!("Draining {} from right buffer to index {}", b, k));
        j += 1;
        k += 1;
        run.set_local("j", Local::Int(j as i32));
        run.set_local("k", Local::Int(k as i32));
    }
    run.ret(format!("merge({}, {}, {}) returned", lo, mid, hi));
    run.collect_garbage(&[left_id, right_id]);
}

pub(crate) fn quick_sort(input: &[i32]) -> Vec<Snapshot> {
    let mut run = MemoryRun::new(input);
    run.record(&[], "Initial array");
    let n = run.len();
    if n > 0 {
        quick_sort_call(&mut run, 0, n - 1);
    }
    run.complete_sort()
}

fn quick_sort_call(run: &mut MemoryRun, lo: usize, hi: usize) {
    run.call(
        "quick_sort",
        &[
            ("lo", Local::Int(lo as i32)),
            ("hi", Local::Int(hi as i32)),
            ("p", Local::Null),
        ],
        format!("Calling quick_sort({}, {})", lo, hi),
    );
    if lo == hi {
        let v = run.value(lo);
        run.finalize(lo, Tag::Sorted, format!("{} settled into final position", v));
        run.ret(format!("quick_sort({}, {}) returned", lo, hi));
        return;
    }
    let p = partition_call(run, lo, hi);
    run.set_local("p", Local::Int(p as i32));
    run.record(&[], format!("Pivot landed at index {}", p));
    if p > lo {
        quick_sort_call(run, lo, p - 1);
    }
    if p < hi {
        quick_sort_call(run, p + 1, hi);
    }
    run.ret(format!("quick_sort({}, {}) returned", lo, hi));
}

fn partition_call(run: &mut MemoryRun, lo: usize, hi: usize) -> usize {
    let pivot = run.value(hi);
    run.call(
        "partition",
        &[
            ("lo", Local::Int(lo as i32)),
            ("hi", Local::Int(hi as i32)),
            ("pivot", Local::Int(pivot)),
            ("b", Local::Int(lo as i32)),
        ],
        format!("Calling partition({}, {})", lo, hi),
    );
    run.record(&[(hi, Tag::Comparing)], format!("Choosing pivot {}", pivot));
    let mut boundary = lo;
    for j in lo..hi {
        let v = run.value(j);
        run.compare(j, hi, format!("Comparing {} with pivot {}", v, pivot));
        if v < pivot {
            if boundary != j {
                run.swap(boundary, j);
            }
            boundary += 1;
            run.set_local("b", Local::Int(boundary as i32));
        }
    }
    if boundary != hi {
        run.swap(boundary, hi);
    }
    run.finalize(
        boundary,
        Tag::Sorted,
        format!("Pivot {} placed at index {}", pivot, boundary),
    );
    run.ret(format!("partition({}, {}) returned {}", lo, hi, boundary));
    boundary
}
