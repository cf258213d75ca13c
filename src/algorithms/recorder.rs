// Shared recording machinery for the step generators

use crate::snapshot::{Element, MemoryState, Snapshot, Tag};

/// Records snapshots of a working array as an algorithm mutates it.
///
/// The recorder owns the working values plus a parallel list of sticky tags
/// (`Sorted`, `Eliminated`, `Found`). Each recorded snapshot starts from the
/// sticky tags and layers the transient overlay for the operation in flight
/// on top; sticky tags always win, so a finalized element is never visually
/// demoted by a later comparison.
pub(crate) struct Recorder {
    values: Vec<i32>,
    sticky: Vec<Tag>,
    memory: Option<MemoryState>,
    steps: Vec<Snapshot>,
}

impl Recorder {
    pub fn new(input: &[i32]) -> Self {
        Recorder {
            values: input.to_vec(),
            sticky: vec![Tag::Idle; input.len()],
            memory: None,
            steps: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn value(&self, index: usize) -> i32 {
        self.values[index]
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn is_final(&self, index: usize) -> bool {
        self.sticky[index].is_sticky()
    }

    /// Replace the memory view cloned into every subsequent snapshot.
    pub fn set_memory(&mut self, memory: MemoryState) {
        self.memory = Some(memory);
    }

    /// Record one snapshot. Overlay entries are applied in order on top of
    /// the sticky tags (last entry wins among transients) and double as the
    /// snapshot's highlight set.
    pub fn record(&mut self, overlay: &[(usize, Tag)], message: impl Into<String>) {
        self.push(overlay, Some(message.into()));
    }

    /// Record a snapshot with no message, for the quiet half of a two-phase
    /// operation such as the post-swap state.
    pub fn record_unlabeled(&mut self, overlay: &[(usize, Tag)]) {
        self.push(overlay, None);
    }

    /// Snapshot with `i` and `j` tagged `Comparing`.
    pub fn compare(&mut self, i: usize, j: usize, message: impl Into<String>) {
        self.record(&[(i, Tag::Comparing), (j, Tag::Comparing)], message);
    }

    /// Snapshot with `i` tagged `Checking`.
    pub fn check(&mut self, i: usize, message: impl Into<String>) {
        self.record(&[(i, Tag::Checking)], message);
    }

    /// Swap two elements, recording the state before and after with both
    /// positions tagged `Swapping`.
    pub fn swap(&mut self, i: usize, j: usize) {
        let (a, b) = (self.values[i], self.values[j]);
        let overlay = [(i, Tag::Swapping), (j, Tag::Swapping)];
        self.record(&overlay, format!("Swapping {} and {}", a, b));
        self.values.swap(i, j);
        self.sync_main_object();
        self.record_unlabeled(&overlay);
    }

    /// Overwrite one element, recording the state before and after with the
    /// position tagged `Swapping`.
    pub fn write(&mut self, i: usize, value: i32, message: impl Into<String>) {
        let overlay = [(i, Tag::Swapping)];
        self.record(&overlay, message);
        self.values[i] = value;
        self.sync_main_object();
        self.record_unlabeled(&overlay);
    }

    /// Apply a sticky tag to one element and record the new state.
    pub fn finalize(&mut self, i: usize, tag: Tag, message: impl Into<String>) {
        self.sticky[i] = tag;
        self.record(&[(i, tag)], message);
    }

    /// Apply a sticky tag to several elements in a single snapshot.
    pub fn finalize_many(
        &mut self,
        indexes: impl IntoIterator<Item = usize>,
        tag: Tag,
        message: impl Into<String>,
    ) {
        let overlay: Vec<(usize, Tag)> = indexes.into_iter().map(|i| (i, tag)).collect();
        for &(i, _) in &overlay {
            self.sticky[i] = tag;
        }
        self.record(&overlay, message);
    }

    /// Terminal snapshot for a completed sort: every element sticky `Sorted`.
    pub fn complete_sort(mut self) -> Vec<Snapshot> {
        for tag in &mut self.sticky {
            *tag = Tag::Sorted;
        }
        self.record(&[], "Sorting complete");
        self.steps
    }

    pub fn finish(self) -> Vec<Snapshot> {
        self.steps
    }

    fn push(&mut self, overlay: &[(usize, Tag)], message: Option<String>) {
        let mut elements: Vec<Element> = self
            .values
            .iter()
            .zip(&self.sticky)
            .map(|(&value, &tag)| Element { value, tag })
            .collect();
        for &(i, tag) in overlay {
            if !self.sticky[i].is_sticky() {
                elements[i].tag = tag;
            }
        }
        self.steps.push(Snapshot {
            elements,
            message,
            highlights: overlay.iter().map(|&(i, _)| i).collect(),
            memory: self.memory.clone(),
        });
    }

    // The first heap object of a memory-map run is the array under sort, so
    // its elements must track the working values through every mutation.
    fn sync_main_object(&mut self) {
        if let Some(memory) = self.memory.as_mut() {
            if let Some(main) = memory.heap.first_mut() {
                main.elements.clone_from(&self.values);
            }
        }
    }
}
