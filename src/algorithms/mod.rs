// Algorithm registry and step-generation entry points

mod memory;
mod recorder;
mod search;
mod sort;

use std::fmt;

use crate::snapshot::Snapshot;

/// Every algorithm the step generator implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    BubbleSort,
    InsertionSort,
    SelectionSort,
    QuickSort,
    MergeSort,
    HeapSort,
    LinearSearch,
    BinarySearch,
    JumpSearch,
    MergeSortMemory,
    QuickSortMemory,
}

/// Broad family an algorithm belongs to. Drives dataset preparation (sorted
/// input, target choice) and the pane layout in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sorting,
    Searching,
    MemoryMap,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Sorting => "sorting",
            Category::Searching => "searching",
            Category::MemoryMap => "memory map",
        }
    }
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 11] = [
        AlgorithmId::BubbleSort,
        AlgorithmId::InsertionSort,
        AlgorithmId::SelectionSort,
        AlgorithmId::QuickSort,
        AlgorithmId::MergeSort,
        AlgorithmId::HeapSort,
        AlgorithmId::LinearSearch,
        AlgorithmId::BinarySearch,
        AlgorithmId::JumpSearch,
        AlgorithmId::MergeSortMemory,
        AlgorithmId::QuickSortMemory,
    ];

    /// Stable identifier used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmId::BubbleSort => "bubble-sort",
            AlgorithmId::InsertionSort => "insertion-sort",
            AlgorithmId::SelectionSort => "selection-sort",
            AlgorithmId::QuickSort => "quick-sort",
            AlgorithmId::MergeSort => "merge-sort",
            AlgorithmId::HeapSort => "heap-sort",
            AlgorithmId::LinearSearch => "linear-search",
            AlgorithmId::BinarySearch => "binary-search",
            AlgorithmId::JumpSearch => "jump-search",
            AlgorithmId::MergeSortMemory => "merge-sort-memory",
            AlgorithmId::QuickSortMemory => "quick-sort-memory",
        }
    }

    /// Display name for the status bar and the `--list` catalog.
    pub fn label(self) -> &'static str {
        match self {
            AlgorithmId::BubbleSort => "Bubble Sort",
            AlgorithmId::InsertionSort => "Insertion Sort",
            AlgorithmId::SelectionSort => "Selection Sort",
            AlgorithmId::QuickSort => "Quick Sort",
            AlgorithmId::MergeSort => "Merge Sort",
            AlgorithmId::HeapSort => "Heap Sort",
            AlgorithmId::LinearSearch => "Linear Search",
            AlgorithmId::BinarySearch => "Binary Search",
            AlgorithmId::JumpSearch => "Jump Search",
            AlgorithmId::MergeSortMemory => "Merge Sort (memory map)",
            AlgorithmId::QuickSortMemory => "Quick Sort (memory map)",
        }
    }

    pub fn category(self) -> Category {
        match self {
            AlgorithmId::BubbleSort
            | AlgorithmId::InsertionSort
            | AlgorithmId::SelectionSort
            | AlgorithmId::QuickSort
            | AlgorithmId::MergeSort
            | AlgorithmId::HeapSort => Category::Sorting,
            AlgorithmId::LinearSearch | AlgorithmId::BinarySearch | AlgorithmId::JumpSearch => {
                Category::Searching
            }
            AlgorithmId::MergeSortMemory | AlgorithmId::QuickSortMemory => Category::MemoryMap,
        }
    }

    pub fn parse(id: &str) -> Option<AlgorithmId> {
        AlgorithmId::ALL.iter().copied().find(|a| a.as_str() == id)
    }

    /// Searching algorithms need a target value.
    pub fn needs_target(self) -> bool {
        self.category() == Category::Searching
    }

    /// Binary and jump search only make sense over sorted input.
    pub fn needs_sorted_input(self) -> bool {
        matches!(self, AlgorithmId::BinarySearch | AlgorithmId::JumpSearch)
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run `algorithm` over `input` and return the full snapshot list.
///
/// The generator is pure: the same input, algorithm, and target always yield
/// the same snapshots. A search run without an explicit target gets a value
/// guaranteed absent from the input.
pub fn generate(input: &[i32], algorithm: AlgorithmId, target: Option<i32>) -> Vec<Snapshot> {
    match algorithm {
        AlgorithmId::BubbleSort => sort::bubble(input),
        AlgorithmId::InsertionSort => sort::insertion(input),
        AlgorithmId::SelectionSort => sort::selection(input),
        AlgorithmId::QuickSort => sort::quick(input),
        AlgorithmId::MergeSort => sort::merge(input),
        AlgorithmId::HeapSort => sort::heap(input),
        AlgorithmId::LinearSearch => {
            search::linear(input, target.unwrap_or_else(|| absent_target(input)))
        }
        AlgorithmId::BinarySearch => {
            search::binary(input, target.unwrap_or_else(|| absent_target(input)))
        }
        AlgorithmId::JumpSearch => {
            search::jump(input, target.unwrap_or_else(|| absent_target(input)))
        }
        AlgorithmId::MergeSortMemory => memory::merge_sort(input),
        AlgorithmId::QuickSortMemory => memory::quick_sort(input),
    }
}

fn absent_target(input: &[i32]) -> i32 {
    input.iter().copied().max().map_or(0, |m| m + 1)
}

/// Resolve a raw identifier and generate its run. Unknown identifiers yield
/// a short placeholder run instead of an error, so the UI always has
/// something to show.
pub fn generate_for_id(id: &str, input: &[i32], target: Option<i32>) -> Vec<Snapshot> {
    match AlgorithmId::parse(id) {
        Some(algorithm) => generate(input, algorithm, target),
        None => placeholder(id, input),
    }
}

fn placeholder(id: &str, input: &[i32]) -> Vec<Snapshot> {
    let mut rec = recorder::Recorder::new(input);
    rec.record(&[], "Initial array");
    rec.record(&[], format!("'{}' is not implemented yet", id));
    rec.finish()
}
