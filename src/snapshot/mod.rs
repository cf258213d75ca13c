// Snapshot data model for step-recorded algorithm runs

use std::fmt;

/// Visual status attached to an array element at one recorded instant.
///
/// Sorting runs use `Idle`, `Comparing`, `Swapping`, and `Sorted`; searching
/// runs use `Idle`, `Checking`, `Found`, `Eliminated`, `Range`, and
/// `JumpBlock`. `Sorted`, `Eliminated`, and `Found` are sticky: once an
/// element carries one of them it keeps it in every later snapshot of the
/// run. The remaining tags describe only the operation in flight and last a
/// single snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    /// No special status.
    #[default]
    Idle,
    /// Element is being compared against another (sorting).
    Comparing,
    /// Element is being moved by a swap or write.
    Swapping,
    /// Element has reached its final sorted position.
    Sorted,
    /// Element is being inspected (searching).
    Checking,
    /// Element matched the search target. Terminal: no snapshot follows.
    Found,
    /// Element can no longer be the search target.
    Eliminated,
    /// Element lies inside the current binary-search candidate range.
    Range,
    /// Element lies inside the current jump-search block.
    JumpBlock,
}

impl Tag {
    /// Whether this tag persists for the rest of the run once applied.
    pub fn is_sticky(self) -> bool {
        matches!(self, Tag::Sorted | Tag::Eliminated | Tag::Found)
    }
}

/// One array element as captured in a snapshot: its value plus visual tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub value: i32,
    pub tag: Tag,
}

/// One recorded visual state of an algorithm run.
///
/// Snapshots are immutable once appended to a run: each one is a full copy of
/// the working state at that instant, so earlier snapshots stay valid while
/// the generator keeps mutating its working array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The full array at this instant, each element carrying its tag.
    pub elements: Vec<Element>,
    /// Human-readable description of the operation just performed.
    pub message: Option<String>,
    /// Element positions relevant to the current operation.
    pub highlights: Vec<usize>,
    /// Simulated call stack and heap, present only for memory-map runs.
    pub memory: Option<MemoryState>,
}

impl Snapshot {
    /// The bare values of all elements, in order.
    pub fn values(&self) -> Vec<i32> {
        self.elements.iter().map(|e| e.value).collect()
    }

    pub fn tag_at(&self, index: usize) -> Option<Tag> {
        self.elements.get(index).map(|e| e.tag)
    }

    /// Index of the element tagged `Found`, if any.
    pub fn found_index(&self) -> Option<usize> {
        self.elements.iter().position(|e| e.tag == Tag::Found)
    }

    /// True when every element is tagged `Sorted` (vacuously true if empty).
    pub fn all_sorted(&self) -> bool {
        self.elements.iter().all(|e| e.tag == Tag::Sorted)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Simulated call stack and heap carried by memory-map snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemoryState {
    /// Active stack frames, outermost first.
    pub frames: Vec<StackFrame>,
    /// Heap objects, including any marked garbage but not yet swept.
    pub heap: Vec<HeapObject>,
}

/// A function activation record in the memory-map simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub id: u32,
    pub function: String,
    /// Locals in declaration order. Values are updated in place so the
    /// display order stays stable while a frame is live.
    pub locals: Vec<(String, Local)>,
}

impl StackFrame {
    pub fn new(id: u32, function: impl Into<String>) -> Self {
        StackFrame {
            id,
            function: function.into(),
            locals: Vec::new(),
        }
    }

    /// Insert or update a local, preserving declaration order.
    pub fn set_local(&mut self, name: &str, value: Local) {
        if let Some(slot) = self.locals.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            self.locals.push((name.to_string(), value));
        }
    }
}

/// A local variable value in the memory-map simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Local {
    Int(i32),
    Null,
    /// Reference to the heap object with this id.
    Ref(u32),
}

impl fmt::Display for Local {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Local::Int(n) => write!(f, "{}", n),
            Local::Null => write!(f, "NULL"),
            Local::Ref(id) => write!(f, "→ #{}", id),
        }
    }
}

/// What a heap object represents in the memory-map simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    /// The array being sorted.
    Array,
    /// A temporary buffer allocated mid-run (merge scratch space).
    TempArray,
}

/// Lifecycle state of a heap object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapStatus {
    Alive,
    /// Unreachable and awaiting the sweep step of the conceptual GC.
    Garbage,
}

/// An object on the simulated heap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapObject {
    pub id: u32,
    pub label: String,
    pub kind: HeapKind,
    pub elements: Vec<i32>,
    pub status: HeapStatus,
}
