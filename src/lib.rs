//! # Introduction
//!
//! AlgoRhythm re-runs textbook sorting and searching algorithms while
//! recording a snapshot of the visual state at every meaningful step.  The
//! snapshot history is then scrubbed forward and backward through a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Recording pipeline
//!
//! ```text
//! Dataset → Step Generator → Snapshots → Player → TUI
//! ```
//!
//! 1. [`dataset`] — draws a reproducible random input array (and, for
//!    searches, a target value) from a seeded PRNG stream.
//! 2. [`algorithms`] — re-executes the requested algorithm over a copy of the
//!    input, capturing a [`snapshot::Snapshot`] at each comparison, swap,
//!    write, and finalization.
//! 3. [`snapshot`] — the immutable per-step value types: tagged elements plus
//!    the simulated call stack and heap for memory-map runs.
//! 4. [`playback`] — the [`playback::Player`] cursor/timer state machine that
//!    drives auto-advance over a recorded run.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported runs
//!
//! Sorting: bubble, insertion, selection, quick, merge, heap.
//! Searching: linear, binary, jump.
//! Memory map: merge sort and quick sort with stack frames, heap objects,
//! and a conceptual mark/sweep for merge's temporary buffers.

pub mod algorithms;
pub mod dataset;
pub mod playback;
pub mod snapshot;
pub mod ui;
