//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`bars`]: Bar chart of the current snapshot with per-tag coloring
//! - [`log`]: Operation log accumulated from snapshot messages
//! - [`stack`]: Call stack visualization for memory-map runs
//! - [`heap`]: Heap object display for memory-map runs, garbage included
//! - [`status`]: Status bar with keybindings and playback state
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function plus any associated
//! state types (e.g., `ScrollState`, `RenderData`). Panes are stateless apart
//! from the scroll state threaded in by the caller.

pub mod bars;
pub mod heap;
pub mod log;
pub mod stack;
pub mod status;

// Re-export render functions for convenience
pub use bars::{render_bars_pane, BarsRenderData};
pub use heap::{render_heap_pane, HeapScrollState};
pub use log::render_log_pane;
pub use stack::{render_stack_pane, StackScrollState};
pub use status::render_status_bar;
