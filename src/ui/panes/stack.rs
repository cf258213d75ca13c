//! Stack pane rendering with call frames and locals
//!
//! This module renders the simulated call stack of a memory-map run: one
//! entry per live frame, outermost first, with the frame's locals listed in
//! declaration order underneath.

use crate::snapshot::{Local, MemoryState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Scroll state for the stack pane
#[derive(Default)]
pub struct StackScrollState {
    pub offset: usize,
    pub prev_item_count: usize,
}

/// Render the stack pane
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    memory: Option<&MemoryState>,
    is_focused: bool,
    scroll_state: &mut StackScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Call Stack ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let frames = memory.map(|m| m.frames.as_slice()).unwrap_or(&[]);
    let mut all_items = Vec::new();

    if frames.is_empty() {
        all_items.push(
            ListItem::new("(no active frames)").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    } else {
        for (depth, stack_frame) in frames.iter().enumerate() {
            // Emphasized frame header with box-drawing characters
            let frame_header = Line::from(vec![
                Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    format!("Frame {} ", depth),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    format!("{}()", stack_frame.function),
                    Style::default()
                        .fg(DEFAULT_THEME.function)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            all_items.push(ListItem::new(frame_header));

            for (name, value) in &stack_frame.locals {
                let value_style = match value {
                    Local::Int(_) => Style::default().fg(DEFAULT_THEME.secondary),
                    Local::Null => Style::default().fg(DEFAULT_THEME.comment),
                    Local::Ref(_) => Style::default().fg(DEFAULT_THEME.type_name),
                };
                let line = Line::from(vec![
                    Span::raw("    "),
                    Span::styled(name.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
                    Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
                    Span::styled(value.to_string(), value_style),
                ]);
                all_items.push(ListItem::new(line));
            }
        }
    }

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Snap to the newest frame whenever the stack grows or shrinks
    if total_items != scroll_state.prev_item_count {
        scroll_state.prev_item_count = total_items;
        scroll_state.offset = total_items.saturating_sub(visible_height);
    }

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        scroll_state.offset = scroll_state.offset.min(max_scroll);
    } else {
        scroll_state.offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
