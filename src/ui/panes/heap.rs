//! Heap pane rendering with object contents and garbage marking
//!
//! This module renders the simulated heap of a memory-map run: the array
//! under sort plus any temporary buffers, each with its elements. Objects
//! marked garbage stay visible (struck through) until the sweep step removes
//! them, so the two halves of the conceptual GC read as distinct events.

use crate::snapshot::{HeapKind, HeapStatus, MemoryState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Scroll state for the heap pane
#[derive(Default)]
pub struct HeapScrollState {
    pub offset: usize,
    pub prev_item_count: usize,
}

/// Render the heap pane
pub fn render_heap_pane(
    frame: &mut Frame,
    area: Rect,
    memory: Option<&MemoryState>,
    is_focused: bool,
    scroll_state: &mut HeapScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Heap Objects ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let content_width = area.width.saturating_sub(2) as usize; // borders

    let objects = memory.map(|m| m.heap.as_slice()).unwrap_or(&[]);
    let mut all_items = Vec::new();

    if objects.is_empty() {
        all_items.push(
            ListItem::new("(no heap objects)").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    } else {
        for object in objects {
            let is_garbage = object.status == HeapStatus::Garbage;
            let kind_str = match object.kind {
                HeapKind::Array => "array",
                HeapKind::TempArray => "temp",
            };

            let label_style = if is_garbage {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            // Header: "#id label | n elems" with the kind right-aligned
            let left = format!(
                "#{} {} | {} elems",
                object.id,
                object.label,
                object.elements.len()
            );
            let right = if is_garbage {
                format!("{} (garbage)", kind_str)
            } else {
                kind_str.to_string()
            };
            let padding = content_width.saturating_sub(left.len() + right.len());

            let header = Line::from(vec![
                Span::styled(
                    format!("#{} ", object.id),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(object.label.as_str(), label_style),
                Span::styled(" | ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    format!("{} elems", object.elements.len()),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
                Span::raw(" ".repeat(padding)),
                Span::styled(
                    right,
                    if is_garbage {
                        Style::default().fg(DEFAULT_THEME.error)
                    } else {
                        Style::default().fg(DEFAULT_THEME.type_name)
                    },
                ),
            ]);
            all_items.push(ListItem::new(header));

            // Element values, wrapped to the pane width
            let values: Vec<String> = object.elements.iter().map(|v| v.to_string()).collect();
            let per_line = content_width.saturating_sub(4).max(4) / 4;
            let value_style = if is_garbage {
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                Style::default().fg(DEFAULT_THEME.secondary)
            };
            if values.is_empty() {
                all_items.push(ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled("[]", value_style),
                ])));
            } else {
                for (i, chunk) in values.chunks(per_line.max(1)).enumerate() {
                    let open = if i == 0 { "[" } else { " " };
                    let close = if (i + 1) * per_line.max(1) >= values.len() {
                        "]"
                    } else {
                        ","
                    };
                    let line = Line::from(vec![
                        Span::raw("  "),
                        Span::styled(open, Style::default().fg(DEFAULT_THEME.comment)),
                        Span::styled(chunk.join(", "), value_style),
                        Span::styled(close, Style::default().fg(DEFAULT_THEME.comment)),
                    ]);
                    all_items.push(ListItem::new(line));
                }
            }
        }
    }

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Snap to the newest object whenever an allocation or sweep changes the list
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
