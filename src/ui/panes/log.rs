//! Operation log pane rendering
//!
//! Shows the messages of every snapshot up to the playback cursor, oldest
//! first, so scrubbing backward also rewinds the log.

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the operation log pane
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &[Snapshot],
    cursor: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Operations ")
        .borders(Borders::ALL)
        .border_style(border_style);

    // Entries for snapshots 0..=cursor that carry a message
    let entries: Vec<(usize, &str)> = steps
        .iter()
        .take(cursor.saturating_add(1))
        .enumerate()
        .filter_map(|(i, s)| s.message.as_deref().map(|m| (i, m)))
        .collect();

    if entries.is_empty() {
        let paragraph = Paragraph::new("(no steps yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = entries
        .iter()
        .map(|&(step, message)| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:>4} ", step),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(message, Style::default().fg(DEFAULT_THEME.fg)),
            ]);
            ListItem::new(line)
        })
        .collect();

    // Calculate visible range for scrolling
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    // Take only visible items
    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
