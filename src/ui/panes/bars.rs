//! Bar chart pane rendering for the current snapshot
//!
//! Each array element becomes a vertical bar whose height is proportional to
//! its value and whose color comes from the element's tag. A marker row under
//! the chart points at the indices the current operation touches, and search
//! runs get a dashed rule across the chart at the target's height.

use crate::snapshot::{Snapshot, Tag};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the bars pane
pub struct BarsRenderData<'a> {
    /// Snapshot at the playback cursor, if a run has been generated
    pub snapshot: Option<&'a Snapshot>,
    /// Dataset values shown before any run exists
    pub fallback: &'a [i32],
    /// Search target, shown in the pane title
    pub target: Option<i32>,
}

/// Render the bars pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, data: BarsRenderData, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = match data.target {
        Some(target) => format!(" Array (target {}) ", target),
        None => String::from(" Array "),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let elements: Vec<(i32, Tag)> = match data.snapshot {
        Some(snapshot) => snapshot.elements.iter().map(|e| (e.value, e.tag)).collect(),
        None => data.fallback.iter().map(|&v| (v, Tag::Idle)).collect(),
    };

    if elements.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    if inner_width == 0 || inner_height == 0 {
        frame.render_widget(block, area);
        return;
    }

    // Reserve one row under the bars for highlight markers when there is room
    let marker_row = inner_height >= 3;
    let chart_height = if marker_row {
        inner_height - 1
    } else {
        inner_height
    };

    // Widest bar that still fits every element: bars shrink to single columns
    // before any element is clipped off the right edge
    let slot = (inner_width / elements.len()).max(1);
    let (bar_width, gap) = if slot > 1 { (slot - 1, 1) } else { (1, 0) };
    let visible = if gap == 1 {
        elements.len()
    } else {
        elements.len().min(inner_width)
    };

    let max_value = elements.iter().map(|&(v, _)| v).max().unwrap_or(1).max(1) as usize;

    // Proportional integer heights, rounded up so positive values always show
    let heights: Vec<usize> = elements[..visible]
        .iter()
        .map(|&(value, _)| scaled_row(value, chart_height, max_value))
        .collect();

    // Row of the target rule. Off-scale targets (absent-target runs aim just
    // above the maximum) draw nothing; the title still names them.
    let target_row = data.target.and_then(|target| {
        let row = scaled_row(target, chart_height, max_value);
        (1..=chart_height).contains(&row).then_some(row)
    });
    let rule_style = Style::default().fg(DEFAULT_THEME.secondary);

    let mut lines: Vec<Line> = Vec::with_capacity(inner_height);
    for row in (1..=chart_height).rev() {
        let on_rule = target_row == Some(row);
        let mut spans: Vec<Span> = Vec::with_capacity(visible * 2);
        for (i, &(_, tag)) in elements[..visible].iter().enumerate() {
            if heights[i] >= row {
                spans.push(Span::styled(
                    "█".repeat(bar_width),
                    Style::default().fg(DEFAULT_THEME.tag_color(tag)),
                ));
            } else if on_rule {
                spans.push(Span::styled("┄".repeat(bar_width), rule_style));
            } else {
                spans.push(Span::raw(" ".repeat(bar_width)));
            }
            if gap == 1 && i + 1 < visible {
                if on_rule {
                    spans.push(Span::styled("┄", rule_style));
                } else {
                    spans.push(Span::raw(" "));
                }
            }
        }
        lines.push(Line::from(spans));
    }

    if marker_row {
        let highlights = data
            .snapshot
            .map(|s| s.highlights.as_slice())
            .unwrap_or(&[]);
        let mut spans: Vec<Span> = Vec::with_capacity(visible * 2);
        for i in 0..visible {
            let cell = if highlights.contains(&i) {
                format!("{:^1$}", "▲", bar_width)
            } else {
                " ".repeat(bar_width)
            };
            spans.push(Span::styled(
                cell,
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ));
            if gap == 1 && i + 1 < visible {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Chart row a value reaches, rounded up so positive values always show.
/// Bars and the target rule share this scale, so a bar whose value equals
/// the target exactly meets the rule.
fn scaled_row(value: i32, chart_height: usize, max_value: usize) -> usize {
    let clamped = value.max(0) as usize;
    (clamped * chart_height + max_value - 1) / max_value
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_scaled_rows() {
        assert_eq!(scaled_row(99, 10, 99), 10);
        assert_eq!(scaled_row(50, 10, 99), 6);
        assert_eq!(scaled_row(1, 10, 99), 1);
        assert_eq!(scaled_row(0, 10, 99), 0);
        // Just above the maximum lands off-scale
        assert_eq!(scaled_row(100, 10, 99), 11);
    }

    fn rule_cells(values: &[i32], target: Option<i32>) -> usize {
        let backend = TestBackend::new(22, 12);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| {
                let data = BarsRenderData {
                    snapshot: None,
                    fallback: values,
                    target,
                };
                render_bars_pane(frame, frame.area(), data, false);
            })
            .expect("draw");

        let buffer = terminal.backend().buffer();
        let mut count = 0;
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if buffer.get(x, y).symbol() == "┄" {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_target_rule_rendered() {
        assert!(rule_cells(&[10, 20, 30, 40], Some(20)) > 0);
    }

    #[test]
    fn test_no_rule_without_target() {
        assert_eq!(rule_cells(&[10, 20, 30, 40], None), 0);
    }

    #[test]
    fn test_absent_target_draws_no_rule() {
        assert_eq!(rule_cells(&[10, 20, 30, 40], Some(41)), 0);
    }
}
