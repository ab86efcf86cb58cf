//! Step log pane rendering

use crate::history::StepHistory;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the step log pane.
///
/// `scroll_offset` counts lines from the top; `usize::MAX` follows the tail.
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    history: &StepHistory,
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
        .title(log_title(history))
        .borders(Borders::ALL)
        .border_style(border_style);

    if history.is_empty() {
        let paragraph = Paragraph::new("(no steps yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = history
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>4} ", entry.step),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:<11} ", entry.record.role.label()),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
                Span::styled(
                    entry.record.message.clone(),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ]))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

/// Step count plus how much of the history budget is in use
fn log_title(history: &StepHistory) -> String {
    format!(
        " Steps ({}) {}/{} KiB ",
        history.total_seen(),
        history.memory_usage().div_ceil(1024),
        history.memory_limit() / 1024
    )
}
