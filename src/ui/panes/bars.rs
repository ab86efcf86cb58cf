//! Array pane: one bar per element
//!
//! Bar colors, highest priority first:
//! - found (search hit)
//! - active (indices of the most recent step)
//! - sorted
//! - idle

use crate::engine::board::BoardView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Render the array as a bar chart
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    view: &BoardView,
    max_value: u32,
    show_values: bool,
) {
    let block = Block::default()
        .title(" Array ")
        .title_bottom(legend())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if view.array.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let active: FxHashSet<usize> = view.comparing.iter().copied().collect();
    let sorted: FxHashSet<usize> = view.sorted.iter().copied().collect();
    let found = view.search_result.and_then(|result| result.index());

    let bars: Vec<Bar> = view
        .array
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = if found == Some(i) {
                DEFAULT_THEME.bar_found
            } else if active.contains(&i) {
                DEFAULT_THEME.bar_active
            } else if sorted.contains(&i) {
                DEFAULT_THEME.bar_sorted
            } else {
                DEFAULT_THEME.bar_idle
            };

            let label = if show_values {
                value.to_string()
            } else {
                String::new()
            };

            Bar::default()
                .value(u64::from(value))
                .text_value(label)
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let (bar_width, bar_gap) = bar_geometry(area.width.saturating_sub(2), bars.len());

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(u64::from(max_value.max(1)));

    frame.render_widget(chart, area);
}

/// Widest bars that fit `count` bars (with gaps) into `inner_width` columns
fn bar_geometry(inner_width: u16, count: usize) -> (u16, u16) {
    let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
    let gap = if inner_width / 2 >= count { 1 } else { 0 };
    let width = ((inner_width + gap) / count).saturating_sub(gap).max(1);
    (width, gap)
}

fn legend() -> Line<'static> {
    Line::from(vec![
        Span::styled(" ■ ", Style::default().fg(DEFAULT_THEME.bar_active)),
        Span::styled("active ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled("■ ", Style::default().fg(DEFAULT_THEME.bar_sorted)),
        Span::styled("sorted ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled("■ ", Style::default().fg(DEFAULT_THEME.bar_found)),
        Span::styled("found ", Style::default().fg(DEFAULT_THEME.comment)),
    ])
}
