//! Algorithm info pane: complexity table, fun fact and run settings

use crate::algorithms::{catalog, AlgorithmId, AlgorithmKind};
use crate::engine::pacing::delay_for_speed;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the info pane
pub struct InfoRenderData<'a> {
    pub algorithm: AlgorithmId,
    pub speed: u8,
    pub search_input: &'a str,
    pub is_running: bool,
}

/// Render the info pane
pub fn render_info_pane(frame: &mut Frame, area: Rect, data: InfoRenderData) {
    let entry = catalog::entry(data.algorithm);
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let complexity = Style::default().fg(DEFAULT_THEME.type_name);

    let kind = match data.algorithm.kind() {
        AlgorithmKind::Sorting => "sorting",
        AlgorithmKind::Searching => "searching",
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                entry.name,
                Style::default()
                    .fg(DEFAULT_THEME.function)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({})", kind), label),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Best     ", label),
            Span::styled(entry.time.best, complexity),
        ]),
        Line::from(vec![
            Span::styled("Average  ", label),
            Span::styled(entry.time.average, complexity),
        ]),
        Line::from(vec![
            Span::styled("Worst    ", label),
            Span::styled(entry.time.worst, complexity),
        ]),
        Line::from(vec![
            Span::styled("Space    ", label),
            Span::styled(entry.space, complexity),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            entry.fun_fact,
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Speed    ", label),
            Span::styled(
                format!(
                    "{} ({} ms/step)",
                    data.speed,
                    delay_for_speed(data.speed).as_millis()
                ),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
        ]),
    ];

    if data.algorithm.is_search() {
        let (text, style) = if data.search_input.is_empty() {
            (
                "type a number".to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            )
        } else {
            (
                data.search_input.to_string(),
                Style::default().fg(DEFAULT_THEME.secondary),
            )
        };
        let cursor = if data.is_running { "" } else { "▏" };
        lines.push(Line::from(vec![
            Span::styled("Search   ", label),
            Span::styled(text, style),
            Span::styled(cursor, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    let block = Block::default()
        .title(" Algorithm ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
