use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use ledger::InvalidEntry;

use crate::ui::theme::Theme;

/// Renders the blocking validation notice over the whole screen.
///
/// While a notice is up the app consumes every key, so this is the only
/// thing the user can interact with.
pub fn render(frame: &mut Frame<'_>, area: Rect, notice: Option<&InvalidEntry>) {
    let Some(cause) = notice else {
        return;
    };
    let theme = Theme::default();

    let popup = centered(area, 46, 5);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title("Invalid entry")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.error));

    let lines = vec![
        Line::from(Span::styled(
            cause.to_string(),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(theme.dim),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        popup,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);
    horizontal[1]
}
