pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Mode};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    // Main layout: info bar, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Min(0),    // Summary + budget tables
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    screens::budget::render(frame, layout[1], state);
    render_bottom_bar(frame, layout[2], state, &theme);

    components::notice::render(frame, area, state.notice.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let entries = state.income.rows.len() + state.expenses.rows.len();
    let mode = match state.mode {
        Mode::Form => "add",
        Mode::Rows => "browse",
        Mode::EditAmount => "edit",
    };

    let line = Line::from(vec![
        Span::styled("tally", Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("Entries", Style::default().fg(theme.dim)),
        Span::raw(format!(": {entries}  ")),
        Span::styled("Focus", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", state.focus.label())),
        Span::styled("Mode", Style::default().fg(theme.dim)),
        Span::raw(format!(": {mode}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = context_hints(state, theme);

    parts.push(Span::styled("  │  ", Style::default().fg(theme.dim)));
    parts.push(Span::styled("Ctrl+C", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Returns context-specific keyboard hints based on the current mode.
fn context_hints(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    if state.notice.is_some() {
        return vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" dismiss"),
        ];
    }

    match state.mode {
        Mode::Form => vec![
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::raw(" field  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" add  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" rows  "),
            Span::styled("←/→", Style::default().fg(theme.accent)),
            Span::raw(" panel"),
        ],
        Mode::Rows => vec![
            Span::styled("j/k", Style::default().fg(theme.accent)),
            Span::raw(" select  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" edit  "),
            Span::styled("a", Style::default().fg(theme.accent)),
            Span::raw(" add  "),
            Span::styled("←/→", Style::default().fg(theme.accent)),
            Span::raw(" panel  "),
            Span::styled("q", Style::default().fg(theme.accent)),
            Span::raw(" quit"),
        ],
        Mode::EditAmount => vec![
            Span::raw("type the amount  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" done  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" done"),
        ],
    }
}
