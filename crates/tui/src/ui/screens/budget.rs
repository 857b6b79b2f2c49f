use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, FormField, Mode, PanelState},
    ui::{components::money, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    render_summary(frame, layout[0], state, &theme);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    render_panel(frame, panels[0], state, &state.income, &theme);
    render_panel(frame, panels[1], state, &state.expenses, &theme);
}

fn render_summary(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Income    ", Style::default().fg(theme.dim)),
            money::styled_total(&state.summary.income_display, theme),
        ]),
        Line::from(vec![
            Span::styled("Expenses  ", Style::default().fg(theme.dim)),
            money::styled_total(&state.summary.expense_display, theme),
        ]),
        Line::from(vec![
            Span::styled("Net       ", Style::default().fg(theme.dim)),
            money::styled_total_bold(&state.summary.net_display, theme),
        ]),
    ];

    let block = Block::default().borders(Borders::ALL).title("Summary");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    panel: &PanelState,
    theme: &Theme,
) {
    let focused = state.focus == panel.kind;
    let border = if focused { theme.accent } else { theme.dim };

    let block = Block::default()
        .title(panel.kind.label())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // rows
            Constraint::Length(1), // running total
            Constraint::Length(3), // add form
        ])
        .split(inner);

    render_rows(frame, layout[0], state, panel, focused, theme);
    render_total(frame, layout[1], panel, theme);
    render_form(frame, layout[2], state, panel, focused, theme);
}

fn render_rows(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    panel: &PanelState,
    focused: bool,
    theme: &Theme,
) {
    let editing = focused && state.mode == Mode::EditAmount;

    let items = panel
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let under_edit = editing && idx == panel.selected;
            let amount = if under_edit {
                format!("{}▏", row.amount_input)
            } else {
                row.amount_input.clone()
            };
            let text = format!("{:<24} {:>12}", row.description, amount);
            if under_edit {
                ListItem::new(Line::from(Span::styled(
                    text,
                    Style::default().fg(theme.accent),
                )))
            } else {
                ListItem::new(Line::from(text))
            }
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    if focused && state.mode == Mode::Rows && !items.is_empty() {
        list_state.select(Some(panel.selected));
    }

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_total(frame: &mut Frame<'_>, area: Rect, panel: &PanelState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("Total ", Style::default().fg(theme.dim)),
        money::styled_total(&panel.total_display, theme),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_form(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    panel: &PanelState,
    focused: bool,
    theme: &Theme,
) {
    let typing = focused && state.mode == Mode::Form;
    let form = &panel.form;

    let line = Line::from(vec![
        field_span(
            &form.description,
            "description",
            typing && form.focus == FormField::Description,
            theme,
        ),
        Span::styled("  |  ", Style::default().fg(theme.dim)),
        field_span(
            &form.amount,
            "amount",
            typing && form.focus == FormField::Amount,
            theme,
        ),
    ]);

    let block = Block::default()
        .title("Add")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if typing { theme.accent } else { theme.dim }));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn field_span(value: &str, placeholder: &str, active: bool, theme: &Theme) -> Span<'static> {
    if value.is_empty() && !active {
        return Span::styled(placeholder.to_string(), Style::default().fg(theme.dim));
    }

    let text = if active {
        format!("{value}▏")
    } else {
        value.to_string()
    };
    let style = if active {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };
    Span::styled(text, style)
}
