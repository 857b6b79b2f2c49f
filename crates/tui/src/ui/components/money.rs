use ledger::Money;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Styles a `$`-formatted total with semantic coloring.
///
/// - Positive: green
/// - Negative: red
/// - Zero (or anything unparsable): neutral text color
#[must_use]
pub fn styled_total(display: &str, theme: &Theme) -> Span<'static> {
    Span::styled(display.to_string(), Style::default().fg(color_for(display, theme)))
}

/// Like [`styled_total`] but bold, for summary emphasis.
#[must_use]
pub fn styled_total_bold(display: &str, theme: &Theme) -> Span<'static> {
    Span::styled(
        display.to_string(),
        Style::default()
            .fg(color_for(display, theme))
            .add_modifier(Modifier::BOLD),
    )
}

fn color_for(display: &str, theme: &Theme) -> ratatui::style::Color {
    let trimmed = display.trim();
    let bare = trimmed.strip_prefix('$').unwrap_or(trimmed);
    match bare.parse::<Money>() {
        Ok(amount) if amount.is_positive() => theme.positive,
        Ok(amount) if amount.is_negative() => theme.negative,
        _ => theme.text,
    }
}
