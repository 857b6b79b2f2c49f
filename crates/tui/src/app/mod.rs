use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use ledger::{EntryId, InvalidEntry, Ledger, Money, validate};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    totals,
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expenses",
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typing into the focused panel's add form.
    Form,
    /// Browsing the focused panel's rows.
    Rows,
    /// Editing the selected row's amount field in place.
    EditAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Amount,
}

#[derive(Debug)]
pub struct FormState {
    pub description: String,
    pub amount: String,
    pub focus: FormField,
}

impl FormState {
    fn clear(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.focus = FormField::Description;
    }
}

/// One rendered table row. `amount_input` is the editable field whose
/// current text, not the ledger entry, feeds the totals.
#[derive(Debug)]
pub struct RowState {
    pub entry_id: EntryId,
    pub description: String,
    pub amount_input: String,
}

#[derive(Debug)]
pub struct PanelState {
    pub kind: EntryKind,
    pub rows: Vec<RowState>,
    pub selected: usize,
    pub form: FormState,
    pub total_display: String,
}

impl PanelState {
    fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
            selected: 0,
            form: FormState {
                description: String::new(),
                amount: String::new(),
                focus: FormField::Description,
            },
            total_display: Money::ZERO.to_string(),
        }
    }

    fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.rows.len() - 1);
    }

    fn select_prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = self.selected.saturating_sub(1);
    }
}

#[derive(Debug)]
pub struct SummaryState {
    pub income_display: String,
    pub expense_display: String,
    pub net_display: String,
}

impl Default for SummaryState {
    fn default() -> Self {
        let zero = Money::ZERO.to_string();
        Self {
            income_display: zero.clone(),
            expense_display: zero.clone(),
            net_display: zero,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub focus: EntryKind,
    pub mode: Mode,
    pub income: PanelState,
    pub expenses: PanelState,
    pub summary: SummaryState,
    pub notice: Option<InvalidEntry>,
}

pub struct App {
    config: AppConfig,
    ledger: Ledger,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let state = AppState {
            focus: EntryKind::Income,
            mode: Mode::Form,
            income: PanelState::new(EntryKind::Income),
            expenses: PanelState::new(EntryKind::Expense),
            summary: SummaryState::default(),
            notice: None,
        };

        Self {
            config,
            ledger: Ledger::new(),
            state,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.tick_rate_ms);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key);

        // The validation notice is blocking: nothing else reacts until it
        // is dismissed.
        if self.state.notice.is_some() {
            if matches!(action, AppAction::Submit | AppAction::Cancel) {
                self.state.notice = None;
            }
            return;
        }

        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        match self.state.mode {
            Mode::Form => self.handle_form_key(action),
            Mode::Rows => self.handle_rows_key(action),
            Mode::EditAmount => self.handle_edit_key(action),
        }
    }

    fn handle_form_key(&mut self, action: AppAction) {
        match action {
            AppAction::Input(ch) => {
                self.active_form_field_mut().push(ch);
            }
            AppAction::Backspace => {
                self.active_form_field_mut().pop();
            }
            AppAction::NextField => self.advance_form_focus(),
            AppAction::Submit => self.submit(),
            AppAction::Cancel | AppAction::Down => self.state.mode = Mode::Rows,
            AppAction::Left | AppAction::Right => self.switch_panel(),
            _ => {}
        }
    }

    fn handle_rows_key(&mut self, action: AppAction) {
        let kind = self.state.focus;
        match action {
            AppAction::Up | AppAction::Input('k') => self.panel_mut(kind).select_prev(),
            AppAction::Down | AppAction::Input('j') => self.panel_mut(kind).select_next(),
            AppAction::Submit | AppAction::Input('e') => self.start_edit(),
            AppAction::Cancel | AppAction::Input('a') => self.state.mode = Mode::Form,
            AppAction::Left | AppAction::Right | AppAction::NextField => self.switch_panel(),
            AppAction::Input('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, action: AppAction) {
        let kind = self.state.focus;
        match action {
            AppAction::Input(ch) => {
                if let Some(row) = self.selected_row_mut() {
                    row.amount_input.push(ch);
                    // Every keystroke retriggers the rescan, like the
                    // field's change event.
                    self.recalc_panel(kind);
                }
            }
            AppAction::Backspace => {
                if let Some(row) = self.selected_row_mut() {
                    row.amount_input.pop();
                    self.recalc_panel(kind);
                }
            }
            AppAction::Submit | AppAction::Cancel => self.state.mode = Mode::Rows,
            _ => {}
        }
    }

    /// Validates the focused form and, on success, appends the entry to
    /// the ledger and a row to the panel, then retriggers the rescan.
    /// On failure nothing is created and a blocking notice is raised.
    fn submit(&mut self) {
        let kind = self.state.focus;
        let (description, amount) = {
            let form = &self.panel(kind).form;
            (form.description.clone(), form.amount.clone())
        };

        match validate(&description, &amount) {
            Ok(item) => {
                let entry = match kind {
                    EntryKind::Income => self.ledger.add_income(item.description, item.amount),
                    EntryKind::Expense => self.ledger.add_expense(item.description, item.amount),
                };
                let row = RowState {
                    entry_id: entry.id,
                    description: entry.description.clone(),
                    amount_input: entry.amount.decimal_string(),
                };
                tracing::debug!(id = %row.entry_id, kind = kind.label(), "entry added");

                let panel = self.panel_mut(kind);
                panel.rows.push(row);
                panel.selected = panel.rows.len() - 1;
                panel.form.clear();
                self.recalc_panel(kind);
            }
            Err(cause) => {
                tracing::debug!("input rejected: {cause}");
                self.state.notice = Some(cause);
            }
        }
    }

    /// Recomputes one panel's total by rescanning its rendered amount
    /// fields, mirrors it into the summary, then re-derives net income
    /// from the two displayed totals.
    fn recalc_panel(&mut self, kind: EntryKind) {
        let display = {
            let panel = self.panel_mut(kind);
            let total = totals::rescan(panel.rows.iter().map(|row| row.amount_input.as_str()));
            let display = total.to_string();
            panel.total_display = display.clone();
            display
        };

        match kind {
            EntryKind::Income => self.state.summary.income_display = display,
            EntryKind::Expense => self.state.summary.expense_display = display,
        }

        self.recalc_net();
    }

    fn recalc_net(&mut self) {
        let net = totals::net_from_displays(
            &self.state.income.total_display,
            &self.state.expenses.total_display,
        );
        self.state.summary.net_display = net.to_string();
    }

    fn start_edit(&mut self) {
        if !self.panel(self.state.focus).rows.is_empty() {
            self.state.mode = Mode::EditAmount;
        }
    }

    fn switch_panel(&mut self) {
        self.state.focus = self.state.focus.other();
    }

    fn advance_form_focus(&mut self) {
        let form = &mut self.panel_mut(self.state.focus).form;
        form.focus = match form.focus {
            FormField::Description => FormField::Amount,
            FormField::Amount => FormField::Description,
        };
    }

    fn active_form_field_mut(&mut self) -> &mut String {
        let form = &mut self.panel_mut(self.state.focus).form;
        match form.focus {
            FormField::Description => &mut form.description,
            FormField::Amount => &mut form.amount,
        }
    }

    fn selected_row_mut(&mut self) -> Option<&mut RowState> {
        let panel = self.panel_mut(self.state.focus);
        let selected = panel.selected;
        panel.rows.get_mut(selected)
    }

    fn panel(&self, kind: EntryKind) -> &PanelState {
        match kind {
            EntryKind::Income => &self.state.income,
            EntryKind::Expense => &self.state.expenses,
        }
    }

    fn panel_mut(&mut self, kind: EntryKind) -> &mut PanelState {
        match kind {
            EntryKind::Income => &mut self.state.income,
            EntryKind::Expense => &mut self.state.expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
    }

    /// Fills the focused panel's form and submits it.
    fn add(app: &mut App, description: &str, amount: &str) {
        type_str(app, description);
        app.handle_key(key(KeyCode::Tab));
        type_str(app, amount);
        app.handle_key(key(KeyCode::Enter));
    }

    fn new_app() -> App {
        App::new(AppConfig::default())
    }

    #[test]
    fn starts_with_zeroed_displays() {
        let app = new_app();
        assert_eq!(app.state.summary.income_display, "$0.00");
        assert_eq!(app.state.summary.expense_display, "$0.00");
        assert_eq!(app.state.summary.net_display, "$0.00");
        assert_eq!(app.state.income.total_display, "$0.00");
        assert_eq!(app.state.expenses.total_display, "$0.00");
    }

    #[test]
    fn adds_flow_through_ledger_rows_and_summary() {
        let mut app = new_app();
        add(&mut app, "Salary", "3000");
        add(&mut app, "Bonus", "500");
        app.handle_key(key(KeyCode::Right));
        add(&mut app, "Rent", "1200");

        assert_eq!(app.ledger.incomes().len(), 2);
        assert_eq!(app.ledger.expenses().len(), 1);
        assert_eq!(app.state.income.rows.len(), 2);
        assert_eq!(app.state.expenses.rows.len(), 1);

        assert_eq!(app.state.income.total_display, "$3500.00");
        assert_eq!(app.state.expenses.total_display, "$1200.00");
        assert_eq!(app.state.summary.income_display, "$3500.00");
        assert_eq!(app.state.summary.expense_display, "$1200.00");
        assert_eq!(app.state.summary.net_display, "$2300.00");
    }

    #[test]
    fn successful_add_clears_the_form() {
        let mut app = new_app();
        add(&mut app, "Salary", "3000");

        assert_eq!(app.state.income.form.description, "");
        assert_eq!(app.state.income.form.amount, "");
        assert_eq!(app.state.income.form.focus, FormField::Description);
    }

    #[test]
    fn editing_a_row_updates_totals_without_a_new_entry() {
        let mut app = new_app();
        add(&mut app, "Salary", "3000");
        add(&mut app, "Bonus", "500");
        app.handle_key(key(KeyCode::Right));
        add(&mut app, "Rent", "1200");

        // Browse the expense rows and edit the Rent amount in place.
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.mode, Mode::EditAmount);

        // Clear the seeded "1200.00" one keystroke at a time.
        for _ in 0.."1200.00".len() {
            app.handle_key(key(KeyCode::Backspace));
        }
        // Mid-edit the field is empty: it contributes nothing.
        assert_eq!(app.state.expenses.total_display, "$0.00");
        assert_eq!(app.state.summary.net_display, "$3500.00");

        type_str(&mut app, "1000");
        assert_eq!(app.state.expenses.total_display, "$1000.00");
        assert_eq!(app.state.summary.expense_display, "$1000.00");
        assert_eq!(app.state.summary.net_display, "$2500.00");

        // No new entry was created and the stored one is deliberately
        // left stale: the rendered field is the ground truth.
        assert_eq!(app.ledger.expenses().len(), 1);
        assert_eq!(app.ledger.expenses()[0].amount, Money::new(1200_00));

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.mode, Mode::Rows);
        assert_eq!(app.state.summary.net_display, "$2500.00");
    }

    #[test]
    fn recalculation_is_idempotent() {
        let mut app = new_app();
        add(&mut app, "Salary", "3000");

        let before = (
            app.state.income.total_display.clone(),
            app.state.summary.income_display.clone(),
            app.state.summary.net_display.clone(),
        );
        app.recalc_panel(EntryKind::Income);
        let after = (
            app.state.income.total_display.clone(),
            app.state.summary.income_display.clone(),
            app.state.summary.net_display.clone(),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn rejected_input_raises_a_blocking_notice_and_creates_nothing() {
        let mut app = new_app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.notice, Some(InvalidEntry::EmptyDescription));

        // All input is consumed by the notice until it is dismissed.
        type_str(&mut app, "x");
        assert_eq!(app.state.notice, Some(InvalidEntry::EmptyDescription));
        assert_eq!(app.state.income.form.description, "");

        assert!(app.ledger.incomes().is_empty());
        assert!(app.state.income.rows.is_empty());
        assert_eq!(app.state.summary.income_display, "$0.00");

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.notice, None);
    }

    #[test]
    fn each_violation_reports_its_own_cause() {
        let mut app = new_app();

        add(&mut app, "Rent", "abc");
        assert_eq!(app.state.notice, Some(InvalidEntry::AmountNotANumber));
        app.handle_key(key(KeyCode::Enter));

        // The failed form keeps its values; fix only the amount.
        let panel = app.panel_mut(EntryKind::Income);
        panel.form.amount.clear();
        type_str(&mut app, "0");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.notice, Some(InvalidEntry::AmountNotPositive));
    }
}
