use ledger::{InvalidEntry, Ledger, Money, validate};

#[test]
fn empty_ledger_has_zero_totals() {
    let ledger = Ledger::new();

    assert_eq!(ledger.total_income(), Money::ZERO);
    assert_eq!(ledger.total_expenses(), Money::ZERO);
    assert_eq!(ledger.net_income(), Money::ZERO);
    assert!(ledger.incomes().is_empty());
    assert!(ledger.expenses().is_empty());
}

#[test]
fn add_income_appends_one_entry_with_the_given_fields() {
    let mut ledger = Ledger::new();

    let entry = ledger.add_income("Salary", Money::new(3000_00));
    assert_eq!(entry.description, "Salary");
    assert_eq!(entry.amount, Money::new(3000_00));

    assert_eq!(ledger.incomes().len(), 1);
    assert!(ledger.expenses().is_empty());
}

#[test]
fn add_expense_appends_one_entry_with_the_given_fields() {
    let mut ledger = Ledger::new();

    let entry = ledger.add_expense("Rent", Money::new(1200_00));
    assert_eq!(entry.description, "Rent");
    assert_eq!(entry.amount, Money::new(1200_00));

    assert_eq!(ledger.expenses().len(), 1);
    assert!(ledger.incomes().is_empty());
}

#[test]
fn entry_ids_are_unique_across_both_sequences() {
    let mut ledger = Ledger::new();

    let a = ledger.add_income("Salary", Money::new(100)).id;
    let b = ledger.add_expense("Rent", Money::new(100)).id;
    let c = ledger.add_income("Bonus", Money::new(100)).id;

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[test]
fn totals_are_arithmetic_sums_in_any_order() {
    let mut ledger = Ledger::new();
    ledger.add_income("Bonus", Money::new(500_00));
    ledger.add_income("Salary", Money::new(3000_00));
    ledger.add_expense("Rent", Money::new(1200_00));
    ledger.add_expense("Food", Money::new(250_75));

    assert_eq!(ledger.total_income(), Money::new(3500_00));
    assert_eq!(ledger.total_expenses(), Money::new(1450_75));
}

#[test]
fn net_income_is_income_minus_expenses() {
    let mut ledger = Ledger::new();
    ledger.add_income("Salary", Money::new(3000_00));
    ledger.add_income("Bonus", Money::new(500_00));
    ledger.add_expense("Rent", Money::new(1200_00));

    assert_eq!(
        ledger.net_income(),
        ledger.total_income() - ledger.total_expenses()
    );
    assert_eq!(ledger.net_income(), Money::new(2300_00));
}

#[test]
fn net_income_can_go_negative() {
    let mut ledger = Ledger::new();
    ledger.add_income("Tips", Money::new(50_00));
    ledger.add_expense("Rent", Money::new(1200_00));

    assert_eq!(ledger.net_income(), Money::new(-1150_00));
    assert_eq!(ledger.net_income().to_string(), "$-1150.00");
}

#[test]
fn insertion_order_is_preserved() {
    let mut ledger = Ledger::new();
    ledger.add_income("First", Money::new(1_00));
    ledger.add_income("Second", Money::new(2_00));
    ledger.add_income("Third", Money::new(3_00));

    let descriptions: Vec<_> = ledger
        .incomes()
        .iter()
        .map(|entry| entry.description.as_str())
        .collect();
    assert_eq!(descriptions, ["First", "Second", "Third"]);
}

#[test]
fn validation_matrix_reports_distinct_causes() {
    assert_eq!(validate("", "10"), Err(InvalidEntry::EmptyDescription));
    assert_eq!(validate("  \t ", "10"), Err(InvalidEntry::EmptyDescription));
    assert_eq!(validate("Rent", "abc"), Err(InvalidEntry::AmountNotANumber));
    assert_eq!(validate("Rent", "0"), Err(InvalidEntry::AmountNotPositive));
    assert_eq!(
        validate("Rent", "-1200"),
        Err(InvalidEntry::AmountNotPositive)
    );
}

#[test]
fn validated_item_feeds_the_ledger_unchanged() {
    let item = validate("Rent", "1200.50").unwrap();

    let mut ledger = Ledger::new();
    let entry = ledger.add_expense(item.description.clone(), item.amount);

    assert_eq!(entry.description, "Rent");
    assert_eq!(entry.amount, Money::new(1200_50));
    assert_eq!(entry.amount.to_string(), "$1200.50");
}
