// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneyjar::error::BudgetError;
use moneyjar::ledger;
use moneyjar::models::{Category, Transaction, TxType};
use rust_decimal::Decimal;

fn seeded() -> Vec<Category> {
    let mut cats = Vec::new();
    ledger::add_category(&mut cats, "Food", None).unwrap();
    ledger::add_category(&mut cats, "  Transport ", Some("🚗")).unwrap();
    cats
}

#[test]
fn transaction_entry_rules() {
    let tx = Transaction::new(" 12.50 ", "  lunch ", "2024-06-02", TxType::Expense).unwrap();
    assert_eq!(tx.amount, Decimal::from_str_exact("12.50").unwrap());
    assert_eq!(tx.description, "lunch");
    assert_eq!(tx.date, "2024-06-02");
    assert!(!tx.id.is_empty());

    assert!(matches!(
        Transaction::new("-1", "x", "2024-06-02", TxType::Expense),
        Err(BudgetError::InvalidAmount(_))
    ));
    assert!(matches!(
        Transaction::new("abc", "x", "2024-06-02", TxType::Expense),
        Err(BudgetError::InvalidAmount(_))
    ));
    assert!(matches!(
        Transaction::new("1", "   ", "2024-06-02", TxType::Expense),
        Err(BudgetError::EmptyDescription)
    ));
    assert!(matches!(
        Transaction::new("1", "x", "06/02/2024", TxType::Expense),
        Err(BudgetError::InvalidDate(_))
    ));
    assert!(Transaction::new("0", "free sample", "2024-06-02", TxType::Expense).is_ok());
}

#[test]
fn new_ids_are_unique() {
    let a = Transaction::new("1", "a", "2024-06-02", TxType::Income).unwrap();
    let b = Transaction::new("1", "a", "2024-06-02", TxType::Income).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn categories_are_found_by_id_or_name() {
    let cats = seeded();
    assert_eq!(cats[1].name, "Transport");
    assert_eq!(cats[1].icon.as_deref(), Some("🚗"));
    let by_name = ledger::find_category(&cats, "food").unwrap();
    let by_id = ledger::find_category(&cats, &cats[0].id).unwrap();
    assert_eq!(by_name.id, by_id.id);
    assert!(matches!(
        ledger::find_category(&cats, "Rent"),
        Err(BudgetError::CategoryNotFound(_))
    ));
}

#[test]
fn blank_category_name_is_rejected() {
    let mut cats = seeded();
    assert!(matches!(
        ledger::add_category(&mut cats, "  ", None),
        Err(BudgetError::EmptyName)
    ));
    assert!(matches!(
        ledger::rename_category(&mut cats, "Food", ""),
        Err(BudgetError::EmptyName)
    ));
}

#[test]
fn rename_and_reicon() {
    let mut cats = seeded();
    ledger::rename_category(&mut cats, "Food", "Groceries").unwrap();
    ledger::set_icon(&mut cats, "Groceries", "🛒").unwrap();
    assert_eq!(cats[0].name, "Groceries");
    assert_eq!(cats[0].icon.as_deref(), Some("🛒"));
    ledger::set_icon(&mut cats, "Groceries", " ").unwrap();
    assert_eq!(cats[0].icon, None);
}

#[test]
fn transactions_append_in_entry_order() {
    let mut cats = seeded();
    let late = Transaction::new("5", "late", "2024-06-05", TxType::Expense).unwrap();
    let early = Transaction::new("7", "early", "2024-06-01", TxType::Expense).unwrap();
    ledger::add_transaction(&mut cats, "Food", late).unwrap();
    ledger::add_transaction(&mut cats, "Food", early).unwrap();
    let descs: Vec<_> = cats[0]
        .transactions
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(descs, ["late", "early"]);
}

#[test]
fn edit_replaces_in_place() {
    let mut cats = seeded();
    for d in ["one", "two", "three"] {
        let tx = Transaction::new("1", d, "2024-06-02", TxType::Expense).unwrap();
        ledger::add_transaction(&mut cats, "Food", tx).unwrap();
    }
    let mut edited = cats[0].transactions[1].clone();
    edited.amount = Decimal::from(9);
    edited.r#type = TxType::Income;
    ledger::update_transaction(&mut cats, edited.clone()).unwrap();
    assert_eq!(cats[0].transactions[1], edited);
    assert_eq!(cats[0].transactions.len(), 3);

    let mut ghost = edited;
    ghost.id = "missing".to_string();
    assert!(matches!(
        ledger::update_transaction(&mut cats, ghost),
        Err(BudgetError::TransactionNotFound(_))
    ));
}

#[test]
fn delete_transaction_and_cascade_category() {
    let mut cats = seeded();
    let a = Transaction::new("1", "a", "2024-06-02", TxType::Expense).unwrap();
    let b = Transaction::new("2", "b", "2024-06-02", TxType::Expense).unwrap();
    let a_id = a.id.clone();
    ledger::add_transaction(&mut cats, "Transport", a).unwrap();
    ledger::add_transaction(&mut cats, "Transport", b).unwrap();

    let removed = ledger::delete_transaction(&mut cats, &a_id).unwrap();
    assert_eq!(removed.description, "a");
    assert_eq!(cats[1].transactions.len(), 1);

    let gone = ledger::delete_category(&mut cats, "Transport").unwrap();
    assert_eq!(gone.transactions.len(), 1);
    assert_eq!(cats.len(), 1);
    assert!(ledger::locate_transaction(&cats, &gone.transactions[0].id).is_err());
}
