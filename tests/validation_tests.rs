// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use naira_tracker::models::TxType;
use naira_tracker::validation::{
    AMOUNT_MSG, CATEGORY_MSG, DATE_MSG, MAX_AMOUNT, TransactionForm, validate,
};
use rust_decimal::Decimal;

fn form(amount: &str, category: &str, date: &str, notes: &str) -> TransactionForm {
    TransactionForm {
        amount: amount.into(),
        category: category.into(),
        date: date.into(),
        notes: notes.into(),
    }
}

#[test]
fn accepts_valid_submission() {
    let new = validate(
        TxType::Expense,
        &form("2500.50", " Feeding ", "2024-01-20", "  "),
    )
    .unwrap();
    assert_eq!(new.r#type, TxType::Expense);
    assert_eq!(new.amount.to_string(), "2500.50");
    assert_eq!(new.category, "Feeding");
    assert_eq!(new.date.to_string(), "2024-01-20");
    assert_eq!(new.notes, None);
}

#[test]
fn keeps_trimmed_notes() {
    let new = validate(TxType::Income, &form("1", "Salary", "2024-01-20", " bonus ")).unwrap();
    assert_eq!(new.notes.as_deref(), Some("bonus"));
}

#[test]
fn rejects_non_positive_or_non_numeric_amounts() {
    for bad in ["0", "-5", "abc", ""] {
        let errs = validate(TxType::Income, &form(bad, "Salary", "2024-01-01", "")).unwrap_err();
        assert_eq!(errs.get("amount"), Some(AMOUNT_MSG), "amount {:?}", bad);
        assert_eq!(errs.len(), 1);
    }
}

#[test]
fn reports_every_failing_field() {
    let errs = validate(TxType::Expense, &form("", "   ", "", "")).unwrap_err();
    assert_eq!(errs.len(), 3);
    assert_eq!(errs.get("amount"), Some(AMOUNT_MSG));
    assert_eq!(errs.get("category"), Some(CATEGORY_MSG));
    assert_eq!(errs.get("date"), Some(DATE_MSG));
    let fields: Vec<&str> = errs.iter().map(|(k, _)| k).collect();
    assert_eq!(fields, vec!["amount", "category", "date"]);
}

#[test]
fn rejects_unparseable_date() {
    let errs = validate(TxType::Expense, &form("10", "Bills", "20/01/2024", "")).unwrap_err();
    assert_eq!(errs.get("date"), Some(DATE_MSG));
}

#[test]
fn rejects_amounts_beyond_range_or_precision() {
    assert_eq!(MAX_AMOUNT, Decimal::from(1_000_000_000_000_000i64));
    for bad in [
        "79228162514264337593543950335",
        "1000000000000000.01",
        "0.004",
        "1.125",
        "0.0001",
    ] {
        let errs = validate(TxType::Expense, &form(bad, "Bills", "2024-01-01", "")).unwrap_err();
        assert_eq!(errs.get("amount"), Some(AMOUNT_MSG), "amount {:?}", bad);
    }
    for good in ["1000000000000000", "0.01", "12.50", "7.000"] {
        assert!(
            validate(TxType::Expense, &form(good, "Bills", "2024-01-01", "")).is_ok(),
            "amount {:?}",
            good
        );
    }
}
