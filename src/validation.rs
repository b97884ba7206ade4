// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationErrors;
use crate::models::{NewTransaction, TxType};
use crate::utils::{parse_date, parse_decimal};
use rust_decimal::Decimal;

pub const AMOUNT_MSG: &str = "Please enter a valid amount greater than 0";
pub const CATEGORY_MSG: &str = "Please select a category";
pub const DATE_MSG: &str = "Please select a date";

/// Largest accepted amount: one quadrillion.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);
/// Amounts carry at most kobo precision.
pub const MAX_SCALE: u32 = 2;

fn acceptable_amount(a: &Decimal) -> bool {
    *a > Decimal::ZERO && *a <= MAX_AMOUNT && a.normalize().scale() <= MAX_SCALE
}

/// Raw user submission, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub notes: String,
}

pub fn validate(ty: TxType, form: &TransactionForm) -> Result<NewTransaction, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let amount = match parse_decimal(&form.amount) {
        Ok(a) if acceptable_amount(&a) => Some(a),
        _ => {
            errors.insert("amount", AMOUNT_MSG);
            None
        }
    };

    let category = form.category.trim();
    if category.is_empty() {
        errors.insert("category", CATEGORY_MSG);
    }

    let date = if form.date.trim().is_empty() {
        None
    } else {
        parse_date(&form.date).ok()
    };
    if date.is_none() {
        errors.insert("date", DATE_MSG);
    }

    match (amount, date) {
        (Some(amount), Some(date)) if errors.is_empty() => {
            let notes = form.notes.trim();
            Ok(NewTransaction {
                r#type: ty,
                amount,
                category: category.to_string(),
                date,
                notes: (!notes.is_empty()).then(|| notes.to_string()),
            })
        }
        _ => Err(errors),
    }
}
