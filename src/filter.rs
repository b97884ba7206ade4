// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{FilterCriteria, Transaction};

pub fn matches(t: &Transaction, criteria: &FilterCriteria) -> bool {
    if let Some(range) = &criteria.date_range {
        if !range.contains(t.date) {
            return false;
        }
    }
    if let Some(cat) = &criteria.category {
        if &t.category != cat {
            return false;
        }
    }
    if let Some(ty) = criteria.r#type {
        if t.r#type != ty {
            return false;
        }
    }
    true
}

/// Transactions satisfying every active criterion, in input order.
/// A range whose start is after its end matches nothing.
pub fn filter(transactions: &[Transaction], criteria: &FilterCriteria) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| matches(t, criteria))
        .cloned()
        .collect()
}
