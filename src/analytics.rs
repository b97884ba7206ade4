// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategoryTotal, MonthBucket, Summary, Transaction, TxType};
use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::{BTreeMap, BTreeSet, HashMap};

// Totals saturate at `Decimal::MAX` instead of overflowing; stored rows are
// not re-validated on read.
fn accumulate(total: &mut Decimal, amount: Decimal) {
    *total = total.checked_add(amount).unwrap_or_else(|| {
        tracing::warn!(%amount, "total overflowed, saturating");
        Decimal::MAX
    });
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let mut income_count = 0usize;
    let mut expense_count = 0usize;

    for t in transactions {
        match t.r#type {
            TxType::Income => {
                accumulate(&mut total_income, t.amount);
                income_count += 1;
            }
            TxType::Expense => {
                accumulate(&mut total_expenses, t.amount);
                expense_count += 1;
            }
        }
    }

    let balance = total_income - total_expenses;
    let transaction_count = transactions.len();
    let average_transaction = average(total_income, total_expenses, transaction_count);
    let savings_rate = savings_rate(balance, total_income);

    Summary {
        total_income,
        total_expenses,
        balance,
        income_count,
        expense_count,
        transaction_count,
        average_transaction,
        savings_rate,
        top_expense_category: top_category(&category_breakdown(transactions, TxType::Expense)),
    }
}

fn average(income: Decimal, expenses: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    let n = Decimal::from(count as u64);
    income
        .checked_add(expenses)
        .and_then(|sum| sum.checked_div(n))
        // Sum overflowed: divide each side first.
        .or_else(|| (income.checked_div(n)?).checked_add(expenses.checked_div(n)?))
        .unwrap_or(Decimal::MAX)
}

/// Percent of income kept, one decimal, halves rounded away from zero.
/// A ratio too large to represent saturates at `Decimal::MIN`; only a
/// negative balance can get there.
fn savings_rate(balance: Decimal, income: Decimal) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    balance
        .checked_div(income)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .map(|p| p.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::MIN)
}

// Strictly-greater comparison keeps the earliest category on ties.
fn top_category(breakdown: &[CategoryTotal]) -> Option<CategoryTotal> {
    let mut best: Option<&CategoryTotal> = None;
    for c in breakdown {
        match best {
            Some(b) if c.total <= b.total => {}
            _ => best = Some(c),
        }
    }
    best.cloned()
}

/// Income and expenses per calendar month, oldest first. Months without
/// transactions are not emitted.
pub fn monthly_trends(transactions: &[Transaction]) -> Vec<MonthBucket> {
    let mut map: BTreeMap<(i32, u32), (Decimal, Decimal)> = BTreeMap::new();
    for t in transactions {
        let entry = map
            .entry((t.date.year(), t.date.month()))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.r#type {
            TxType::Income => accumulate(&mut entry.0, t.amount),
            TxType::Expense => accumulate(&mut entry.1, t.amount),
        }
    }
    map.into_iter()
        .map(|((y, m), (income, expenses))| MonthBucket {
            month: format!("{:04}-{:02}", y, m),
            label: month_label(y, m),
            income,
            expenses,
        })
        .collect()
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("{:04}-{:02}", year, month))
}

/// Per-category totals for one transaction type, in order of first appearance.
pub fn category_breakdown(transactions: &[Transaction], ty: TxType) -> Vec<CategoryTotal> {
    let mut out: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for t in transactions.iter().filter(|t| t.r#type == ty) {
        match index.get(t.category.as_str()) {
            Some(&i) => accumulate(&mut out[i].total, t.amount),
            None => {
                index.insert(t.category.as_str(), out.len());
                out.push(CategoryTotal {
                    category: t.category.clone(),
                    total: t.amount,
                });
            }
        }
    }
    out
}

pub fn used_categories(transactions: &[Transaction]) -> Vec<String> {
    transactions
        .iter()
        .map(|t| t.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Newest date first; equal dates keep their store order.
pub fn recent(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
