// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::criteria_from;
use crate::analytics::{category_breakdown, monthly_trends, summarize};
use crate::config::load_settings;
use crate::export::ExportFormat;
use crate::filter::filter;
use crate::models::{Transaction, TxType};
use crate::store::TransactionStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("trends", sub)) => trends(conn, sub)?,
        Some(("breakdown", sub)) => breakdown(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Stored transactions narrowed by the shared filter flags.
pub fn visible(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let store = TransactionStore::load(conn)?;
    let criteria = criteria_from(sub)?;
    let rows = filter(store.transactions(), &criteria);
    tracing::debug!(total = store.len(), visible = rows.len(), "applied filters");
    Ok(rows)
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let s = summarize(&visible(conn, sub)?);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    let fmt = ExportFormat::from(&load_settings());
    let mut rows = vec![
        vec![
            "Total Income".into(),
            fmt.money(&s.total_income),
            format!("{} transactions", s.income_count),
        ],
        vec![
            "Total Expenses".into(),
            fmt.money(&s.total_expenses),
            format!("{} transactions", s.expense_count),
        ],
        vec![
            "Balance".into(),
            fmt.money(&s.balance),
            "Income minus expenses".into(),
        ],
        vec![
            "Savings Rate".into(),
            format!("{:.1}%", s.savings_rate),
            "Of income saved".into(),
        ],
        vec![
            "Avg Transaction".into(),
            fmt.money(&s.average_transaction.round_dp(0)),
            format!("{} total", s.transaction_count),
        ],
    ];
    if let Some(top) = &s.top_expense_category {
        rows.push(vec![
            "Top Category".into(),
            top.category.clone(),
            fmt.money(&top.total),
        ]);
    }
    println!("{}", pretty_table(&["Metric", "Value", "Detail"], rows));
    Ok(())
}

fn trends(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = monthly_trends(&visible(conn, sub)?);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No data available yet");
        return Ok(());
    }
    let fmt = ExportFormat::from(&load_settings());
    let rows = data
        .iter()
        .map(|b| vec![b.label.clone(), fmt.money(&b.income), fmt.money(&b.expenses)])
        .collect();
    println!("{}", pretty_table(&["Month", "Income", "Expenses"], rows));
    Ok(())
}

fn breakdown(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let ty = sub
        .get_one::<String>("type")
        .context("type missing")?
        .parse::<TxType>()?;
    let data = category_breakdown(&visible(conn, sub)?, ty);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No {} data yet", ty.as_str());
        return Ok(());
    }
    let fmt = ExportFormat::from(&load_settings());
    let rows = data
        .iter()
        .map(|c| vec![c.category.clone(), fmt.money(&c.total)])
        .collect();
    println!("{}", pretty_table(&["Category", "Total"], rows));
    Ok(())
}
