// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::criteria_from;
use crate::analytics::recent;
use crate::config::load_settings;
use crate::export::ExportFormat;
use crate::filter::filter;
use crate::models::{Transaction, TxType};
use crate::store::TransactionStore;
use crate::utils::{group_thousands, maybe_print_json, pretty_table};
use crate::validation::{TransactionForm, validate};
use anyhow::{Context, Result, anyhow};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let tx = record(conn, sub)?;
            println!(
                "Recorded {} of {} ({}) on {} [id {}]",
                tx.r#type.as_str(),
                group_thousands(&tx.amount),
                tx.category,
                tx.date,
                tx.id
            );
        }
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").context("id missing")?.trim();
            let mut store = TransactionStore::load(conn)?;
            if store.delete(id)? {
                println!("Deleted transaction {}", id);
            } else {
                return Err(anyhow!("Transaction '{}' not found", id));
            }
        }
        _ => {}
    }
    Ok(())
}

/// Validate the `tx add` flags and store the transaction.
pub fn record(conn: &Connection, sub: &clap::ArgMatches) -> Result<Transaction> {
    let ty = sub
        .get_one::<String>("type")
        .context("type missing")?
        .parse::<TxType>()?;
    let form = TransactionForm {
        amount: sub.get_one::<String>("amount").cloned().unwrap_or_default(),
        category: sub.get_one::<String>("category").cloned().unwrap_or_default(),
        date: sub
            .get_one::<String>("date")
            .cloned()
            .unwrap_or_else(|| chrono::Local::now().date_naive().to_string()),
        notes: sub.get_one::<String>("note").cloned().unwrap_or_default(),
    };

    let new = match validate(ty, &form) {
        Ok(n) => n,
        Err(errors) => {
            for (field, msg) in errors.iter() {
                eprintln!("{}: {}", field, msg);
            }
            return Err(anyhow::Error::new(errors).context("Transaction not recorded"));
        }
    };

    let mut store = TransactionStore::load(conn)?;
    store.add(new)
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let store = TransactionStore::load(conn)?;
    let criteria = criteria_from(sub)?;
    let mut rows = recent(&filter(store.transactions(), &criteria));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let fmt = ExportFormat::from(&load_settings());
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                let sign = match t.r#type {
                    TxType::Income => "+",
                    TxType::Expense => "-",
                };
                vec![
                    t.id.clone(),
                    fmt.date(t.date),
                    t.r#type.to_string(),
                    t.category.clone(),
                    format!("{}{}", sign, fmt.money(&t.amount)),
                    t.notes.clone().unwrap_or_default(),
                ]
            })
            .collect();
        if rows.is_empty() {
            println!("No transactions yet. Start by adding income or expenses!");
        } else {
            println!(
                "{}",
                pretty_table(&["Id", "Date", "Type", "Category", "Amount", "Notes"], rows)
            );
        }
    }
    Ok(())
}
