// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::used_categories;
use crate::categories::CategoryRegistry;
use crate::models::TxType;
use crate::store::TransactionStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result, anyhow};
use rusqlite::Connection;
use serde::Serialize;

#[derive(Serialize)]
pub struct CategoryRow {
    pub name: String,
    pub icon: String,
    pub custom: bool,
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let ty = tx_type(sub)?;
            let name = sub.get_one::<String>("name").context("name missing")?;
            let icon = sub.get_one::<String>("icon").map(|s| s.as_str());
            let mut registry = CategoryRegistry::load(conn, ty)?;
            if !registry.add_custom(name, icon)? {
                return Err(anyhow!(
                    "Category '{}' is empty or already exists for {}",
                    name.trim(),
                    ty.as_str()
                ));
            }
            println!("Added {} category '{}'", ty.as_str(), name.trim());
        }
        Some(("list", sub)) => {
            let data = list_rows(conn, tx_type(sub)?)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = data
                    .into_iter()
                    .map(|c| {
                        vec![
                            c.icon,
                            c.name,
                            if c.custom { "custom".into() } else { "built-in".into() },
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["", "Category", "Kind"], rows));
            }
        }
        Some(("used", sub)) => {
            let store = TransactionStore::load(conn)?;
            let data = used_categories(store.transactions());
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                if data.is_empty() {
                    println!("No categories yet");
                } else {
                    let rows = data.into_iter().map(|c| vec![c]).collect();
                    println!("{}", pretty_table(&["Category"], rows));
                }
            }
        }
        _ => {}
    }
    Ok(())
}

fn tx_type(sub: &clap::ArgMatches) -> Result<TxType> {
    sub.get_one::<String>("type")
        .context("type missing")?
        .parse::<TxType>()
}

pub fn list_rows(conn: &Connection, ty: TxType) -> Result<Vec<CategoryRow>> {
    let registry = CategoryRegistry::load(conn, ty)?;
    let custom_start = registry.names().len() - registry.custom().len();
    Ok(registry
        .names()
        .into_iter()
        .enumerate()
        .map(|(i, name)| CategoryRow {
            icon: registry.icon_for(&name).to_string(),
            custom: i >= custom_start,
            name,
        })
        .collect())
}
