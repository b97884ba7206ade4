// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CustomCategory, TxType};
use crate::store::{KeyValueStore, load_json};
use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_ICON: &str = "📌";

pub const INCOME_CATEGORIES: &[(&str, &str)] = &[
    ("Salary", "💼"),
    ("Freelance", "🎨"),
    ("Allowance", "🎁"),
    ("Business", "🏢"),
    ("Investment", "📈"),
    ("Other", "📌"),
];

pub const EXPENSE_CATEGORIES: &[(&str, &str)] = &[
    ("Feeding", "🍽️"),
    ("Transportation", "🚗"),
    ("Data & Subscription", "📱"),
    ("Bills", "💡"),
    ("Personal Saving", "🏦"),
    ("Savings & Investments", "💰"),
    ("Entertainment", "🎬"),
    ("Others", "📌"),
];

pub fn builtin(ty: TxType) -> &'static [(&'static str, &'static str)] {
    match ty {
        TxType::Income => INCOME_CATEGORIES,
        TxType::Expense => EXPENSE_CATEGORIES,
    }
}

pub fn storage_key(ty: TxType) -> String {
    format!("custom_categories_{}", ty.as_str())
}

// Older lists hold bare names; newer ones carry an icon too.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCategory {
    Name(String),
    Full(CustomCategory),
}

impl From<StoredCategory> for CustomCategory {
    fn from(s: StoredCategory) -> Self {
        match s {
            StoredCategory::Name(name) => CustomCategory {
                name,
                icon: DEFAULT_ICON.to_string(),
            },
            StoredCategory::Full(c) => c,
        }
    }
}

pub struct CategoryRegistry<'a, K: KeyValueStore + ?Sized> {
    kv: &'a K,
    ty: TxType,
    custom: Vec<CustomCategory>,
}

impl<'a, K: KeyValueStore + ?Sized> CategoryRegistry<'a, K> {
    pub fn load(kv: &'a K, ty: TxType) -> Result<Self> {
        let stored: Vec<StoredCategory> = load_json(kv, &storage_key(ty))?.unwrap_or_default();
        Ok(Self {
            kv,
            ty,
            custom: stored.into_iter().map(CustomCategory::from).collect(),
        })
    }

    pub fn custom(&self) -> &[CustomCategory] {
        &self.custom
    }

    /// Built-ins first, then custom categories in the order they were added.
    pub fn names(&self) -> Vec<String> {
        builtin(self.ty)
            .iter()
            .map(|(n, _)| n.to_string())
            .chain(self.custom.iter().map(|c| c.name.clone()))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        builtin(self.ty).iter().any(|(n, _)| *n == name) || self.custom.iter().any(|c| c.name == name)
    }

    pub fn icon_for(&self, name: &str) -> &str {
        builtin(self.ty)
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, icon)| *icon)
            .or_else(|| {
                self.custom
                    .iter()
                    .find(|c| c.name == name)
                    .map(|c| c.icon.as_str())
            })
            .unwrap_or(DEFAULT_ICON)
    }

    /// Returns `false` without writing when the name is blank or already known.
    pub fn add_custom(&mut self, name: &str, icon: Option<&str>) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return Ok(false);
        }
        self.custom.push(CustomCategory {
            name: name.to_string(),
            icon: icon
                .map(str::trim)
                .filter(|i| !i.is_empty())
                .unwrap_or(DEFAULT_ICON)
                .to_string(),
        });
        let raw = serde_json::to_string(&self.custom).context("Serialize custom categories")?;
        self.kv.save(&storage_key(self.ty), &raw)?;
        tracing::info!(name, kind = self.ty.as_str(), "added custom category");
        Ok(true)
    }
}
