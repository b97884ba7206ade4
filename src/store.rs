// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{NewTransaction, Transaction};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

pub const TRANSACTIONS_KEY: &str = "transactions";

/// String-keyed persistence boundary. Writes are last-write-wins.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// Decode a stored JSON value; values that do not parse count as absent.
pub fn load_json<K, T>(kv: &K, key: &str) -> Result<Option<T>>
where
    K: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = kv.load(key)? else {
        return Ok(None);
    };
    match serde_json::from_str::<T>(&raw) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding malformed stored value");
            Ok(None)
        }
    }
}

pub struct TransactionStore<'a, K: KeyValueStore + ?Sized> {
    kv: &'a K,
    items: Vec<Transaction>,
}

impl<'a, K: KeyValueStore + ?Sized> TransactionStore<'a, K> {
    pub fn load(kv: &'a K) -> Result<Self> {
        let items: Vec<Transaction> = load_json(kv, TRANSACTIONS_KEY)?.unwrap_or_default();
        tracing::debug!(count = items.len(), "loaded transactions");
        Ok(Self { kv, items })
    }

    /// Newest-added first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn add(&mut self, new: NewTransaction) -> Result<Transaction> {
        let id = self.next_id(chrono::Utc::now().timestamp_millis());
        let tx = new.with_id(id);
        self.items.insert(0, tx.clone());
        self.persist()?;
        tracing::info!(id = %tx.id, kind = tx.r#type.as_str(), "added transaction");
        Ok(tx)
    }

    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist()?;
        tracing::info!(id, "deleted transaction");
        Ok(true)
    }

    // Millisecond timestamps, bumped past any id already taken.
    fn next_id(&self, now_ms: i64) -> String {
        let mut candidate = now_ms;
        loop {
            let id = candidate.to_string();
            if self.get(&id).is_none() {
                return id;
            }
            candidate += 1;
        }
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.items).context("Serialize transactions")?;
        self.kv.save(TRANSACTIONS_KEY, &raw)
    }
}
