// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::reports::visible;
use crate::analytics::summarize;
use crate::config::{export_dir, load_settings};
use crate::export::{ExportFile, ExportFormat, ExportKind, build_file};
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("csv", sub)) => export(conn, sub, ExportKind::Csv).map(|_| ()),
        Some(("image", sub)) => export(conn, sub, ExportKind::Image).map(|_| ()),
        _ => Ok(()),
    }
}

/// Build the payload and write it out. Returns the path written.
pub fn export(conn: &Connection, sub: &clap::ArgMatches, kind: ExportKind) -> Result<PathBuf> {
    let settings = load_settings();
    let transactions = visible(conn, sub)?;
    let summary = summarize(&transactions);
    let today = chrono::Local::now().date_naive();
    let file = build_file(
        kind,
        &transactions,
        &summary,
        &ExportFormat::from(&settings),
        today,
    )?;

    let out = match sub.get_one::<String>("out") {
        Some(p) => PathBuf::from(p),
        None => export_dir(&settings).join(&file.filename),
    };
    save_file(&file, &out)?;
    tracing::info!(path = %out.display(), rows = transactions.len(), "export written");
    println!("Exported {} transactions to {}", transactions.len(), out.display());
    Ok(out)
}

fn save_file(file: &ExportFile, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Create export dir {}", parent.display()))?;
    }
    std::fs::write(out, &file.payload).with_context(|| format!("Write {}", out.display()))?;
    Ok(())
}
