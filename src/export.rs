// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::error::ExportError;
use crate::layout;
use crate::models::{Summary, Transaction};
use crate::utils::{fmt_money, group_thousands};
use chrono::NaiveDate;
use csv::QuoteStyle;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFormat {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for ExportFormat {
    fn from(s: &Settings) -> Self {
        Self {
            currency_symbol: s.currency_symbol.clone(),
            date_format: s.date_format.clone(),
        }
    }
}

impl ExportFormat {
    pub fn date(&self, d: NaiveDate) -> String {
        d.format(&self.date_format).to_string()
    }

    pub fn money(&self, d: &rust_decimal::Decimal) -> String {
        fmt_money(d, &self.currency_symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Csv,
    Image,
}

impl ExportKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Csv => "csv",
            ExportKind::Image => "svg",
        }
    }
}

/// Payload handed to whatever saves the file for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub payload: Vec<u8>,
}

pub fn export_filename(kind: ExportKind, today: NaiveDate) -> String {
    format!("naira-tracker-{}.{}", today.format("%Y-%m-%d"), kind.extension())
}

pub fn to_csv(
    transactions: &[Transaction],
    summary: &Summary,
    fmt: &ExportFormat,
) -> Result<String, ExportError> {
    if transactions.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let mut buf = encode_fields(
        &["Date", "Type", "Category", "Amount", "Notes"],
        QuoteStyle::Necessary,
    )?;
    buf.push(b'\n');
    for t in transactions {
        let date = fmt.date(t.date);
        let ty = t.r#type.to_string();
        let amount = group_thousands(&t.amount);
        buf.extend(encode_fields(
            &[date.as_str(), ty.as_str(), t.category.as_str(), amount.as_str()],
            QuoteStyle::Necessary,
        )?);
        buf.push(b',');
        // Notes are always quoted when present.
        if let Some(notes) = t.notes.as_deref().filter(|n| !n.is_empty()) {
            buf.extend(encode_fields(&[notes], QuoteStyle::Always)?);
        }
        buf.push(b'\n');
    }
    buf.push(b'\n');

    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(buf);
    wtr.write_record(["Summary"])?;
    wtr.write_record(["Total Income".to_string(), fmt.money(&summary.total_income)])?;
    wtr.write_record([
        "Total Expenses".to_string(),
        fmt.money(&summary.total_expenses),
    ])?;
    wtr.write_record(["Balance".to_string(), fmt.money(&summary.balance)])?;
    let buf = wtr.into_inner().map_err(|e| e.into_error())?;

    String::from_utf8(buf).map_err(|e| ExportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

// One line of fields, no terminator.
fn encode_fields(fields: &[&str], style: QuoteStyle) -> Result<Vec<u8>, ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(style)
        .from_writer(Vec::new());
    for field in fields {
        wtr.write_field(field)?;
    }
    wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

pub fn to_image(
    transactions: &[Transaction],
    summary: &Summary,
    fmt: &ExportFormat,
) -> Result<Vec<u8>, ExportError> {
    let report = layout::report_layout(transactions, summary, fmt)?;
    Ok(layout::render_svg(&report))
}

pub fn build_file(
    kind: ExportKind,
    transactions: &[Transaction],
    summary: &Summary,
    fmt: &ExportFormat,
    today: NaiveDate,
) -> Result<ExportFile, ExportError> {
    let payload = match kind {
        ExportKind::Csv => to_csv(transactions, summary, fmt)?.into_bytes(),
        ExportKind::Image => to_image(transactions, summary, fmt)?,
    };
    Ok(ExportFile {
        filename: export_filename(kind, today),
        payload,
    })
}
