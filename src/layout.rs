// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Image report as a list of draw commands, plus an SVG backend for them.

use crate::error::ExportError;
use crate::export::ExportFormat;
use crate::models::{Summary, Transaction, TxType};
use std::fmt::Write as _;

pub const MAX_ROWS: usize = 20;

const WIDTH: f32 = 900.0;
const MARGIN: f32 = 40.0;
const CARD_TOP: f32 = 110.0;
const CARD_HEIGHT: f32 = 90.0;
const CARD_GAP: f32 = 12.0;
const TABLE_TOP: f32 = 250.0;
const ROW_HEIGHT: f32 = 28.0;

const BACKGROUND: &str = "#FAF7F2";
const INK: &str = "#2D2A26";
const MUTED: &str = "#7A746B";
const INCOME: &str = "#6B9E7F";
const EXPENSE: &str = "#E8704A";
const BORDER: &str = "#E4DED4";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: String,
        radius: f32,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        color: String,
        bold: bool,
        anchor: Anchor,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: String,
        width: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub commands: Vec<DrawCommand>,
    pub rows: usize,
}

impl ReportLayout {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

fn text(x: f32, y: f32, s: impl Into<String>, size: f32, color: &str, bold: bool) -> DrawCommand {
    DrawCommand::Text {
        x,
        y,
        text: s.into(),
        size,
        color: color.to_string(),
        bold,
        anchor: Anchor::Start,
    }
}

fn text_end(x: f32, y: f32, s: impl Into<String>, size: f32, color: &str, bold: bool) -> DrawCommand {
    DrawCommand::Text {
        x,
        y,
        text: s.into(),
        size,
        color: color.to_string(),
        bold,
        anchor: Anchor::End,
    }
}

fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> DrawCommand {
    DrawCommand::Line {
        x1,
        y1,
        x2,
        y2,
        color: BORDER.to_string(),
        width: 1.0,
    }
}

pub fn report_layout(
    transactions: &[Transaction],
    summary: &Summary,
    fmt: &ExportFormat,
) -> Result<ReportLayout, ExportError> {
    if transactions.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    let mut cmds = Vec::new();

    cmds.push(text(MARGIN, 55.0, "Naira Tracker Report", 28.0, INK, true));
    let first = transactions.iter().map(|t| t.date).min();
    let last = transactions.iter().map(|t| t.date).max();
    if let (Some(first), Some(last)) = (first, last) {
        cmds.push(text(
            MARGIN,
            85.0,
            format!("{} to {}", fmt.date(first), fmt.date(last)),
            14.0,
            MUTED,
            false,
        ));
    }

    let cards = [
        ("Total Income", fmt.money(&summary.total_income), INCOME),
        ("Total Expenses", fmt.money(&summary.total_expenses), EXPENSE),
        ("Balance", fmt.money(&summary.balance), INK),
        ("Savings Rate", format!("{:.1}%", summary.savings_rate), INK),
        ("Transactions", summary.transaction_count.to_string(), INK),
    ];
    let card_width = (WIDTH - 2.0 * MARGIN - CARD_GAP * (cards.len() as f32 - 1.0)) / cards.len() as f32;
    for (i, (label, value, color)) in cards.iter().enumerate() {
        let x = MARGIN + i as f32 * (card_width + CARD_GAP);
        cmds.push(DrawCommand::Rect {
            x,
            y: CARD_TOP,
            width: card_width,
            height: CARD_HEIGHT,
            fill: "#FFFFFF".to_string(),
            radius: 10.0,
        });
        cmds.push(text(x + 14.0, CARD_TOP + 30.0, *label, 12.0, MUTED, false));
        cmds.push(text(x + 14.0, CARD_TOP + 64.0, value.clone(), 18.0, color, true));
    }

    let right = WIDTH - MARGIN;
    let header_y = TABLE_TOP;
    for (x, label) in [(MARGIN, "Date"), (MARGIN + 130.0, "Type"), (MARGIN + 250.0, "Category")] {
        cmds.push(text(x, header_y, label, 13.0, MUTED, true));
    }
    cmds.push(text_end(right, header_y, "Amount", 13.0, MUTED, true));
    cmds.push(line(MARGIN, header_y + 10.0, right, header_y + 10.0));

    let shown = &transactions[..transactions.len().min(MAX_ROWS)];
    for (i, t) in shown.iter().enumerate() {
        let y = header_y + ROW_HEIGHT * (i as f32 + 1.0);
        let (sign, color) = match t.r#type {
            TxType::Income => ("+", INCOME),
            TxType::Expense => ("-", EXPENSE),
        };
        cmds.push(text(MARGIN, y, fmt.date(t.date), 13.0, INK, false));
        cmds.push(text(MARGIN + 130.0, y, t.r#type.to_string(), 13.0, INK, false));
        cmds.push(text(MARGIN + 250.0, y, t.category.clone(), 13.0, INK, false));
        cmds.push(text_end(right, y, format!("{}{}", sign, fmt.money(&t.amount)), 13.0, color, true));
        cmds.push(line(MARGIN, y + 10.0, right, y + 10.0));
    }

    Ok(ReportLayout {
        width: WIDTH,
        height: header_y + ROW_HEIGHT * (shown.len() as f32 + 1.0) + MARGIN,
        background: BACKGROUND.to_string(),
        commands: cmds,
        rows: shown.len(),
    })
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

pub fn render_svg(layout: &ReportLayout) -> Vec<u8> {
    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="Helvetica, Arial, sans-serif">"#,
        w = layout.width,
        h = layout.height
    );
    let _ = writeln!(
        s,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        layout.width, layout.height, layout.background
    );
    for cmd in &layout.commands {
        let _ = match cmd {
            DrawCommand::Rect { x, y, width, height, fill, radius } => writeln!(
                s,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" stroke="{}"/>"#,
                x, y, width, height, radius, fill, BORDER
            ),
            DrawCommand::Text { x, y, text, size, color, bold, anchor } => writeln!(
                s,
                r#"<text x="{}" y="{}" font-size="{}" fill="{}" font-weight="{}" text-anchor="{}">{}</text>"#,
                x,
                y,
                size,
                color,
                if *bold { "bold" } else { "normal" },
                match anchor {
                    Anchor::Start => "start",
                    Anchor::End => "end",
                },
                escape(text)
            ),
            DrawCommand::Line { x1, y1, x2, y2, color, width } => writeln!(
                s,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                x1, y1, x2, y2, color, width
            ),
        };
    }
    s.push_str("</svg>\n");
    s.into_bytes()
}
