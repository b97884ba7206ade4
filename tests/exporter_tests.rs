// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use naira_tracker::analytics::summarize;
use naira_tracker::error::ExportError;
use naira_tracker::export::{ExportFormat, ExportKind, build_file, export_filename, to_csv, to_image};
use naira_tracker::layout::{MAX_ROWS, render_svg, report_layout};
use naira_tracker::models::{Transaction, TxType};
use naira_tracker::{cli, commands::exporter, db, store::TransactionStore};
use rusqlite::Connection;
use tempfile::tempdir;

fn tx(id: &str, ty: TxType, amount: &str, category: &str, date: &str) -> Transaction {
    Transaction {
        id: id.into(),
        r#type: ty,
        amount: amount.parse().unwrap(),
        category: category.into(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        notes: None,
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx("1", TxType::Income, "5000", "Salary", "2024-01-15"),
        tx("2", TxType::Expense, "2000", "Feeding", "2024-01-20"),
        tx("3", TxType::Income, "3000", "Salary", "2024-02-01"),
    ]
}

#[test]
fn csv_layout_with_summary_block() {
    let ts = sample();
    let out = to_csv(&ts, &summarize(&ts), &ExportFormat::default()).unwrap();
    let expected = "Date,Type,Category,Amount,Notes\n\
        15/01/2024,Income,Salary,\"5,000\",\n\
        20/01/2024,Expense,Feeding,\"2,000\",\n\
        01/02/2024,Income,Salary,\"3,000\",\n\
        \n\
        Summary\n\
        Total Income,\"₦8,000\"\n\
        Total Expenses,\"₦2,000\"\n\
        Balance,\"₦6,000\"\n";
    assert_eq!(out, expected);
}

#[test]
fn csv_escapes_quotes_in_notes() {
    let mut t = tx("1", TxType::Expense, "1234567.5", "Bills", "2024-03-09");
    t.notes = Some(r#"paid "NEPA", finally"#.into());
    let ts = vec![t];
    let out = to_csv(&ts, &summarize(&ts), &ExportFormat::default()).unwrap();
    let row = out.lines().nth(1).unwrap();
    assert_eq!(
        row,
        r#"09/03/2024,Expense,Bills,"1,234,567.5","paid ""NEPA"", finally""#
    );
    assert!(out.contains("Balance,\"-₦1,234,567.5\""));

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(out.as_bytes());
    let first = rdr.records().next().unwrap().unwrap();
    assert_eq!(&first[4], r#"paid "NEPA", finally"#);
}

#[test]
fn csv_quotes_plain_notes_and_skips_empty_ones() {
    let mut lunch = tx("1", TxType::Expense, "12.5", "Feeding", "2024-01-20");
    lunch.notes = Some("lunch".into());
    let mut blank = tx("2", TxType::Expense, "3", "Bills", "2024-01-21");
    blank.notes = Some(String::new());
    let ts = vec![lunch, blank];
    let out = to_csv(&ts, &summarize(&ts), &ExportFormat::default()).unwrap();
    let rows: Vec<&str> = out.lines().skip(1).take(2).collect();
    assert_eq!(rows[0], r#"20/01/2024,Expense,Feeding,12.5,"lunch""#);
    assert_eq!(rows[1], "21/01/2024,Expense,Bills,3,");
}

#[test]
fn csv_keeps_sub_kobo_amounts() {
    let ts = vec![tx("1", TxType::Income, "0.004", "Other", "2024-01-20")];
    let out = to_csv(&ts, &summarize(&ts), &ExportFormat::default()).unwrap();
    assert!(out.lines().nth(1).unwrap().contains(",0.004,"));
}

#[test]
fn empty_exports_are_refused() {
    let s = summarize(&[]);
    let fmt = ExportFormat::default();
    assert!(matches!(to_csv(&[], &s, &fmt), Err(ExportError::NothingToExport)));
    assert!(matches!(to_image(&[], &s, &fmt), Err(ExportError::NothingToExport)));
    assert!(matches!(
        report_layout(&[], &s, &fmt),
        Err(ExportError::NothingToExport)
    ));
}

#[test]
fn image_report_has_every_summary_figure() {
    let ts = sample();
    let s = summarize(&ts);
    let layout = report_layout(&ts, &s, &ExportFormat::default()).unwrap();
    let texts: Vec<&str> = layout.texts().collect();
    for needle in [
        "Total Income",
        "₦8,000",
        "Total Expenses",
        "₦2,000",
        "Balance",
        "₦6,000",
        "Savings Rate",
        "75.0%",
        "Transactions",
        "3",
    ] {
        assert!(texts.contains(&needle), "missing {}", needle);
    }
    assert_eq!(layout.rows, 3);
}

#[test]
fn image_report_caps_rows() {
    let ts: Vec<Transaction> = (0..25)
        .map(|i| {
            tx(
                &i.to_string(),
                TxType::Expense,
                "10",
                &format!("Cat{:02}", i),
                "2024-05-01",
            )
        })
        .collect();
    let s = summarize(&ts);
    let layout = report_layout(&ts, &s, &ExportFormat::default()).unwrap();
    assert_eq!(layout.rows, MAX_ROWS);
    let texts: Vec<&str> = layout.texts().collect();
    assert!(texts.contains(&"Cat19"));
    assert!(!texts.contains(&"Cat20"));
    assert!(texts.contains(&"25"));

    let svg = String::from_utf8(render_svg(&layout)).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn svg_escapes_markup_in_categories() {
    let ts = vec![tx("1", TxType::Expense, "5", "Data & Subscription", "2024-05-01")];
    let bytes = to_image(&ts, &summarize(&ts), &ExportFormat::default()).unwrap();
    let svg = String::from_utf8(bytes).unwrap();
    assert!(svg.contains("Data &amp; Subscription"));
}

#[test]
fn file_names_carry_the_date() {
    let day = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
    assert_eq!(export_filename(ExportKind::Csv, day), "naira-tracker-2024-07-04.csv");
    let ts = sample();
    let f = build_file(ExportKind::Image, &ts, &summarize(&ts), &ExportFormat::default(), day).unwrap();
    assert_eq!(f.filename, "naira-tracker-2024-07-04.svg");
    assert!(!f.payload.is_empty());
}

fn seeded_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let mut store = TransactionStore::load(&conn).unwrap();
    for t in sample().into_iter().rev() {
        store
            .add(naira_tracker::models::NewTransaction {
                r#type: t.r#type,
                amount: t.amount,
                category: t.category,
                date: t.date,
                notes: t.notes,
            })
            .unwrap();
    }
    conn
}

#[test]
fn export_command_writes_filtered_csv() {
    let conn = seeded_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("salary.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "naira-tracker",
        "export",
        "csv",
        "--category",
        "Salary",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&conn, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(contents.lines().filter(|l| l.contains(",Salary,")).count(), 2);
    assert!(!contents.contains("Feeding"));
    assert!(contents.contains("Total Income,\"₦8,000\""));
}

#[test]
fn export_command_refuses_empty_selection() {
    let conn = seeded_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("none.svg");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "naira-tracker",
        "export",
        "image",
        "--from",
        "2024-02-01",
        "--to",
        "2024-01-01",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        let err = exporter::handle(&conn, export_m).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExportError>(),
            Some(ExportError::NothingToExport)
        ));
    } else {
        panic!("no export subcommand");
    }
    assert!(!out_path.exists());
}
