// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use naira_tracker::error::ValidationErrors;
use naira_tracker::store::TransactionStore;
use naira_tracker::{cli, commands::categories, commands::transactions, db};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn add(conn: &Connection, args: &[&str]) -> anyhow::Result<naira_tracker::models::Transaction> {
    let mut argv = vec!["naira-tracker", "tx", "add"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("add", add_m)) = tx_m.subcommand() {
            return transactions::record(conn, add_m);
        }
    }
    panic!("no tx add subcommand");
}

fn seed(conn: &Connection) {
    for (ty, amt, cat, date) in [
        ("income", "5000", "Salary", "2025-01-01"),
        ("expense", "2000", "Feeding", "2025-01-03"),
        ("income", "3000", "Salary", "2025-01-02"),
    ] {
        add(
            conn,
            &["--type", ty, "--amount", amt, "--category", cat, "--date", date],
        )
        .unwrap();
    }
}

#[test]
fn list_newest_first_with_limit() {
    let conn = setup();
    seed(&conn);
    let matches = cli::build_cli().get_matches_from(["naira-tracker", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&conn, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].date.to_string(), "2025-01-03");
            assert_eq!(rows[1].date.to_string(), "2025-01-02");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_applies_type_filter() {
    let conn = setup();
    seed(&conn);
    let matches =
        cli::build_cli().get_matches_from(["naira-tracker", "tx", "list", "--type", "income"]);
    let (_, tx_m) = matches.subcommand().unwrap();
    let (_, list_m) = tx_m.subcommand().unwrap();
    let rows = transactions::query_rows(&conn, list_m).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.category == "Salary"));
}

#[test]
fn invalid_submission_reports_fields_and_leaves_store_alone() {
    let conn = setup();
    let err = add(&conn, &["--type", "expense", "--amount", "0", "--category", " "]).unwrap_err();
    let fields = err.downcast_ref::<ValidationErrors>().unwrap();
    assert!(fields.get("amount").is_some());
    assert!(fields.get("category").is_some());
    assert!(fields.get("date").is_none());
    assert!(TransactionStore::load(&conn).unwrap().is_empty());
}

#[test]
fn rm_deletes_and_rejects_unknown_ids() {
    let conn = setup();
    let t = add(
        &conn,
        &["--type", "income", "--amount", "10", "--category", "Salary", "--date", "2025-02-02"],
    )
    .unwrap();

    let run = |id: &str| {
        let matches = cli::build_cli().get_matches_from(["naira-tracker", "tx", "rm", "--id", id]);
        let (_, tx_m) = matches.subcommand().unwrap();
        transactions::handle(&conn, tx_m)
    };
    assert!(run("nope").is_err());
    run(t.id.as_str()).unwrap();
    assert!(TransactionStore::load(&conn).unwrap().is_empty());
}

#[test]
fn category_list_marks_custom_entries() {
    let conn = setup();
    let matches = cli::build_cli().get_matches_from([
        "naira-tracker",
        "category",
        "add",
        "--type",
        "income",
        "--name",
        "Tips",
        "--icon",
        "🎯",
    ]);
    let (_, cat_m) = matches.subcommand().unwrap();
    categories::handle(&conn, cat_m).unwrap();
    // adding the same name twice is an error
    assert!(categories::handle(&conn, cat_m).is_err());

    let rows = categories::list_rows(&conn, naira_tracker::models::TxType::Income).unwrap();
    let tips = rows.last().unwrap();
    assert_eq!(tips.name, "Tips");
    assert_eq!(tips.icon, "🎯");
    assert!(tips.custom);
    assert!(!rows[0].custom);
}
