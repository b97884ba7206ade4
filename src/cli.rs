// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn type_arg(required: bool) -> Arg {
    Arg::new("type")
        .long("type")
        .short('t')
        .value_parser(["income", "expense"])
        .required(required)
        .help("Transaction type")
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .requires("to")
            .help("Start date (YYYY-MM-DD, inclusive)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .requires("from")
            .help("End date (YYYY-MM-DD, inclusive)"),
    )
    .arg(Arg::new("category").long("category").short('c').help("Exact category name"))
}

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn export_cmd(name: &'static str, about: &'static str) -> Command {
    filter_args(Command::new(name).about(about).arg(type_arg(false))).arg(
        Arg::new("out")
            .long("out")
            .short('o')
            .help("Output file (defaults to naira-tracker-<date> in the export dir)"),
    )
}

pub fn build_cli() -> Command {
    Command::new("naira-tracker")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Track income and expenses, view summaries and trends, export reports")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-v, -vv, -vvv)"),
        )
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(
            Command::new("tx")
                .about("Record, list and delete transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(type_arg(true))
                        .arg(Arg::new("amount").long("amount").short('a').required(true))
                        .arg(Arg::new("category").long("category").short('c').required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .short('d')
                                .help("YYYY-MM-DD, defaults to today"),
                        )
                        .arg(Arg::new("note").long("note").short('n')),
                )
                .subcommand(json_args(
                    filter_args(Command::new("list").about("List transactions, newest first"))
                        .arg(type_arg(false))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a custom category")
                        .arg(type_arg(true))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("icon").long("icon")),
                )
                .subcommand(json_args(
                    Command::new("list")
                        .about("List built-in and custom categories")
                        .arg(type_arg(true)),
                ))
                .subcommand(json_args(
                    Command::new("used").about("Categories that appear on transactions"),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries, monthly trends and category breakdowns")
                .subcommand(json_args(
                    filter_args(Command::new("summary").about("Totals, savings rate, top category"))
                        .arg(type_arg(false)),
                ))
                .subcommand(json_args(
                    filter_args(Command::new("trends").about("Income and expenses per month"))
                        .arg(type_arg(false)),
                ))
                .subcommand(json_args(
                    filter_args(Command::new("breakdown").about("Totals per category"))
                        .arg(type_arg(true)),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export transactions and summary")
                .subcommand(export_cmd("csv", "Write a CSV file"))
                .subcommand(export_cmd("image", "Write an SVG report image")),
        )
}
