// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON record per line"),
    ]
}

fn type_arg(required: bool) -> Arg {
    Arg::new("type")
        .long("type")
        .required(required)
        .value_parser(["income", "expense"])
        .help("Transaction type")
}

pub fn build_cli() -> Command {
    Command::new("spendlens")
        .version(clap::crate_version!())
        .about("Personal finance dashboard: totals, category breakdowns and monthly cashflow")
        .arg(
            Arg::new("seed")
                .long("seed")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Seed for the sample transaction log (overrides settings)"),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .global(true)
                .value_parser(value_parser!(usize))
                .help("Number of sample transactions (overrides settings)"),
        )
        .subcommand(
            Command::new("report")
                .about("Derived views over the transaction log")
                .subcommand(
                    Command::new("summary")
                        .about("Totals, balance and recent transactions")
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("by-category")
                        .about("Per-category totals and shares for one type")
                        .arg(type_arg(true))
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("monthly")
                        .about("Income and expense for the last six months")
                        .arg(
                            Arg::new("as_of")
                                .long("as-of")
                                .help("Anchor date YYYY-MM-DD (defaults to today)"),
                        )
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction in this session")
                        .arg(type_arg(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS (defaults to now)"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("Search, filter and sort transactions")
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Case-insensitive match on description or category"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["all", "income", "expense"])
                                .default_value("all"),
                        )
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .value_parser(["date", "amount"])
                                .default_value("date"),
                        )
                        .arg(
                            Arg::new("dir")
                                .long("dir")
                                .value_parser(["asc", "desc"])
                                .default_value("desc"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("category").about("Categories").subcommand(
                Command::new("list")
                    .about("Valid categories per transaction type")
                    .arg(type_arg(false)),
            ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Write the session's transactions to a file")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .required(true)
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(
            Command::new("settings")
                .about("Persisted preferences")
                .subcommand(Command::new("show").about("Print current settings"))
                .subcommand(
                    Command::new("set")
                        .about("Update settings")
                        .arg(
                            Arg::new("language")
                                .long("language")
                                .value_parser(["en", "pt-BR"]),
                        )
                        .arg(
                            Arg::new("sample_size")
                                .long("sample-size")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("fixed_seed")
                                .long("fixed-seed")
                                .value_parser(value_parser!(u64))
                                .conflicts_with("clear_seed"),
                        )
                        .arg(
                            Arg::new("clear_seed")
                                .long("clear-seed")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
}
