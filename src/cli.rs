// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command};

const WINDOWS: [&str; 4] = ["today", "week", "month", "all"];
const TYPES: [&str; 2] = ["income", "expense"];
const GOALS: [&str; 4] = ["save", "track", "budget", "all"];

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn window_arg() -> Arg {
    Arg::new("window")
        .long("window")
        .short('w')
        .value_parser(WINDOWS)
        .default_value("month")
        .help("Time window to aggregate over")
}

pub fn build_cli() -> Command {
    command!()
        .name("moneyjar")
        .propagate_version(true)
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("MONEYJAR_DB")
                .help("Path of the store (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .global(true)
                .env("MONEYJAR_TODAY")
                .help("Anchor date for time windows, YYYY-MM-DD (defaults to the local date)"),
        )
        .subcommand(
            Command::new("onboard")
                .about("Pick a goal and starter categories")
                .arg(Arg::new("goal").long("goal").value_parser(GOALS))
                .arg(
                    Arg::new("categories")
                        .long("categories")
                        .value_delimiter(',')
                        .num_args(1..)
                        .help("Preset keys or names, e.g. food,Transporte"),
                )
                .arg(
                    Arg::new("skip_categories")
                        .long("skip-categories")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("categories")
                        .help("Finish onboarding without creating any category"),
                ),
        )
        .subcommand(Command::new("status").about("Show onboarding state and goal"))
        .subcommand(Command::new("reset").about("Erase all stored data"))
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("icon").long("icon")),
                )
                .subcommand(Command::new("list"))
                .subcommand(
                    Command::new("show")
                        .about("Income, expenses and transactions of one category")
                        .arg(Arg::new("category").required(true)),
                )
                .subcommand(
                    Command::new("rename")
                        .arg(Arg::new("category").required(true))
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(
                    Command::new("icon")
                        .arg(Arg::new("category").required(true))
                        .arg(Arg::new("icon").required(true)),
                )
                .subcommand(Command::new("rm").arg(Arg::new("category").required(true)))
                .subcommand(Command::new("icons").about("List icons available for categories")),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and edit transactions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(TYPES)
                                .default_value("expense"),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("type").long("type").value_parser(TYPES)),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true)))
                .subcommand(json_args(
                    Command::new("list")
                        .arg(Arg::new("category").long("category"))
                        .arg(window_arg().default_value("all")),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries")
                .subcommand(json_args(Command::new("summary").arg(window_arg()))),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .value_parser(["csv", "json"])
                            .default_value("csv"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
}
