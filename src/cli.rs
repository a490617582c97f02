// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::completion::{DEFAULT_MODEL, SUPPORTED_MODELS};
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command, command};

fn file_arg() -> Arg {
    Arg::new("file")
        .long("file")
        .short('f')
        .required(true)
        .help("Transactions spreadsheet (xlsx, xls, ods or csv) with Category and Amount columns")
}

fn model_arg() -> Arg {
    Arg::new("model")
        .long("model")
        .short('m')
        .default_value(DEFAULT_MODEL)
        .value_parser(PossibleValuesParser::new(SUPPORTED_MODELS))
        .help("Chat model used for AI insight and chat")
}

fn seed_arg() -> Arg {
    Arg::new("seed")
        .long("seed")
        .value_parser(clap::value_parser!(u64))
        .help("Seed the scenario forecast so it can be reproduced")
}

fn currency_arg() -> Arg {
    Arg::new("currency")
        .long("currency")
        .default_value("Rp")
        .help("Currency label used for summary metrics")
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    ]
}

pub fn build_cli() -> Command {
    command!()
        .name("kantingo")
        .about("Kantingo: smart financial dashboard with scenario forecasts and AI insight")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging (RUST_LOG takes precedence)"),
        )
        .subcommand(
            Command::new("summary")
                .about("Total income, total expense and balance")
                .arg(file_arg())
                .arg(currency_arg())
                .args(json_args()),
        )
        .subcommand(
            Command::new("categories")
                .about("Expenses per category with a bar chart")
                .arg(file_arg())
                .args(json_args()),
        )
        .subcommand(
            Command::new("forecast")
                .about("Optimistic, normal and worst-case projection per category")
                .arg(file_arg())
                .arg(seed_arg())
                .args(json_args()),
        )
        .subcommand(
            Command::new("insight")
                .about("Ask the AI analyst to comment on the forecast")
                .arg(file_arg())
                .arg(model_arg())
                .arg(seed_arg()),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Summary, charts, forecast and AI insight in one page")
                .arg(file_arg())
                .arg(model_arg())
                .arg(seed_arg())
                .arg(currency_arg())
                .arg(
                    Arg::new("no-ai")
                        .long("no-ai")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("chat")
                        .help("Skip the AI insight"),
                )
                .arg(
                    Arg::new("chat")
                        .long("chat")
                        .action(ArgAction::SetTrue)
                        .help("Continue into an interactive chat afterwards"),
                ),
        )
        .subcommand(
            Command::new("chat")
                .about("Interactive chat with Kantingo AI (/history shows the transcript, /reset clears, /quit exits)")
                .arg(model_arg()),
        )
        .subcommand(Command::new("models").about("List supported chat models"))
}
