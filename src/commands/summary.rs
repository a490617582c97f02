// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analysis::summarize;
use crate::models::FinancialSummary;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use comfy_table::Table;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let ledger = super::load(sub)?;
    let summary = summarize(&ledger);
    let ccy = sub.get_one::<String>("currency").unwrap();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
        println!("{}", metrics_table(&summary, ccy));
    }
    Ok(())
}

pub fn metrics_table(summary: &FinancialSummary, ccy: &str) -> Table {
    pretty_table(
        &["Income", "Expense", "Balance"],
        vec![vec![
            fmt_money(&summary.total_income, ccy),
            fmt_money(&summary.total_expense, ccy),
            fmt_money(&summary.balance, ccy),
        ]],
    )
}
