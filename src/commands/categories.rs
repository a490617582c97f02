// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analysis::aggregate_expenses;
use crate::models::CategoryAggregate;
use crate::utils::{bar_chart, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let ledger = super::load(sub)?;
    let agg = aggregate_expenses(&ledger);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &agg)? {
        println!("{}", render(&agg));
    }
    Ok(())
}

pub fn render(agg: &CategoryAggregate) -> String {
    if agg.is_empty() {
        return "No expenses in this file.".to_string();
    }
    let data = agg
        .iter()
        .map(|(cat, amt)| vec![cat.to_string(), format!("{:.2}", amt)])
        .collect();
    let groups: Vec<_> = agg
        .iter()
        .map(|(cat, amt)| (cat.to_string(), vec![amt]))
        .collect();
    format!(
        "{}\n\n{}",
        pretty_table(&["Category", "Expense"], data),
        bar_chart("Expenses per category", &["Expense"], &groups)
    )
}
