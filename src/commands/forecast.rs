// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analysis::aggregate_expenses;
use crate::insight::FORECAST_HEADERS;
use crate::models::ForecastRow;
use crate::utils::{bar_chart, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let ledger = super::load(sub)?;
    let rows = super::forecast_rows(sub, &aggregate_expenses(&ledger));
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        println!("{}", render(&rows));
    }
    Ok(())
}

pub fn render(rows: &[ForecastRow]) -> String {
    if rows.is_empty() {
        return "No expenses to forecast.".to_string();
    }
    let data = rows
        .iter()
        .map(|r| {
            vec![
                r.category.clone(),
                format!("{:.2}", r.base),
                format!("{:.2}", r.optimistic),
                format!("{:.2}", r.normal),
                format!("{:.2}", r.worst_case),
            ]
        })
        .collect();
    let groups: Vec<_> = rows
        .iter()
        .map(|r| {
            (
                r.category.clone(),
                vec![r.base, r.optimistic, r.normal, r.worst_case],
            )
        })
        .collect();
    format!(
        "{}\n\n{}",
        pretty_table(&FORECAST_HEADERS, data),
        bar_chart("Expense forecast", &FORECAST_HEADERS[1..], &groups)
    )
}
