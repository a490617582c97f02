// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analysis::aggregate_expenses;
use crate::completion::CompletionService;
use crate::insight::request_insight;
use crate::models::ForecastRow;
use anyhow::Result;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let client = super::completion_client()?;
    let ledger = super::load(sub)?;
    let rows = super::forecast_rows(sub, &aggregate_expenses(&ledger));
    println!("{}", super::forecast::render(&rows));
    println!("\nKantingo AI Insight\n{}", section(&client, &super::model(sub), &rows));
    Ok(())
}

/// Insight text, or the inline error shown in its place.
pub fn section<S: CompletionService + ?Sized>(
    service: &S,
    model: &str,
    rows: &[ForecastRow],
) -> String {
    match request_insight(service, model, rows) {
        Ok(text) => text,
        Err(e) => format!("AI error: {}", e),
    }
}
