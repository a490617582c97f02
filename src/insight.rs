// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::completion::{ChatMessage, CompletionService};
use crate::error::ServiceError;
use crate::models::ForecastRow;
use comfy_table::{Cell, Table, presets::ASCII_MARKDOWN};
use tracing::info;

/// Only this many forecast rows are embedded in the prompt.
pub const MAX_PROMPT_ROWS: usize = 20;

pub const INSIGHT_PERSONA: &str = "You are Kantingo AI, a digital financial analyst. \
Give insight on budgeting, cashflow, the largest spending categories, \
spending risks, and concrete savings recommendations.";

pub const FORECAST_HEADERS: [&str; 5] = ["Category", "Base Forecast", "Optimistic", "Normal", "Worst Case"];

/// Renders at most [`MAX_PROMPT_ROWS`] forecast rows as a markdown table.
pub fn forecast_table_text(rows: &[ForecastRow]) -> String {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_header(FORECAST_HEADERS.iter().map(|h| Cell::new(*h)));
    for r in rows.iter().take(MAX_PROMPT_ROWS) {
        t.add_row(vec![
            Cell::new(&r.category),
            Cell::new(format!("{:.2}", r.base)),
            Cell::new(format!("{:.2}", r.optimistic)),
            Cell::new(format!("{:.2}", r.normal)),
            Cell::new(format!("{:.2}", r.worst_case)),
        ]);
    }
    t.to_string()
}

pub fn insight_messages(rows: &[ForecastRow]) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(INSIGHT_PERSONA),
        ChatMessage::user(format!(
            "Here is the expense forecast data:\n{}\nGive a complete analysis and recommendations.",
            forecast_table_text(rows)
        )),
    ]
}

/// One-shot narrative over the forecast. Failures are returned, never retried.
pub fn request_insight<S: CompletionService + ?Sized>(
    service: &S,
    model: &str,
    rows: &[ForecastRow],
) -> Result<String, ServiceError> {
    info!(model, rows = rows.len().min(MAX_PROMPT_ROWS), "requesting insight");
    service.complete(model, &insight_messages(rows))
}
