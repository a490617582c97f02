// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const UA: &str = concat!(
    "kantingo/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/kantingo)"
);

const BAR_WIDTH: usize = 40;

pub fn http_client() -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(120))
        .user_agent(UA)
        .build()
}

/// `Rp 1,234,568` style: rounded to whole units, thousands grouped.
pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{} {}", ccy, group_thousands(d.round_dp(0)))
}

fn group_thousands(d: Decimal) -> String {
    let raw = d.abs().trunc().to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if d.is_sign_negative() && !d.is_zero() {
        out.insert(0, '-');
    }
    out
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Horizontal bar chart. Each group is a label followed by one bar per series;
/// bars share a single scale so groups stay comparable.
pub fn bar_chart(title: &str, series: &[&str], groups: &[(String, Vec<Decimal>)]) -> String {
    let max = groups
        .iter()
        .flat_map(|(_, vals)| vals.iter())
        .filter_map(|v| v.to_f64())
        .fold(0.0_f64, f64::max);
    let label_w = series.iter().map(|s| s.chars().count()).max().unwrap_or(0);

    let mut out = format!("{}\n", title);
    for (label, vals) in groups {
        out.push_str(&format!("{}\n", label));
        for (name, v) in series.iter().zip(vals) {
            let len = if max > 0.0 {
                ((v.to_f64().unwrap_or(0.0) / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            out.push_str(&format!(
                "  {:<label_w$} {} {}\n",
                name,
                "█".repeat(len),
                group_thousands(v.round_dp(0)),
            ));
        }
    }
    out
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
