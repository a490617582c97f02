// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod summary;
pub mod categories;
pub mod forecast;
pub mod insight;
pub mod dashboard;
pub mod chat;
pub mod list_models;

use crate::analysis::{forecast, forecast_unseeded};
use crate::completion::{DEFAULT_MODEL, HttpCompletionClient};
use crate::config::Settings;
use crate::ledger::load_ledger_file;
use crate::models::{CategoryAggregate, ForecastRow, Ledger};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub(crate) fn load(sub: &clap::ArgMatches) -> Result<Ledger> {
    let path = sub.get_one::<String>("file").unwrap().trim();
    load_ledger_file(path).with_context(|| format!("Load {}", path))
}

pub(crate) fn model(sub: &clap::ArgMatches) -> String {
    sub.get_one::<String>("model")
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

pub(crate) fn forecast_rows(sub: &clap::ArgMatches, agg: &CategoryAggregate) -> Vec<ForecastRow> {
    match sub.get_one::<u64>("seed") {
        Some(seed) => forecast(agg, &mut StdRng::seed_from_u64(*seed)),
        None => forecast_unseeded(agg),
    }
}

/// Fails fast when the credential is missing, before any request is built.
pub(crate) fn completion_client() -> Result<HttpCompletionClient> {
    let settings = Settings::load()?;
    Ok(HttpCompletionClient::new(&settings)?)
}
