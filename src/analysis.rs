// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategoryAggregate, FinancialSummary, ForecastRow, Ledger};
use rand::Rng;
use rust_decimal::Decimal;

/// Multiplier bands as `[low, high)` in millionths.
const OPTIMISTIC: (i64, i64) = (800_000, 1_000_000);
const NORMAL: (i64, i64) = (1_000_000, 1_200_000);
const WORST_CASE: (i64, i64) = (1_200_000, 1_500_000);
const MULTIPLIER_SCALE: u32 = 6;

/// Saturates instead of panicking. Ledgers from the loader are bounded, so
/// their totals are always exact.
pub fn summarize(ledger: &Ledger) -> FinancialSummary {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for r in ledger.records() {
        if r.amount > Decimal::ZERO {
            income = income.saturating_add(r.amount);
        } else if r.amount < Decimal::ZERO {
            expense = expense.saturating_sub(r.amount);
        }
    }
    FinancialSummary {
        total_income: income,
        total_expense: expense,
        balance: income.saturating_sub(expense),
    }
}

/// Sums expense magnitudes per category. Categories without expenses are left out.
pub fn aggregate_expenses(ledger: &Ledger) -> CategoryAggregate {
    let mut agg = CategoryAggregate::default();
    for r in ledger.records().iter().filter(|r| r.amount < Decimal::ZERO) {
        agg.add(&r.category, r.amount.abs());
    }
    agg
}

/// Projects every category into optimistic, normal and worst-case figures.
///
/// Each row draws its three multipliers independently from `rng`, so the
/// output only repeats when the caller supplies an identically seeded source.
pub fn forecast<R: Rng>(agg: &CategoryAggregate, rng: &mut R) -> Vec<ForecastRow> {
    agg.iter()
        .map(|(category, base)| ForecastRow {
            category: category.to_string(),
            base,
            optimistic: base.saturating_mul(draw(rng, OPTIMISTIC)),
            normal: base.saturating_mul(draw(rng, NORMAL)),
            worst_case: base.saturating_mul(draw(rng, WORST_CASE)),
        })
        .collect()
}

/// [`forecast`] with a fresh, unseeded thread-local generator.
pub fn forecast_unseeded(agg: &CategoryAggregate) -> Vec<ForecastRow> {
    forecast(agg, &mut rand::thread_rng())
}

fn draw<R: Rng>(rng: &mut R, (low, high): (i64, i64)) -> Decimal {
    Decimal::new(rng.gen_range(low..high), MULTIPLIER_SCALE)
}
