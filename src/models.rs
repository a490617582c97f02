// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of an uploaded ledger. Positive amounts are income, negative are expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub category: String,
    pub amount: Decimal,
}

/// Transactions in file order, as read from a single upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ledger {
    records: Vec<TransactionRecord>,
}

impl Ledger {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<TransactionRecord> for Ledger {
    fn from_iter<I: IntoIterator<Item = TransactionRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
}

/// Expense magnitude per category, keyed and ordered by category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryAggregate {
    totals: BTreeMap<String, Decimal>,
}

impl CategoryAggregate {
    pub fn add(&mut self, category: &str, magnitude: Decimal) {
        let slot = self
            .totals
            .entry(category.to_string())
            .or_insert(Decimal::ZERO);
        *slot = slot.saturating_add(magnitude);
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.totals.get(category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn total(&self) -> Decimal {
        self.totals
            .values()
            .fold(Decimal::ZERO, |acc, v| acc.saturating_add(*v))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub category: String,
    pub base: Decimal,
    pub optimistic: Decimal,
    pub normal: Decimal,
    pub worst_case: Decimal,
}
