// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kantingo::analysis::{aggregate_expenses, forecast, forecast_unseeded, summarize};
use kantingo::models::{CategoryAggregate, Ledger, TransactionRecord};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;

fn ledger(rows: &[(&str, i64)]) -> Ledger {
    rows.iter()
        .map(|(c, a)| TransactionRecord {
            category: c.to_string(),
            amount: Decimal::from(*a),
        })
        .collect()
}

#[test]
fn worked_example() {
    let l = ledger(&[("A", 100), ("B", -40), ("B", -10), ("C", -50)]);
    let s = summarize(&l);
    assert_eq!(s.total_income, Decimal::from(100));
    assert_eq!(s.total_expense, Decimal::from(100));
    assert_eq!(s.balance, Decimal::ZERO);

    let agg = aggregate_expenses(&l);
    assert_eq!(agg.len(), 2);
    assert_eq!(agg.get("B"), Some(Decimal::from(50)));
    assert_eq!(agg.get("C"), Some(Decimal::from(50)));
    assert_eq!(agg.get("A"), None);
}

#[test]
fn empty_ledger_is_all_zero() {
    let l = Ledger::default();
    let s = summarize(&l);
    assert_eq!(s.total_income, Decimal::ZERO);
    assert_eq!(s.total_expense, Decimal::ZERO);
    assert_eq!(s.balance, Decimal::ZERO);
    assert!(aggregate_expenses(&l).is_empty());
    assert!(forecast_unseeded(&aggregate_expenses(&l)).is_empty());
}

#[test]
fn zero_amounts_count_nowhere() {
    let l = ledger(&[("A", 0), ("B", 0)]);
    let s = summarize(&l);
    assert_eq!(s.total_income, Decimal::ZERO);
    assert_eq!(s.total_expense, Decimal::ZERO);
    assert!(aggregate_expenses(&l).is_empty());
}

#[test]
fn totals_balance_and_aggregate_agree() {
    let cases = [
        ledger(&[("Salary", 5_000_000), ("Food", -1_200_000), ("Rent", -2_500_000)]),
        ledger(&[("Food", -10), ("Food", -20), ("Fun", -5)]),
        ledger(&[("Gift", 300), ("Bonus", 700)]),
        ledger(&[("X", -1), ("Y", 2), ("X", -3), ("Z", -4), ("Y", -5)]),
    ];
    for l in &cases {
        let s = summarize(l);
        assert!(s.total_income >= Decimal::ZERO);
        assert!(s.total_expense >= Decimal::ZERO);
        assert_eq!(s.balance, s.total_income - s.total_expense);
        let agg = aggregate_expenses(l);
        assert_eq!(agg.total(), s.total_expense);
        assert!(agg.iter().all(|(_, v)| v >= Decimal::ZERO));
    }
}

fn sample_aggregate() -> CategoryAggregate {
    let mut agg = CategoryAggregate::default();
    agg.add("Rent", Decimal::from(2_500_000));
    agg.add("Food", Decimal::new(123_456, 2));
    agg.add("Fun", Decimal::from(1));
    agg.add("Nothing", Decimal::ZERO);
    agg
}

#[test]
fn forecast_stays_inside_scenario_bands() {
    let agg = sample_aggregate();
    let mut rng = StdRng::seed_from_u64(7);
    let low = Decimal::new(8, 1);
    let one = Decimal::ONE;
    let mid = Decimal::new(12, 1);
    let high = Decimal::new(15, 1);
    for _ in 0..500 {
        for r in forecast(&agg, &mut rng) {
            let b = r.base;
            if b.is_zero() {
                assert!(r.optimistic.is_zero() && r.normal.is_zero() && r.worst_case.is_zero());
                continue;
            }
            assert!(low * b <= r.optimistic && r.optimistic < one * b, "{r:?}");
            assert!(one * b <= r.normal && r.normal < mid * b, "{r:?}");
            assert!(mid * b <= r.worst_case && r.worst_case < high * b, "{r:?}");
        }
    }
}

#[test]
fn unseeded_forecast_respects_bands() {
    let agg = sample_aggregate();
    for r in forecast_unseeded(&agg) {
        assert!(r.optimistic <= r.base);
        assert!(r.normal >= r.base);
        assert!(r.worst_case >= r.base * Decimal::new(12, 1));
    }
}

#[test]
fn forecast_rows_follow_aggregate_order() {
    let agg = sample_aggregate();
    let rows = forecast_unseeded(&agg);
    let cats: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
    let expected: Vec<&str> = agg.iter().map(|(c, _)| c).collect();
    assert_eq!(cats, expected);
    assert_eq!(cats, vec!["Food", "Fun", "Nothing", "Rent"]);
    for (r, (_, base)) in rows.iter().zip(agg.iter()) {
        assert_eq!(r.base, base);
    }
}

#[test]
fn same_seed_reproduces_forecast() {
    let agg = sample_aggregate();
    let a = forecast(&agg, &mut StdRng::seed_from_u64(42));
    let b = forecast(&agg, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn hand_built_huge_ledger_saturates_instead_of_panicking() {
    let l: Ledger = [Decimal::MAX, Decimal::MAX, Decimal::MIN, Decimal::MIN]
        .into_iter()
        .map(|amount| TransactionRecord {
            category: "X".to_string(),
            amount,
        })
        .collect();
    let s = summarize(&l);
    assert_eq!(s.total_income, Decimal::MAX);
    assert_eq!(s.total_expense, Decimal::MAX);
    assert_eq!(s.balance, Decimal::ZERO);

    let agg = aggregate_expenses(&l);
    assert_eq!(agg.get("X"), Some(Decimal::MAX));
    let rows = forecast(&agg, &mut StdRng::seed_from_u64(3));
    assert_eq!(rows[0].worst_case, Decimal::MAX);
}
