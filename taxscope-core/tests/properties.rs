//! Behavioural properties of the progressive calculator checked over a
//! sweep of incomes.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use taxscope_core::{
    Currency, JurisdictionTable, ProgressiveTaxCalculator, Region, TaxBracket, UpperBound,
};

fn mexico_like_table() -> JurisdictionTable {
    let mut regions = BTreeMap::new();
    regions.insert(
        "CA".to_string(),
        Region {
            code: "CA".to_string(),
            name: "California".to_string(),
            surcharge_rate: dec!(13.3),
        },
    );

    JurisdictionTable {
        code: "MX".to_string(),
        name: "Mexico".to_string(),
        currency: Currency {
            code: "MXN".to_string(),
            symbol: "$".to_string(),
        },
        brackets: vec![
            TaxBracket::bounded(dec!(0), dec!(7735), dec!(1.92)),
            TaxBracket::bounded(dec!(7736), dec!(65651), dec!(6.4)),
            TaxBracket::bounded(dec!(65652), dec!(115375), dec!(10.88)),
            TaxBracket::bounded(dec!(115376), dec!(134119), dec!(16)),
            TaxBracket::bounded(dec!(134120), dec!(160577), dec!(17.92)),
            TaxBracket::unbounded(dec!(160578), dec!(21.36)),
        ],
        regions,
    }
}

fn incomes() -> Vec<Decimal> {
    (0..=200)
        .map(|step| Decimal::from(step * 997))
        .chain([dec!(7735), dec!(65651), dec!(115375), dec!(0.01)])
        .collect()
}

/// Sum of the finite bracket sizes, measured ceiling to ceiling.
fn finite_capacity(table: &JurisdictionTable) -> Decimal {
    let first = table.brackets[0].min;
    table
        .brackets
        .iter()
        .filter_map(|b| b.max.as_option())
        .last()
        .map_or(Decimal::ZERO, |top| top - first)
}

#[test]
fn total_tax_is_non_decreasing_in_income() {
    let table = mexico_like_table();
    let calculator = ProgressiveTaxCalculator::new(&table);
    let mut sorted = incomes();
    sorted.sort();

    let taxes: Vec<_> = sorted
        .iter()
        .map(|income| calculator.compute(*income, None).unwrap().total_tax)
        .collect();

    assert!(taxes.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn crossing_a_boundary_taxes_only_the_excess_at_the_new_rate() {
    let table = mexico_like_table();
    let calculator = ProgressiveTaxCalculator::new(&table);
    let epsilon = dec!(0.01);

    for ceiling in table.brackets.iter().filter_map(|b| b.max.as_option()) {
        let below = calculator.compute(ceiling, None).unwrap();
        let above = calculator.compute(ceiling + epsilon, None).unwrap();
        let next_rate = table
            .brackets
            .iter()
            .find(|b| b.min > ceiling)
            .map(|b| b.rate)
            .unwrap();

        assert_eq!(
            above.total_tax - below.total_tax,
            epsilon * next_rate / dec!(100),
            "boundary at {ceiling}"
        );
    }
}

#[test]
fn marginal_entries_cover_income_exactly_once() {
    let table = mexico_like_table();
    let calculator = ProgressiveTaxCalculator::new(&table);

    for income in incomes() {
        let result = calculator.compute(income, Some("CA")).unwrap();
        let allocated: Decimal = result.marginal_entries().map(|e| e.taxable_amount).sum();
        let finite_only: Decimal = result
            .marginal_entries()
            .filter(|e| e.bracket.max != UpperBound::Unbounded)
            .map(|e| e.taxable_amount)
            .sum();

        assert_eq!(allocated, income, "income {income}");
        assert_eq!(
            finite_only,
            income.min(finite_capacity(&table)),
            "income {income}"
        );
    }
}

#[test]
fn surcharge_is_additive() {
    let table = mexico_like_table();
    let calculator = ProgressiveTaxCalculator::new(&table);

    for income in incomes() {
        let with_region = calculator.compute(income, Some("CA")).unwrap();
        let without_region = calculator.compute(income, None).unwrap();

        assert_eq!(
            with_region.total_tax,
            without_region.total_tax + income * dec!(13.3) / dec!(100),
            "income {income}"
        );
        assert_eq!(
            with_region.breakdown.len(),
            without_region.breakdown.len() + 1
        );
    }
}

#[test]
fn breakdown_sums_to_total_and_net_balances() {
    let table = mexico_like_table();
    let calculator = ProgressiveTaxCalculator::new(&table);

    for income in incomes() {
        let result = calculator.compute(income, Some("CA")).unwrap();
        let summed: Decimal = result.breakdown.iter().map(|e| e.tax_amount).sum();

        assert_eq!(summed, result.total_tax);
        assert_eq!(result.net_income + result.total_tax, result.gross_income);
    }
}

#[test]
fn breakdown_is_in_ascending_bracket_order() {
    let table = mexico_like_table();

    let result = ProgressiveTaxCalculator::new(&table)
        .compute(dec!(500000), None)
        .unwrap();
    let mins: Vec<_> = result.breakdown.iter().map(|e| e.bracket.min).collect();
    let mut sorted = mins.clone();
    sorted.sort();

    assert_eq!(mins, sorted);
    assert_eq!(result.breakdown.len(), table.brackets.len());
}

#[test]
fn extreme_incomes_stay_within_decimal_range() {
    let table = mexico_like_table();
    let calculator = ProgressiveTaxCalculator::new(&table);

    for income in [
        dec!(1000000000000000),
        dec!(100000000000000000000),
        dec!(1000000000000000000000000000),
        Decimal::MAX,
    ] {
        let result = calculator
            .compute(income, Some("CA"))
            .unwrap_or_else(|e| panic!("income {income}: {e}"));
        let summed: Decimal = result.breakdown.iter().map(|e| e.tax_amount).sum();

        assert!(result.total_tax < income, "income {income}");
        assert_eq!(summed, result.total_tax, "income {income}");
    }
}
