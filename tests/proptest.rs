// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Property-based tests for the stock ledger.
//!
//! These tests check the token grammars against an independent reference
//! matcher and verify that any sequence of instructions leaves the stock
//! table exactly where a simple model says it should be.

use proptest::prelude::*;
use std::collections::BTreeMap;
use stock_ledger_rs::validator::{is_valid_amount, is_valid_sku};
use stock_ledger_rs::{StockError, StockManager};

// =============================================================================
// Reference Matchers
// =============================================================================

/// `^[A-Z]{1,3}-[0-9]{1,3}$`, written over chars.
fn reference_sku(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let letters = chars.iter().take_while(|c| c.is_ascii_uppercase()).count();
    let rest = &chars[letters..];

    if !(1..=3).contains(&letters) || rest.first() != Some(&'-') {
        return false;
    }
    let digits = &rest[1..];
    (1..=3).contains(&digits.len()) && digits.iter().all(|c| c.is_ascii_digit())
}

/// `^[0-9]{1,3}$`, written over chars.
fn reference_amount(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    (1..=3).contains(&chars.len()) && chars.iter().all(|c| c.is_ascii_digit())
}

// =============================================================================
// Arbitrary Strategies
// =============================================================================

fn arb_valid_sku() -> impl Strategy<Value = String> {
    "[A-Z]{1,3}-[0-9]{1,3}"
}

/// Strings close to the SKU grammar, so both outcomes are common.
fn arb_near_sku() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_valid_sku(),
        "[A-Za-z]{0,5}-?[0-9]{0,5}",
        "[A-Z0-9 ._+-]{0,8}",
    ]
}

fn arb_near_amount() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,3}", "[0-9]{0,5}", "[-+ .0-9a-z]{0,5}"]
}

/// A small pool of SKUs so instructions collide on the same entries.
fn arb_line_sku() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(vec!["AB-6", "CD-3", "Z-1"]).prop_map(str::to_string),
        1 => prop::sample::select(vec!["ab-6", "ABCD-12", "AB6"]).prop_map(str::to_string),
    ]
}

fn arb_line_amount() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => (0u16..=999).prop_map(|v| v.to_string()),
        1 => prop::sample::select(vec!["1000", "-5", "0.5", ""]).prop_map(str::to_string),
    ]
}

fn arb_line() -> impl Strategy<Value = String> {
    let name = prop_oneof![
        3 => Just("set-stock"),
        3 => Just("add"),
        3 => Just("order"),
        1 => Just("remove"),
    ];
    (name, arb_line_sku(), arb_line_amount())
        .prop_map(|(name, sku, amount)| format!("{name} {sku} {amount}"))
}

// =============================================================================
// Validator Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Every string generated from the grammar is accepted.
    #[test]
    fn grammar_skus_are_valid(sku in arb_valid_sku()) {
        prop_assert!(is_valid_sku(&sku));
    }

    /// The SKU validator agrees with the reference matcher on near misses.
    #[test]
    fn sku_validator_matches_reference(s in arb_near_sku()) {
        prop_assert_eq!(is_valid_sku(&s), reference_sku(&s));
    }

    /// The SKU validator agrees with the reference matcher on arbitrary text.
    #[test]
    fn sku_validator_matches_reference_on_any_string(s in any::<String>()) {
        prop_assert_eq!(is_valid_sku(&s), reference_sku(&s));
    }

    /// The amount validator agrees with the reference matcher.
    #[test]
    fn amount_validator_matches_reference(s in arb_near_amount()) {
        prop_assert_eq!(is_valid_amount(&s), reference_amount(&s));
    }

    /// Every accepted amount is in 0..=999 and parses to the same value.
    #[test]
    fn accepted_amounts_are_in_range(value in 0u32..=1999) {
        let token = value.to_string();
        prop_assert_eq!(is_valid_amount(&token), value <= 999);
    }
}

// =============================================================================
// Instruction Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Setting the same stock twice is the same as setting it once.
    #[test]
    fn set_stock_is_idempotent(sku in arb_valid_sku(), amount in 0u16..=999) {
        let line = format!("set-stock {sku} {amount}");
        let mut manager = StockManager::new();

        manager.process_command(&line).unwrap();
        let once = manager.clone();
        manager.process_command(&line).unwrap();

        prop_assert_eq!(&manager, &once);
        prop_assert_eq!(manager.quantity(&sku), Some(u64::from(amount)));
    }

    /// `add` on an unset SKU fails and leaves the table unchanged.
    #[test]
    fn add_before_set_fails(sku in arb_valid_sku(), amount in 0u16..=999) {
        let mut manager = StockManager::new();

        let result = manager.process_command(&format!("add {sku} {amount}"));

        let is_uninitialized = matches!(result, Err(StockError::UninitializedSku { .. }));
        prop_assert!(is_uninitialized);
        prop_assert!(manager.is_empty());
    }

    /// An order above the stock fails and leaves the table unchanged.
    #[test]
    fn cannot_oversell(stock in 0u16..999, extra in 1u16..=999) {
        let requested = (stock + extra).min(999);
        prop_assume!(requested > stock);

        let mut manager = StockManager::new();
        manager.process_command(&format!("set-stock AB-6 {stock}")).unwrap();
        let before = manager.clone();

        let result = manager.process_command(&format!("order AB-6 {requested}"));

        let is_insufficient = matches!(result, Err(StockError::InsufficientStock { .. }));
        prop_assert!(is_insufficient);
        prop_assert_eq!(manager, before);
    }

    /// An order within the stock reduces it by exactly the amount.
    #[test]
    fn order_within_stock_subtracts(stock in 0u32..=999, fraction in 0u32..=100) {
        let requested = stock * fraction / 100;

        let mut manager = StockManager::new();
        manager.process_command(&format!("set-stock AB-6 {stock}")).unwrap();
        manager.process_command(&format!("order AB-6 {requested}")).unwrap();

        prop_assert_eq!(manager.quantity("AB-6"), Some(u64::from(stock - requested)));
    }

    /// Any sequence of lines matches a model that applies only accepted lines,
    /// and every rejected line leaves the table unchanged.
    #[test]
    fn sequence_matches_model(lines in prop::collection::vec(arb_line(), 0..50)) {
        let mut manager = StockManager::new();
        let mut model: BTreeMap<String, u64> = BTreeMap::new();

        for line in &lines {
            let before = manager.clone();
            let result = manager.process_command(line);

            let expected_ok = apply_to_model(&mut model, line);
            prop_assert_eq!(result.is_ok(), expected_ok, "line {:?}: {:?}", line, result);
            if result.is_err() {
                prop_assert_eq!(&manager, &before);
            }

            let actual: BTreeMap<String, u64> = manager
                .snapshot()
                .into_iter()
                .map(|level| (level.sku.to_string(), level.quantity))
                .collect();
            prop_assert_eq!(&actual, &model);
        }
    }
}

/// Applies `line` to the model, returning whether it was accepted.
fn apply_to_model(model: &mut BTreeMap<String, u64>, line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if !(2..=3).contains(&tokens.len()) {
        return false;
    }
    let (name, sku) = (tokens[0], tokens[1]);
    let amount = tokens.get(2).copied().unwrap_or("");

    if !["set-stock", "add", "order"].contains(&name)
        || !reference_sku(sku)
        || !reference_amount(amount)
    {
        return false;
    }
    let amount: u64 = amount.parse().unwrap();

    if name == "set-stock" {
        model.insert(sku.to_string(), amount);
        return true;
    }

    match (name, model.get_mut(sku)) {
        ("add", Some(quantity)) => {
            *quantity += amount;
            true
        }
        ("order", Some(quantity)) if *quantity >= amount => {
            *quantity -= amount;
            true
        }
        _ => false,
    }
}
