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

//! Core value types for SKUs, amounts and quantities.
//!
//! [`Sku`] and [`Amount`] can only be built from tokens that pass the
//! [`validator`](crate::validator) grammars, so holding one is proof that the
//! token was well formed.

use crate::StockError;
use crate::validator::{is_valid_amount, is_valid_sku};
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Quantity on hand for a single SKU.
///
/// Individual amounts are bounded to `0..=999`, but repeated additions
/// accumulate without an upper bound.
pub type Quantity = u64;

/// Stock-keeping unit code, e.g. `AB-6`.
///
/// Wraps a string matching `^[A-Z]{1,3}-[0-9]{1,3}$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Validates `token` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`StockError::InvalidSku`] if the token does not match the SKU grammar.
    pub fn parse(token: &str) -> Result<Self, StockError> {
        if !is_valid_sku(token) {
            return Err(StockError::InvalidSku {
                sku: token.to_owned(),
            });
        }
        Ok(Sku(token.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Sku {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sku::parse(s)
    }
}

// Lets the stock table be queried with a plain `&str`.
impl Borrow<str> for Sku {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Amount given to `set-stock`, `add` or `order`.
///
/// Wraps a `u16` in `0..=999`, parsed from 1-3 ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Amount(u16);

impl Amount {
    /// Largest amount a single instruction may carry.
    pub const MAX: Amount = Amount(999);

    /// Validates `token` and converts it to an amount.
    ///
    /// # Errors
    ///
    /// Returns [`StockError::InvalidAmount`] if the token does not match the amount grammar.
    pub fn parse(token: &str) -> Result<Self, StockError> {
        if !is_valid_amount(token) {
            return Err(StockError::InvalidAmount {
                amount: token.to_owned(),
            });
        }
        // At most three ASCII digits, so neither overflow nor a parse failure is possible.
        let value = token
            .bytes()
            .fold(0u16, |acc, digit| acc * 10 + u16::from(digit - b'0'));
        Ok(Amount(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn quantity(self) -> Quantity {
        Quantity::from(self.0)
    }
}

impl FromStr for Amount {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
