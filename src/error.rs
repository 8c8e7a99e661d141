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

//! Error types for instruction processing.

use crate::base::{Amount, Quantity, Sku};
use crate::command::CommandName;
use thiserror::Error;

/// Instruction processing errors.
///
/// Every variant is recoverable: the stock table is left exactly as it was
/// before the failing instruction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StockError {
    /// Unknown command name or wrong number of tokens
    #[error("invalid command: `{line}`")]
    InvalidCommand { line: String },

    /// SKU token does not match `^[A-Z]{1,3}-[0-9]{1,3}$`
    #[error("invalid SKU format: `{sku}`")]
    InvalidSku { sku: String },

    /// Amount token is missing or does not match `^[0-9]{1,3}$`
    #[error("invalid amount format: `{amount}`")]
    InvalidAmount { amount: String },

    /// `add` or `order` on a SKU that was never set
    #[error("SKU {sku} has not been set, cannot {command}")]
    UninitializedSku { command: CommandName, sku: Sku },

    /// Order exceeds the quantity on hand
    #[error("insufficient stock for SKU {sku}: requested {requested}, available {available}")]
    InsufficientStock {
        sku: Sku,
        requested: Amount,
        available: Quantity,
    },
}
