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

//! Stock management.
//!
//! The [`StockManager`] owns the stock table and applies instructions to it
//! one line at a time.
//!
//! # Instructions
//!
//! - **set-stock**: Overwrite the quantity on hand, creating the entry if needed.
//! - **add**: Increase the quantity of a SKU that was already set.
//! - **order**: Decrease the quantity of a SKU that was already set (fails if insufficient stock).
//!
//! # Atomicity
//!
//! Every check runs before the table is touched, so a failed instruction
//! leaves the table unchanged and the manager ready for the next line.
//! Calls take `&mut self`; sharing a manager between threads requires
//! wrapping the whole instance in a mutex.

use crate::base::{Quantity, Sku};
use crate::command::{Command, CommandName};
use crate::StockError;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Quantity on hand for one SKU, as reported by [`StockManager::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockLevel {
    pub sku: Sku,
    pub quantity: Quantity,
}

/// Owns the stock table and applies instructions to it.
///
/// # Invariants
///
/// - Entries are only created by `set-stock`, and never removed.
/// - Quantities never go negative: an order larger than the stock is rejected.
/// - A rejected instruction performs no mutation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StockManager {
    /// Quantity on hand indexed by SKU.
    stock: HashMap<Sku, Quantity>,
}

impl StockManager {
    /// Creates a manager with an empty stock table.
    pub fn new() -> Self {
        StockManager {
            stock: HashMap::new(),
        }
    }

    /// Parses and applies one instruction line.
    ///
    /// | Command | Behavior |
    /// |---------|----------|
    /// | `set-stock SKU N` | Sets the quantity to `N`, replacing any previous value |
    /// | `add SKU N` | Adds `N` to an existing quantity |
    /// | `order SKU N` | Subtracts `N` from an existing quantity |
    ///
    /// # Errors
    ///
    /// - [`StockError::InvalidCommand`] - Unknown command or wrong number of tokens.
    /// - [`StockError::InvalidSku`] - SKU token is malformed.
    /// - [`StockError::InvalidAmount`] - Amount token is missing or malformed.
    /// - [`StockError::UninitializedSku`] - `add` or `order` before any `set-stock` for the SKU.
    /// - [`StockError::InsufficientStock`] - Order exceeds the quantity on hand.
    pub fn process_command(&mut self, line: &str) -> Result<(), StockError> {
        let command = Command::parse(line)?;
        self.apply(command)
    }

    /// Applies an already parsed instruction.
    ///
    /// # Errors
    ///
    /// Same business-rule errors as [`process_command`](Self::process_command):
    /// [`StockError::UninitializedSku`] and [`StockError::InsufficientStock`].
    pub fn apply(&mut self, command: Command) -> Result<(), StockError> {
        let name = command.name();

        match command {
            Command::SetStock { sku, amount } => {
                trace!(%sku, %amount, "setting stock");
                self.stock.insert(sku, amount.quantity());
            }
            Command::Add { sku, amount } => {
                let Some(quantity) = self.stock.get_mut(&sku) else {
                    return Err(uninitialized(name, sku));
                };
                *quantity += amount.quantity();
                trace!(%sku, %amount, total = *quantity, "added stock");
            }
            Command::Order { sku, amount } => {
                let Some(quantity) = self.stock.get_mut(&sku) else {
                    return Err(uninitialized(name, sku));
                };
                let Some(remaining) = quantity.checked_sub(amount.quantity()) else {
                    debug!(%sku, requested = %amount, available = *quantity, "order rejected");
                    return Err(StockError::InsufficientStock {
                        sku,
                        requested: amount,
                        available: *quantity,
                    });
                };
                *quantity = remaining;
                trace!(%sku, %amount, remaining, "order fulfilled");
            }
        }

        Ok(())
    }

    /// Returns the quantity on hand, or `None` if the SKU was never set.
    pub fn quantity(&self, sku: &str) -> Option<Quantity> {
        self.stock.get(sku).copied()
    }

    /// Number of SKUs that have been set.
    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Returns every stock level sorted by SKU.
    ///
    /// Useful for generating final reports.
    pub fn snapshot(&self) -> Vec<StockLevel> {
        let mut levels: Vec<StockLevel> = self
            .stock
            .iter()
            .map(|(sku, quantity)| StockLevel {
                sku: sku.clone(),
                quantity: *quantity,
            })
            .collect();
        levels.sort_by(|a, b| a.sku.cmp(&b.sku));
        levels
    }
}

fn uninitialized(command: CommandName, sku: Sku) -> StockError {
    debug!(%sku, %command, "SKU not set");
    StockError::UninitializedSku { command, sku }
}
