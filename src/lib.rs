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

//! # Stock Ledger
//!
//! This library provides a line-oriented stock ledger: it validates textual
//! instructions (`set-stock`, `add`, `order`) for items identified by a SKU
//! and applies them to an in-memory quantity-on-hand table.
//!
//! ## Core Components
//!
//! - [`StockManager`]: Owns the stock table and processes instruction lines
//! - [`Command`]: A parsed instruction
//! - [`Sku`] and [`Amount`]: Validated value types
//! - [`validator`]: Pure token classifiers for the SKU and amount grammars
//! - [`StockError`]: Error types for rejected instructions
//!
//! ## Example
//!
//! ```
//! use stock_ledger_rs::{StockError, StockManager};
//!
//! let mut manager = StockManager::new();
//!
//! manager.process_command("set-stock AB-6 100").unwrap();
//! manager.process_command("add AB-6 20").unwrap();
//! assert_eq!(manager.quantity("AB-6"), Some(120));
//!
//! // A rejected instruction leaves the table untouched
//! let result = manager.process_command("order AB-6 150");
//! assert!(matches!(result, Err(StockError::InsufficientStock { .. })));
//! assert_eq!(manager.quantity("AB-6"), Some(120));
//! ```
//!
//! ## Error Handling
//!
//! Every failure is returned as a [`StockError`] value and is recoverable:
//! callers are expected to report it and carry on with the next line.

mod base;
pub mod command;
pub mod error;
mod manager;
pub mod validator;

pub use base::{Amount, Quantity, Sku};
pub use command::{Command, CommandName};
pub use error::StockError;
pub use manager::{StockLevel, StockManager};
