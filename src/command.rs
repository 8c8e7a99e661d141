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

//! Instruction parsing.
//!
//! An instruction line has the shape `<command> <SKU> <AMOUNT>`, tokens
//! separated by whitespace. Parsing checks, in order:
//! 1. the token count and command name ([`StockError::InvalidCommand`]),
//! 2. the SKU ([`StockError::InvalidSku`]),
//! 3. the amount ([`StockError::InvalidAmount`]).

use crate::StockError;
use crate::base::{Amount, Sku};
use crate::validator::parse_command_name;
use std::fmt;
use std::str::FromStr;

/// Name of a supported instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    SetStock,
    Add,
    Order,
}

impl CommandName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SetStock => "set-stock",
            Self::Add => "add",
            Self::Order => "order",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed, syntactically valid instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Overwrite the quantity on hand.
    SetStock { sku: Sku, amount: Amount },
    /// Increase the quantity of an already set SKU.
    Add { sku: Sku, amount: Amount },
    /// Fulfil an order from an already set SKU.
    Order { sku: Sku, amount: Amount },
}

impl Command {
    /// Parses one instruction line.
    ///
    /// # Errors
    ///
    /// - [`StockError::InvalidCommand`] - fewer than 2 or more than 3 tokens, or an unknown command.
    /// - [`StockError::InvalidSku`] - the SKU token is malformed.
    /// - [`StockError::InvalidAmount`] - the amount token is missing or malformed.
    pub fn parse(line: &str) -> Result<Self, StockError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let (name, sku, amount) = match tokens.as_slice() {
            [name, sku] => (*name, *sku, None),
            [name, sku, amount] => (*name, *sku, Some(*amount)),
            _ => return Err(invalid_command(line)),
        };
        let name = parse_command_name(name).ok_or_else(|| invalid_command(line))?;

        let sku = Sku::parse(sku)?;
        // A missing amount is reported as an empty token.
        let amount = Amount::parse(amount.unwrap_or_default())?;

        Ok(match name {
            CommandName::SetStock => Command::SetStock { sku, amount },
            CommandName::Add => Command::Add { sku, amount },
            CommandName::Order => Command::Order { sku, amount },
        })
    }

    pub fn name(&self) -> CommandName {
        match self {
            Self::SetStock { .. } => CommandName::SetStock,
            Self::Add { .. } => CommandName::Add,
            Self::Order { .. } => CommandName::Order,
        }
    }

    pub fn sku(&self) -> &Sku {
        match self {
            Self::SetStock { sku, .. } | Self::Add { sku, .. } | Self::Order { sku, .. } => sku,
        }
    }

    pub fn amount(&self) -> Amount {
        match self {
            Self::SetStock { amount, .. }
            | Self::Add { amount, .. }
            | Self::Order { amount, .. } => *amount,
        }
    }
}

impl FromStr for Command {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name(), self.sku(), self.amount())
    }
}

fn invalid_command(line: &str) -> StockError {
    StockError::InvalidCommand {
        line: line.trim().to_owned(),
    }
}
