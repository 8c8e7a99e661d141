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

//! Token validation.
//!
//! Pure classifiers for the three kinds of token an instruction line carries:
//! the command name, the SKU and the amount. They never allocate and never
//! fail; callers decide which [`StockError`](crate::StockError) to report.
//!
//! | Token | Grammar |
//! |-------|---------|
//! | SKU | `^[A-Z]{1,3}-[0-9]{1,3}$` |
//! | Amount | `^[0-9]{1,3}$` |
//! | Command | `set-stock`, `add` or `order` |

use crate::command::CommandName;

/// Maximum number of letters in the SKU prefix and digits in the suffix.
const SKU_SEGMENT_MAX: usize = 3;

/// Maximum number of digits in an amount.
const AMOUNT_DIGITS_MAX: usize = 3;

/// Returns `true` if `token` is 1-3 uppercase ASCII letters, a hyphen, then
/// 1-3 ASCII digits, with nothing before or after.
///
/// ```
/// use stock_ledger_rs::validator::is_valid_sku;
///
/// assert!(is_valid_sku("AB-6"));
/// assert!(!is_valid_sku("ab-6"));
/// assert!(!is_valid_sku("ABCD-12"));
/// ```
pub fn is_valid_sku(token: &str) -> bool {
    let Some((prefix, suffix)) = token.split_once('-') else {
        return false;
    };

    is_segment(prefix, |b| b.is_ascii_uppercase())
        && is_segment(suffix, |b| b.is_ascii_digit())
}

/// Returns `true` if `token` is 1-3 ASCII digits and nothing else.
///
/// Signs, decimal points and whitespace are all rejected, so every accepted
/// token denotes an integer in `0..=999`.
pub fn is_valid_amount(token: &str) -> bool {
    (1..=AMOUNT_DIGITS_MAX).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_digit())
}

/// Maps a command token to its [`CommandName`].
///
/// Matching is exact and case-sensitive; `None` means the command is unknown.
pub fn parse_command_name(token: &str) -> Option<CommandName> {
    match token {
        "set-stock" => Some(CommandName::SetStock),
        "add" => Some(CommandName::Add),
        "order" => Some(CommandName::Order),
        _ => None,
    }
}

fn is_segment(segment: &str, accept: impl Fn(u8) -> bool) -> bool {
    (1..=SKU_SEGMENT_MAX).contains(&segment.len()) && segment.bytes().all(accept)
}
