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

use clap::Parser;
use csv::Writer;
use stock_ledger_rs::StockManager;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Stock Ledger - Process stock instruction files
///
/// Reads one instruction per line (set-stock, add, order), reports every
/// rejected line and keeps going.
#[derive(Parser, Debug)]
#[command(name = "stock-ledger")]
#[command(about = "A stock ledger that processes instruction files", long_about = None)]
struct Args {
    /// Path to the instruction file
    ///
    /// Expected format: <command> <SKU> <AMOUNT>
    /// Example: set-stock AB-6 100
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Write the final stock levels to stdout as CSV
    #[arg(long)]
    levels: bool,
}

fn main() {
    init_tracing();

    let args = Args::parse();

    let file = match File::open(&args.input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error opening file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    // Read errors are not instruction errors; they end the run.
    let manager = match process_instructions(BufReader::new(file)) {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Error reading instructions: {}", e);
            process::exit(1);
        }
    };

    if args.levels {
        if let Err(e) = write_levels(&manager, io::stdout()) {
            eprintln!("Error writing output: {}", e);
            process::exit(1);
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Process instructions from a line reader.
///
/// Each non-blank line is handed to [`StockManager::process_command`]. A
/// rejected instruction is logged with its 1-based line number and skipped;
/// it never stops processing.
///
/// # Errors
///
/// Returns an I/O error if the reader fails, including on invalid UTF-8.
pub fn process_instructions<R: BufRead>(reader: R) -> io::Result<StockManager> {
    let mut manager = StockManager::new();
    let mut applied = 0usize;
    let mut rejected = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let instruction = line.trim();

        if instruction.is_empty() {
            debug!(line = line_number, "skipping blank line");
            continue;
        }

        match manager.process_command(instruction) {
            Ok(()) => {
                debug!(line = line_number, instruction, "applied instruction");
                applied += 1;
            }
            Err(e) => {
                warn!(line = line_number, instruction, error = %e, "skipping instruction");
                rejected += 1;
            }
        }
    }

    info!(applied, rejected, skus = manager.len(), "finished processing instructions");
    Ok(manager)
}

/// Write stock levels to a CSV writer, sorted by SKU.
///
/// # CSV Format
///
/// Columns: `sku, quantity`
///
/// ```csv
/// sku,quantity
/// AB-6,120
/// CD-3,20
/// ```
///
/// # Errors
///
/// Returns a CSV error if writing fails.
pub fn write_levels<W: Write>(manager: &StockManager, writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);

    for level in manager.snapshot() {
        wtr.serialize(&level)?;
    }

    wtr.flush()?;
    Ok(())
}
