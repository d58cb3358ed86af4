// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

use std::{collections::BTreeMap, fs};

use anyhow::Context;
use tokenledger_model::{book::LedgerBook, events::BookEvent};

use crate::opt::ReplayOpt;

/// Applies `events` in order to a fresh book.
///
/// # Errors
///
/// Returns an error naming the first event which could not be applied.
pub fn replay_events(events: &[BookEvent]) -> anyhow::Result<LedgerBook> {
    let mut book = LedgerBook::new();
    for (index, event) in events.iter().enumerate() {
        book.apply(event).with_context(|| {
            format!(
                "Failed to apply event #{index} to {} for {}",
                event.ledger,
                event.event.token()
            )
        })?;
    }
    log::info!("Replayed {} events", events.len());
    Ok(book)
}

/// Parses a JSON array of events and returns the resulting snapshot.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or an event cannot be applied.
pub fn replay_json(json: &str) -> anyhow::Result<BTreeMap<String, BTreeMap<String, String>>> {
    let events: Vec<BookEvent> = serde_json::from_str(json).context("Invalid events JSON")?;
    Ok(replay_events(&events)?.snapshot())
}

/// Runs the `replay` command.
///
/// # Errors
///
/// Returns an error if the events file cannot be read or replayed.
pub fn run_replay_command(opt: &ReplayOpt) -> anyhow::Result<()> {
    let data = fs::read_to_string(&opt.events)
        .with_context(|| format!("Unable to read events file {}", opt.events.display()))?;
    let snapshot = replay_json(&data)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
