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

use std::path::PathBuf;

use clap::Parser;

/// Main CLI structure for parsing command-line arguments and options.
///
/// This is the entry point for the token ledger command-line interface, providing
/// access to network configuration, deposit planning and event replay.
#[derive(Debug, Parser)]
#[clap(version, about, author)]
pub struct TokenLedgerCli {
    #[clap(subcommand)]
    pub command: Commands,
}

/// Available top-level commands for the token ledger CLI.
#[derive(Parser, Debug)]
pub enum Commands {
    Networks(NetworksOpt),
    Plan(PlanOpt),
    Replay(ReplayOpt),
}

/// Lists the configured networks.
#[derive(Parser, Debug, Clone)]
#[command(about = "List configured networks", long_about = None)]
pub struct NetworksOpt {
    /// Path to the networks TOML file.
    #[arg(long, env = "TOKENLEDGER_NETWORKS_CONFIG")]
    pub config: PathBuf,
}

/// Decides whether native currency must be wrapped before a trade.
#[derive(Parser, Debug, Clone)]
#[command(about = "Plan a native-currency deposit", long_about = None)]
pub struct PlanOpt {
    /// Path to the networks TOML file.
    #[arg(long, env = "TOKENLEDGER_NETWORKS_CONFIG")]
    pub config: PathBuf,
    /// The network chain ID.
    #[arg(long)]
    pub chain_id: u32,
    /// The amount to trade, in human units (e.g. 1.5)
    #[arg(long)]
    pub amount: String,
    /// The native balance, in atomic units
    #[arg(long)]
    pub native_balance: String,
    /// The wrapped-token balance, in atomic units
    #[arg(long)]
    pub wrapped_balance: String,
    /// The token being sold (optional, defaults to the native currency)
    #[arg(long)]
    pub token_from: Option<String>,
    /// Print the decision as JSON
    #[arg(long)]
    pub json: bool,
}

/// Replays ledger events and prints the resulting state.
#[derive(Parser, Debug, Clone)]
#[command(about = "Replay ledger events from a JSON file", long_about = None)]
pub struct ReplayOpt {
    /// Path to a JSON array of ledger events.
    #[arg(long)]
    pub events: PathBuf,
}
