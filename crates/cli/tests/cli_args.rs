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

use clap::Parser;
use rstest::rstest;
use tokenledger_cli::opt::{Commands, TokenLedgerCli};

#[rstest]
fn test_parse_plan_args() {
    let cli = TokenLedgerCli::parse_from([
        "tokenledger",
        "plan",
        "--config",
        "networks.toml",
        "--chain-id",
        "1",
        "--amount",
        "1.5",
        "--native-balance",
        "2000000000000000000",
        "--wrapped-balance",
        "0",
        "--json",
    ]);
    match cli.command {
        Commands::Plan(opt) => {
            assert_eq!(opt.chain_id, 1);
            assert_eq!(opt.amount, "1.5");
            assert_eq!(opt.token_from, None);
            assert!(opt.json);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[rstest]
fn test_parse_replay_args() {
    let cli = TokenLedgerCli::parse_from(["tokenledger", "replay", "--events", "events.json"]);
    assert!(matches!(cli.command, Commands::Replay(opt) if opt.events.ends_with("events.json")));
}

#[rstest]
fn test_plan_requires_balances() {
    let result = TokenLedgerCli::try_parse_from([
        "tokenledger",
        "plan",
        "--config",
        "networks.toml",
        "--chain-id",
        "1",
        "--amount",
        "1",
    ]);
    assert!(result.is_err());
}
