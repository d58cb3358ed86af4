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

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]

pub mod commands;
pub mod opt;

use crate::{
    commands::{
        networks::run_networks_command, plan::run_plan_command, replay::run_replay_command,
    },
    opt::{Commands, TokenLedgerCli},
};

/// Runs the parsed command.
///
/// # Errors
///
/// Returns the command's error.
pub fn run(opt: TokenLedgerCli) -> anyhow::Result<()> {
    match opt.command {
        Commands::Networks(networks_opt) => run_networks_command(&networks_opt)?,
        Commands::Plan(plan_opt) => run_plan_command(&plan_opt)?,
        Commands::Replay(replay_opt) => run_replay_command(&replay_opt)?,
    }
    Ok(())
}
