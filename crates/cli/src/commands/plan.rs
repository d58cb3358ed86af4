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

use tokenledger_core::identifiers::NATIVE_CURRENCY_ADDRESS;
use tokenledger_model::{book::LedgerBook, config::NetworksConfig, ledger::LedgerKind};
use tokenledger_planner::{DepositPlan, DepositPlanner};

use crate::opt::PlanOpt;

/// Plans a deposit for `opt` against `config`, seeding a fresh book with the given
/// balances.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or planning fails.
pub fn plan_from_opt(config: &NetworksConfig, opt: &PlanOpt) -> anyhow::Result<DepositPlan> {
    let networks = config.network_registry()?;
    let tokens = config.token_registry()?;

    let mut book = LedgerBook::new();
    let balances = book.ledger_mut(LedgerKind::Balances);
    balances.set(NATIVE_CURRENCY_ADDRESS, &opt.native_balance)?;
    if let Some(wrapped) = networks
        .get(opt.chain_id)
        .and_then(|network| network.wrapped_token)
    {
        balances.set(wrapped, &opt.wrapped_balance)?;
    }

    let token_from = opt.token_from.as_deref().unwrap_or(NATIVE_CURRENCY_ADDRESS);
    let planner = DepositPlanner::new(&book, &tokens, &networks);
    Ok(planner.plan_for_trade(opt.chain_id, token_from, &opt.amount)?)
}

/// Runs the `plan` command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or planning fails.
pub fn run_plan_command(opt: &PlanOpt) -> anyhow::Result<()> {
    let config = NetworksConfig::load(&opt.config)?;
    let plan = plan_from_opt(&config, opt)?;
    if opt.json {
        println!("{}", serde_json::to_string(&plan)?);
    } else {
        println!("{plan}");
    }
    Ok(())
}
