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

//! Deposit planning in the context of a trade on a configured network.

use tokenledger_core::TokenAddress;
use tokenledger_model::{book::LedgerBook, network::NetworkRegistry, token::TokenMetadataLookup};

use crate::deposit::{DepositPlan, DepositPlanInputs, MissingInfo, PlanError, plan_deposit};

/// Resolves planner inputs from ledger state, token metadata and network parameters.
#[derive(Debug)]
pub struct DepositPlanner<'a, L: ?Sized> {
    book: &'a LedgerBook,
    tokens: &'a L,
    networks: &'a NetworkRegistry,
}

impl<'a, L> DepositPlanner<'a, L>
where
    L: TokenMetadataLookup + ?Sized,
{
    /// Creates a new [`DepositPlanner`] instance over borrowed state.
    #[must_use]
    pub const fn new(book: &'a LedgerBook, tokens: &'a L, networks: &'a NetworkRegistry) -> Self {
        Self {
            book,
            tokens,
            networks,
        }
    }

    /// Decides whether native currency must be wrapped before trading `amount` of
    /// `token_from` on `chain_id`.
    ///
    /// Only trades from the native currency can need a wrap; any other `token_from`
    /// yields [`DepositPlan::NotNeeded`]. Balances missing from the book read as zero.
    ///
    /// # Errors
    ///
    /// Returns an error:
    /// - [`PlanError::InsufficientInformation`] if the network, its wrapped token, either
    ///   token's decimals, the protocol fee or the safety margin is unknown.
    /// - [`PlanError::Parse`] if `amount` is malformed or too precise.
    pub fn plan_for_trade<T: AsRef<str>>(
        &self,
        chain_id: u32,
        token_from: T,
        amount: &str,
    ) -> Result<DepositPlan, PlanError> {
        let token_from = TokenAddress::from_raw(token_from);
        if !token_from.is_native() {
            log::trace!("Trading from {token_from}, no wrap needed");
            return Ok(DepositPlan::NotNeeded);
        }

        let network = self
            .networks
            .get(chain_id)
            .ok_or(PlanError::InsufficientInformation(MissingInfo::Network))?;
        let wrapped = network
            .wrapped_token
            .ok_or(PlanError::InsufficientInformation(MissingInfo::WrappedToken))?;
        let native = TokenAddress::native();

        let balances = self.book.balances();
        let inputs = DepositPlanInputs {
            requested: amount.to_string(),
            native_balance: balances.get(native),
            wrapped_balance: balances.get(wrapped),
            native_decimals: self.tokens.decimals(chain_id, &native),
            wrapped_decimals: self.tokens.decimals(chain_id, &wrapped),
            protocol_fee_bps: network.protocol_fee_bps,
            safety_margin: network.safety_margin.map(|margin| margin.to_string()),
        };

        log::debug!("Planning deposit on {network} for {amount}");
        plan_deposit(&inputs)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tokenledger_core::DecimalValue;
    use tokenledger_model::{
        ledger::LedgerKind,
        stubs::{USDC_MAINNET, funded_book, network_registry, token_registry},
        token::TokenRegistry,
    };

    use super::*;

    #[rstest]
    fn test_native_trade_needs_deposit(
        funded_book: LedgerBook,
        token_registry: TokenRegistry,
        network_registry: NetworkRegistry,
    ) {
        let planner = DepositPlanner::new(&funded_book, &token_registry, &network_registry);
        let plan = planner
            .plan_for_trade(1, "0x0000000000000000000000000000000000000000", "1")
            .unwrap();
        assert_eq!(
            plan,
            DepositPlan::Deposit(DecimalValue::parse("0.501").unwrap())
        );
    }

    #[rstest]
    fn test_non_native_trade_never_needs_deposit(
        funded_book: LedgerBook,
        network_registry: NetworkRegistry,
    ) {
        // Even with no metadata at all
        let empty = TokenRegistry::new();
        let planner = DepositPlanner::new(&funded_book, &empty, &network_registry);
        assert_eq!(
            planner.plan_for_trade(999, USDC_MAINNET, "1").unwrap(),
            DepositPlan::NotNeeded
        );
    }

    #[rstest]
    fn test_unknown_network(
        funded_book: LedgerBook,
        token_registry: TokenRegistry,
        network_registry: NetworkRegistry,
    ) {
        let planner = DepositPlanner::new(&funded_book, &token_registry, &network_registry);
        assert_eq!(
            planner.plan_for_trade(999, TokenAddress::native(), "1"),
            Err(PlanError::InsufficientInformation(MissingInfo::Network))
        );
    }

    #[rstest]
    fn test_network_without_wrapped_token(
        funded_book: LedgerBook,
        token_registry: TokenRegistry,
        mut network_registry: NetworkRegistry,
    ) {
        let mut mainnet = network_registry.get(1).unwrap().clone();
        mainnet.wrapped_token = None;
        network_registry.insert(mainnet);

        let planner = DepositPlanner::new(&funded_book, &token_registry, &network_registry);
        assert_eq!(
            planner.plan_for_trade(1, TokenAddress::native(), "1"),
            Err(PlanError::InsufficientInformation(MissingInfo::WrappedToken))
        );
    }

    #[rstest]
    fn test_network_without_fee_or_margin(
        token_registry: TokenRegistry,
        network_registry: NetworkRegistry,
    ) {
        let book = LedgerBook::new();
        let planner = DepositPlanner::new(&book, &token_registry, &network_registry);
        assert_eq!(
            planner.plan_for_trade(100, TokenAddress::native(), "1"),
            Err(PlanError::InsufficientInformation(MissingInfo::ProtocolFee))
        );
    }

    #[rstest]
    fn test_missing_balances_read_as_zero(
        token_registry: TokenRegistry,
        network_registry: NetworkRegistry,
    ) {
        let book = LedgerBook::new();
        let planner = DepositPlanner::new(&book, &token_registry, &network_registry);
        assert_eq!(
            planner.plan_for_trade(1, TokenAddress::native(), "1").unwrap(),
            DepositPlan::NotNeeded
        );
    }

    #[rstest]
    fn test_plan_follows_ledger_updates(
        mut funded_book: LedgerBook,
        token_registry: TokenRegistry,
        network_registry: NetworkRegistry,
    ) {
        funded_book
            .ledger_mut(LedgerKind::Balances)
            .increment_by(
                "0xC02AAA39B223FE8D0A0E5C4F27EAD9083C756CC2",
                "500000000000000000",
            )
            .unwrap();
        let planner = DepositPlanner::new(&funded_book, &token_registry, &network_registry);
        assert_eq!(
            planner.plan_for_trade(1, TokenAddress::native(), "1").unwrap(),
            DepositPlan::NotNeeded
        );
    }

    #[rstest]
    fn test_dyn_lookup(
        funded_book: LedgerBook,
        token_registry: TokenRegistry,
        network_registry: NetworkRegistry,
    ) {
        let lookup: &dyn TokenMetadataLookup = &token_registry;
        let planner = DepositPlanner::new(&funded_book, lookup, &network_registry);
        assert!(
            planner
                .plan_for_trade(1, TokenAddress::native(), "1")
                .unwrap()
                .is_needed()
        );
    }
}
