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

//! The ledger book owning the balance ledger and both allowance ledgers.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;
use tokenledger_core::DecimalValue;

use crate::{
    events::BookEvent,
    ledger::{AmountLedger, LedgerError, LedgerKind},
};

/// Owns one [`AmountLedger`] per [`LedgerKind`].
///
/// The book is an explicit state object: the composing application owns it and lends
/// it to event sources (mutably) and to the planner (immutably).
#[derive(Clone, Debug)]
pub struct LedgerBook {
    balances: AmountLedger,
    swap_allowances: AmountLedger,
    wrapper_allowances: AmountLedger,
}

impl Default for LedgerBook {
    /// Creates a new default [`LedgerBook`] instance with three empty ledgers.
    fn default() -> Self {
        Self {
            balances: AmountLedger::new(LedgerKind::Balances),
            swap_allowances: AmountLedger::new(LedgerKind::SwapAllowances),
            wrapper_allowances: AmountLedger::new(LedgerKind::WrapperAllowances),
        }
    }
}

impl LedgerBook {
    /// Creates a new empty [`LedgerBook`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ledger of the given `kind`.
    #[must_use]
    pub const fn ledger(&self, kind: LedgerKind) -> &AmountLedger {
        match kind {
            LedgerKind::Balances => &self.balances,
            LedgerKind::SwapAllowances => &self.swap_allowances,
            LedgerKind::WrapperAllowances => &self.wrapper_allowances,
        }
    }

    /// Returns a mutable reference to the ledger of the given `kind`.
    pub const fn ledger_mut(&mut self, kind: LedgerKind) -> &mut AmountLedger {
        match kind {
            LedgerKind::Balances => &mut self.balances,
            LedgerKind::SwapAllowances => &mut self.swap_allowances,
            LedgerKind::WrapperAllowances => &mut self.wrapper_allowances,
        }
    }

    /// Returns the balances ledger.
    #[must_use]
    pub const fn balances(&self) -> &AmountLedger {
        &self.balances
    }

    /// Returns the swap allowances ledger.
    #[must_use]
    pub const fn swap_allowances(&self) -> &AmountLedger {
        &self.swap_allowances
    }

    /// Returns the wrapper allowances ledger.
    #[must_use]
    pub const fn wrapper_allowances(&self) -> &AmountLedger {
        &self.wrapper_allowances
    }

    /// Applies `event` to its target ledger and returns the resulting amount.
    ///
    /// # Errors
    ///
    /// Returns the ledger error; the book is then unchanged.
    pub fn apply(&mut self, event: &BookEvent) -> Result<DecimalValue, LedgerError> {
        self.ledger_mut(event.ledger).apply(&event.event)
    }

    /// Sets a fetched batch of amounts on the `kind` ledger atomically.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MalformedAmount`] if any amount is malformed, in which case
    /// nothing is applied.
    pub fn set_many<I, K, A>(&mut self, kind: LedgerKind, entries: I) -> Result<usize, LedgerError>
    where
        I: IntoIterator<Item = (K, A)>,
        K: AsRef<str>,
        A: AsRef<str>,
    {
        self.ledger_mut(kind).set_many(entries)
    }

    /// Clears the `kind` ledger.
    pub fn reset_ledger(&mut self, kind: LedgerKind) {
        self.ledger_mut(kind).reset();
    }

    /// Clears every ledger, e.g. when the account changes.
    pub fn reset(&mut self) {
        for kind in LedgerKind::iter() {
            self.reset_ledger(kind);
        }
    }

    /// Returns every ledger as canonical strings, keyed by ledger name then address.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, BTreeMap<String, String>> {
        LedgerKind::iter()
            .map(|kind| (kind.to_string(), self.ledger(kind).snapshot()))
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{events::LedgerEvent, stubs::*};

    #[rstest]
    fn test_ledgers_have_distinct_key_spaces() {
        let mut book = LedgerBook::new();
        book.ledger_mut(LedgerKind::Balances)
            .set("0xabc", "10")
            .unwrap();

        assert_eq!(book.balances().get("0xabc"), "10");
        assert_eq!(book.swap_allowances().get("0xabc"), "0");
        assert_eq!(book.wrapper_allowances().get("0xabc"), "0");
    }

    #[rstest]
    fn test_apply_routes_to_target_ledger() {
        let mut book = LedgerBook::new();
        let event = BookEvent::new(
            LedgerKind::WrapperAllowances,
            LedgerEvent::Set {
                token: "0xWETH".to_string(),
                amount: "1000".to_string(),
            },
        );
        book.apply(&event).unwrap();

        assert_eq!(book.wrapper_allowances().get("0xweth"), "1000");
        assert!(book.balances().is_empty());
    }

    #[rstest]
    fn test_reset_clears_all(mut funded_book: LedgerBook) {
        assert!(!funded_book.balances().is_empty());
        funded_book.reset();
        for kind in LedgerKind::iter() {
            assert!(funded_book.ledger(kind).is_empty());
        }
    }

    #[rstest]
    fn test_reset_ledger_clears_one(mut funded_book: LedgerBook) {
        funded_book.reset_ledger(LedgerKind::SwapAllowances);
        assert!(funded_book.swap_allowances().is_empty());
        assert!(!funded_book.balances().is_empty());
    }

    #[rstest]
    fn test_set_many_on_book() {
        let mut book = LedgerBook::new();
        let count = book
            .set_many(LedgerKind::Balances, vec![("0xA", "1"), ("0xB", "2")])
            .unwrap();
        assert_eq!(count, 2);
        assert!(book.set_many(LedgerKind::Balances, vec![("0xC", "x")]).is_err());
        assert_eq!(book.balances().len(), 2);
    }

    #[rstest]
    fn test_snapshot(funded_book: LedgerBook) {
        let snapshot = funded_book.snapshot();
        assert_eq!(
            snapshot.keys().collect::<Vec<_>>(),
            vec!["allowances.swap", "allowances.wrapper", "balances"]
        );
        assert_eq!(
            snapshot["balances"]["0x0000000000000000000000000000000000000000"],
            "2000000000000000000"
        );
        assert_eq!(
            snapshot["balances"]["0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"],
            "500000000000000000"
        );
    }
}
