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

//! A keyed ledger of exact token amounts.
//!
//! One [`AmountLedger`] type backs the balance ledger and both allowance ledgers. Keys
//! are normalized [`TokenAddress`] values and values are [`DecimalValue`] atomic-unit
//! quantities; a key which was never written reads as zero.

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tokenledger_core::{ArithmeticError, DecimalValue, ParseError, TokenAddress, parsing};

use crate::events::LedgerEvent;

/// Identifies one of the ledgers held by a [`crate::book::LedgerBook`].
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum LedgerKind {
    /// Token balances held by the account.
    #[strum(serialize = "balances")]
    #[serde(rename = "balances")]
    Balances,
    /// Allowances granted to the swap contract.
    #[strum(serialize = "allowances.swap")]
    #[serde(rename = "allowances.swap")]
    SwapAllowances,
    /// Allowances granted to the wrapper contract.
    #[strum(serialize = "allowances.wrapper")]
    #[serde(rename = "allowances.wrapper")]
    WrapperAllowances,
}

/// An error which can occur when mutating an [`AmountLedger`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The supplied amount was not accepted.
    #[error(transparent)]
    MalformedAmount(#[from] ParseError),
    /// The resulting amount does not fit the decimal representation.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// A mapping from normalized token address to an exact amount.
#[derive(Clone, Debug)]
pub struct AmountLedger {
    kind: LedgerKind,
    entries: AHashMap<TokenAddress, DecimalValue>,
}

impl AmountLedger {
    /// Creates a new empty [`AmountLedger`] of the given `kind`.
    #[must_use]
    pub fn new(kind: LedgerKind) -> Self {
        Self {
            kind,
            entries: AHashMap::new(),
        }
    }

    /// Returns the kind of this ledger.
    #[must_use]
    pub const fn kind(&self) -> LedgerKind {
        self.kind
    }

    /// Overwrites the entry for `id` with `amount`.
    ///
    /// The amount must parse as a decimal value; neither sign nor integrality is checked.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MalformedAmount`] if `amount` does not parse, in which case
    /// the ledger is unchanged.
    pub fn set<T: AsRef<str>>(&mut self, id: T, amount: &str) -> Result<DecimalValue, LedgerError> {
        let value = DecimalValue::parse(amount)?;
        let key = TokenAddress::from_raw(id);
        log::debug!("{} set {key} = {value}", self.kind);
        self.entries.insert(key, value);
        Ok(value)
    }

    /// Sets every `(id, amount)` pair, or none of them if any amount is malformed.
    ///
    /// Later pairs for the same key win.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MalformedAmount`] for the first amount which does not parse.
    pub fn set_many<I, K, A>(&mut self, entries: I) -> Result<usize, LedgerError>
    where
        I: IntoIterator<Item = (K, A)>,
        K: AsRef<str>,
        A: AsRef<str>,
    {
        let parsed = entries
            .into_iter()
            .map(|(id, amount)| {
                DecimalValue::parse(amount.as_ref()).map(|value| (TokenAddress::from_raw(id), value))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = parsed.len();
        log::debug!("{} set {count} entries", self.kind);
        self.entries.extend(parsed);
        Ok(count)
    }

    /// Adds the atomic `amount` to the entry for `id` (a missing entry counts as zero)
    /// and returns the new amount.
    ///
    /// # Errors
    ///
    /// Returns an error:
    /// - [`LedgerError::MalformedAmount`] if `amount` is not a non-negative integer string.
    /// - [`LedgerError::Arithmetic`] if the sum does not fit.
    pub fn increment_by<T: AsRef<str>>(
        &mut self,
        id: T,
        amount: &str,
    ) -> Result<DecimalValue, LedgerError> {
        let delta = parse_atomic_delta(amount)?;
        let key = TokenAddress::from_raw(id);
        let value = self.amount_for(&key).checked_add(&delta)?;
        log::debug!("{} increment {key} by {delta} -> {value}", self.kind);
        self.entries.insert(key, value);
        Ok(value)
    }

    /// Subtracts the atomic `amount` from the entry for `id` and returns the new amount,
    /// clamping at zero.
    ///
    /// The result is always `max(0, current - amount)`, so an entry that [`Self::set`]
    /// left negative is raised to zero by any decrement, including one of `"0"`.
    ///
    /// # Errors
    ///
    /// Returns an error:
    /// - [`LedgerError::MalformedAmount`] if `amount` is not a non-negative integer string.
    /// - [`LedgerError::Arithmetic`] if the difference does not fit.
    pub fn decrement_by<T: AsRef<str>>(
        &mut self,
        id: T,
        amount: &str,
    ) -> Result<DecimalValue, LedgerError> {
        let delta = parse_atomic_delta(amount)?;
        let key = TokenAddress::from_raw(id);
        let value = self
            .amount_for(&key)
            .checked_sub(&delta)?
            .max(DecimalValue::ZERO);
        log::debug!("{} decrement {key} by {delta} -> {value}", self.kind);
        self.entries.insert(key, value);
        Ok(value)
    }

    /// Returns the canonical amount string for `id`, `"0"` when missing.
    #[must_use]
    pub fn get<T: AsRef<str>>(&self, id: T) -> String {
        self.amount(id).to_string()
    }

    /// Returns the amount for `id`, zero when missing.
    #[must_use]
    pub fn amount<T: AsRef<str>>(&self, id: T) -> DecimalValue {
        self.amount_for(&TokenAddress::from_raw(id))
    }

    /// Returns the amount for an already-normalized `address`, zero when missing.
    #[must_use]
    pub fn amount_for(&self, address: &TokenAddress) -> DecimalValue {
        self.entries
            .get(address)
            .copied()
            .unwrap_or(DecimalValue::ZERO)
    }

    /// Returns `true` if an entry was ever written for `id`.
    #[must_use]
    pub fn contains<T: AsRef<str>>(&self, id: T) -> bool {
        self.entries.contains_key(&TokenAddress::from_raw(id))
    }

    /// Applies `event` in place and returns the resulting amount for its key.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying mutation; the ledger is then unchanged.
    pub fn apply(&mut self, event: &LedgerEvent) -> Result<DecimalValue, LedgerError> {
        match event {
            LedgerEvent::Set { token, amount } => self.set(token, amount),
            LedgerEvent::IncrementBy { token, amount } => self.increment_by(token, amount),
            LedgerEvent::DecrementBy { token, amount } => self.decrement_by(token, amount),
        }
    }

    /// Returns a new ledger with `event` applied, leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying mutation.
    pub fn with_event(&self, event: &LedgerEvent) -> Result<Self, LedgerError> {
        let mut next = self.clone();
        next.apply(event)?;
        Ok(next)
    }

    /// Removes every entry.
    pub fn reset(&mut self) {
        log::debug!("{} reset ({} entries)", self.kind, self.entries.len());
        self.entries.clear();
    }

    /// Returns the number of entries ever written since the last reset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the ledger has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&TokenAddress, &DecimalValue)> {
        self.entries.iter()
    }

    /// Returns the entries as canonical strings, ordered by address.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(address, value)| (address.to_string(), value.to_string()))
            .collect()
    }
}

fn parse_atomic_delta(amount: &str) -> Result<DecimalValue, ParseError> {
    if !parsing::is_atomic_literal(amount) {
        return Err(ParseError::Malformed(amount.to_string()));
    }
    DecimalValue::parse(amount)
}
