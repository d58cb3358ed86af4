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

//! Ledger mutation events.
//!
//! Events carry the raw token identifier and raw amount string exactly as produced
//! by the external source; normalization and validation happen when applied.

use serde::{Deserialize, Serialize};

use crate::ledger::LedgerKind;

/// A single mutation of an [`crate::ledger::AmountLedger`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// Overwrite the amount for `token`.
    Set {
        /// The raw token identifier.
        token: String,
        /// The new amount, any decimal string.
        amount: String,
    },
    /// Add an atomic amount to `token`.
    IncrementBy {
        /// The raw token identifier.
        token: String,
        /// The atomic amount to add.
        amount: String,
    },
    /// Subtract an atomic amount from `token`, clamping at zero.
    DecrementBy {
        /// The raw token identifier.
        token: String,
        /// The atomic amount to subtract.
        amount: String,
    },
}

impl LedgerEvent {
    /// Returns the raw token identifier of the event.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Set { token, .. }
            | Self::IncrementBy { token, .. }
            | Self::DecrementBy { token, .. } => token,
        }
    }
}

/// A [`LedgerEvent`] addressed to one ledger of a [`crate::book::LedgerBook`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEvent {
    /// The target ledger.
    pub ledger: LedgerKind,
    /// The mutation to apply.
    pub event: LedgerEvent,
}

impl BookEvent {
    /// Creates a new [`BookEvent`] instance.
    #[must_use]
    pub const fn new(ledger: LedgerKind, event: LedgerEvent) -> Self {
        Self { ledger, event }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_book_event_json_shape() {
        let json = r#"{"ledger":"allowances.swap","event":{"type":"increment_by","token":"0xABC","amount":"10"}}"#;
        let event: BookEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            BookEvent::new(
                LedgerKind::SwapAllowances,
                LedgerEvent::IncrementBy {
                    token: "0xABC".to_string(),
                    amount: "10".to_string(),
                },
            )
        );
        assert_eq!(event.event.token(), "0xABC");
        assert_eq!(serde_json::to_string(&event).unwrap(), json);
    }

    #[rstest]
    fn test_unknown_ledger_rejected() {
        let json = r#"{"ledger":"allowances.other","event":{"type":"set","token":"0xa","amount":"1"}}"#;
        assert!(serde_json::from_str::<BookEvent>(json).is_err());
    }
}
