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

//! Token metadata and its lookup seam.

use std::fmt::{Display, Formatter};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tokenledger_core::{TokenAddress, correctness::check_key_not_in_map};

/// Represents a token on a specific network.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenInfo {
    /// The network chain ID.
    pub chain_id: u32,
    /// The normalized token address.
    pub address: TokenAddress,
    /// The token's ticker symbol.
    pub symbol: String,
    /// The full name of the token.
    pub name: String,
    /// The number of decimal places used to represent fractional token amounts.
    pub decimals: u8,
}

impl TokenInfo {
    /// Creates a new [`TokenInfo`] instance with the specified properties.
    #[must_use]
    pub fn new(
        chain_id: u32,
        address: TokenAddress,
        symbol: String,
        name: String,
        decimals: u8,
    ) -> Self {
        Self {
            chain_id,
            address,
            symbol,
            name,
            decimals,
        }
    }
}

impl Display for TokenInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token(chain_id={}, symbol={}, address={}, decimals={})",
            self.chain_id, self.symbol, self.address, self.decimals
        )
    }
}

/// Provides token metadata per `(chain_id, address)`.
pub trait TokenMetadataLookup {
    /// Returns the metadata of the token at `address` on `chain_id`, if known.
    fn token(&self, chain_id: u32, address: &TokenAddress) -> Option<&TokenInfo>;

    /// Returns the decimals of the token at `address` on `chain_id`, if known.
    fn decimals(&self, chain_id: u32, address: &TokenAddress) -> Option<u8> {
        self.token(chain_id, address).map(|token| token.decimals)
    }

    /// Returns the symbol of the token at `address` on `chain_id`, if known.
    fn symbol(&self, chain_id: u32, address: &TokenAddress) -> Option<&str> {
        self.token(chain_id, address)
            .map(|token| token.symbol.as_str())
    }
}

/// An in-memory [`TokenMetadataLookup`].
#[derive(Clone, Debug, Default)]
pub struct TokenRegistry {
    tokens: AHashMap<(u32, TokenAddress), TokenInfo>,
}

impl TokenRegistry {
    /// Creates a new empty [`TokenRegistry`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if a token is already registered at the same chain and address.
    pub fn add(&mut self, token: TokenInfo) -> anyhow::Result<()> {
        let key = (token.chain_id, token.address);
        check_key_not_in_map(&key, &self.tokens, "token", "tokens")?;
        log::trace!("Registered {token}");
        self.tokens.insert(key, token);
        Ok(())
    }

    /// Returns the number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no tokens are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the tokens registered on `chain_id`, ordered by symbol.
    #[must_use]
    pub fn tokens_on(&self, chain_id: u32) -> Vec<&TokenInfo> {
        let mut tokens: Vec<&TokenInfo> = self
            .tokens
            .values()
            .filter(|token| token.chain_id == chain_id)
            .collect();
        tokens.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        tokens
    }
}

impl TokenMetadataLookup for TokenRegistry {
    fn token(&self, chain_id: u32, address: &TokenAddress) -> Option<&TokenInfo> {
        self.tokens.get(&(chain_id, *address))
    }
}
