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

//! Per-network parameters consumed by the deposit planner.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
};

use tokenledger_core::{DecimalValue, TokenAddress};

/// Represents a configured network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    /// The network chain ID.
    pub chain_id: u32,
    /// The human-readable network name.
    pub name: String,
    /// The symbol of the native currency.
    pub native_symbol: String,
    /// The decimals of the native currency, when known.
    pub native_decimals: Option<u8>,
    /// The address of the wrapped native token, when the network has one.
    pub wrapped_token: Option<TokenAddress>,
    /// The native amount kept back from spendable funds, in human units.
    pub safety_margin: Option<DecimalValue>,
    /// The proportional wrapping fee in basis points.
    pub protocol_fee_bps: Option<u32>,
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (chain_id={})", self.name, self.chain_id)
    }
}

/// Networks keyed by chain ID.
#[derive(Clone, Debug, Default)]
pub struct NetworkRegistry {
    networks: BTreeMap<u32, Network>,
}

impl NetworkRegistry {
    /// Creates a new empty [`NetworkRegistry`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `network`, replacing any network with the same chain ID.
    pub fn insert(&mut self, network: Network) -> Option<Network> {
        self.networks.insert(network.chain_id, network)
    }

    /// Returns the network with `chain_id`, if configured.
    #[must_use]
    pub fn get(&self, chain_id: u32) -> Option<&Network> {
        self.networks.get(&chain_id)
    }

    /// Returns an iterator over the networks in chain ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Network> {
        self.networks.values()
    }

    /// Returns the number of networks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// Returns `true` if no networks are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}
