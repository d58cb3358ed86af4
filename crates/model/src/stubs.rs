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

//! Type stubs to facilitate testing.

use rstest::fixture;

use crate::{
    book::LedgerBook,
    config::NetworksConfig,
    ledger::LedgerKind,
    network::NetworkRegistry,
    token::TokenRegistry,
};

pub const WETH_MAINNET: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
pub const USDC_MAINNET: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
pub const WXDAI_GNOSIS: &str = "0xe91D153E0b41518A2Ce8Dd3D7944Fa863463a97d";

/// Mainnet is fully configured; Gnosis has no safety margin or protocol fee.
pub const STUB_NETWORKS_TOML: &str = r#"
[[networks]]
chain_id = 1
name = "Ethereum"
native_symbol = "ETH"
native_name = "Ether"
native_decimals = 18
wrapped_token = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
safety_margin = "0.01"
protocol_fee_bps = 10

[[networks.tokens]]
address = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
symbol = "WETH"
name = "Wrapped Ether"
decimals = 18

[[networks.tokens]]
address = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
symbol = "USDC"
name = "USD Coin"
decimals = 6

[[networks]]
chain_id = 100
name = "Gnosis"
native_symbol = "XDAI"
native_decimals = 18
wrapped_token = "0xe91D153E0b41518A2Ce8Dd3D7944Fa863463a97d"

[[networks.tokens]]
address = "0xe91D153E0b41518A2Ce8Dd3D7944Fa863463a97d"
symbol = "WXDAI"
name = "Wrapped XDAI"
decimals = 18
"#;

#[fixture]
pub fn networks_config() -> NetworksConfig {
    NetworksConfig::from_toml_str(STUB_NETWORKS_TOML).unwrap()
}

#[fixture]
pub fn network_registry(networks_config: NetworksConfig) -> NetworkRegistry {
    networks_config.network_registry().unwrap()
}

#[fixture]
pub fn token_registry(networks_config: NetworksConfig) -> TokenRegistry {
    networks_config.token_registry().unwrap()
}

/// A book holding 2 ETH and 0.5 WETH on mainnet, plus allowances.
#[fixture]
pub fn funded_book() -> LedgerBook {
    let mut book = LedgerBook::new();
    book.set_many(
        LedgerKind::Balances,
        [
            (
                "0x0000000000000000000000000000000000000000",
                "2000000000000000000",
            ),
            (WETH_MAINNET, "500000000000000000"),
            (USDC_MAINNET, "1500000"),
        ],
    )
    .unwrap();
    book.ledger_mut(LedgerKind::SwapAllowances)
        .set(WETH_MAINNET, "1000000000000000000")
        .unwrap();
    book.ledger_mut(LedgerKind::WrapperAllowances)
        .set(WETH_MAINNET, "0")
        .unwrap();
    book
}
