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

use std::fmt::Write;

use tokenledger_model::config::NetworksConfig;

use crate::opt::NetworksOpt;

/// Renders one line per configured network, in chain ID order, listing its known
/// tokens by symbol.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn render_networks(config: &NetworksConfig) -> anyhow::Result<String> {
    let registry = config.network_registry()?;
    let tokens = config.token_registry()?;

    let mut out = String::new();
    for network in registry.iter() {
        let decimals = network
            .native_decimals
            .map_or_else(|| "?".to_string(), |d| d.to_string());
        let wrapped = network
            .wrapped_token
            .map_or_else(|| "-".to_string(), |address| address.to_string());
        let fee = network
            .protocol_fee_bps
            .map_or_else(|| "-".to_string(), |bps| bps.to_string());
        let margin = network
            .safety_margin
            .map_or_else(|| "-".to_string(), |margin| margin.to_string());
        let symbols: Vec<&str> = tokens
            .tokens_on(network.chain_id)
            .into_iter()
            .map(|token| token.symbol.as_str())
            .collect();
        let symbols = if symbols.is_empty() {
            "-".to_string()
        } else {
            symbols.join(",")
        };

        writeln!(
            out,
            "{} {} native={}/{decimals} wrapped={wrapped} fee_bps={fee} safety_margin={margin} tokens={symbols}",
            network.chain_id, network.name, network.native_symbol,
        )?;
    }
    Ok(out)
}

/// Runs the `networks` command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub fn run_networks_command(opt: &NetworksOpt) -> anyhow::Result<()> {
    let config = NetworksConfig::load(&opt.config)?;
    print!("{}", render_networks(&config)?);
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tokenledger_model::stubs::networks_config;

    use super::*;

    #[rstest]
    fn test_render_networks(networks_config: NetworksConfig) {
        let out = render_networks(&networks_config).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "1 Ethereum native=ETH/18 wrapped=0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2 fee_bps=10 safety_margin=0.01 tokens=ETH,USDC,WETH",
                "100 Gnosis native=XDAI/18 wrapped=0xe91d153e0b41518a2ce8dd3d7944fa863463a97d fee_bps=- safety_margin=- tokens=WXDAI,XDAI",
            ]
        );
    }

    #[rstest]
    fn test_render_network_without_tokens() {
        let config = NetworksConfig::from_toml_str(
            "[[networks]]\nchain_id = 5\nname = \"Goerli\"\nnative_symbol = \"ETH\"\n",
        )
        .unwrap();
        assert_eq!(
            render_networks(&config).unwrap(),
            "5 Goerli native=ETH/? wrapped=- fee_bps=- safety_margin=- tokens=-\n"
        );
    }

    #[rstest]
    fn test_render_empty() {
        assert_eq!(render_networks(&NetworksConfig::default()).unwrap(), "");
    }
}
