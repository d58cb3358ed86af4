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

//! Network and token configuration loaded from TOML.

use std::{collections::HashSet, fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tokenledger_core::{DecimalValue, ParseError, TokenAddress};

use crate::{
    network::{Network, NetworkRegistry},
    token::{TokenInfo, TokenRegistry},
};

/// The maximum protocol fee, 100% in basis points.
pub const MAX_PROTOCOL_FEE_BPS: u32 = 10_000;

/// An error which can occur when loading or validating a [`NetworksConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid TOML for this schema.
    #[error("invalid networks TOML: {0}")]
    Toml(#[from] toml::de::Error),
    /// Two networks share a chain ID.
    #[error("duplicate network chain_id {0}")]
    DuplicateChainId(u32),
    /// A protocol fee is above 100%.
    #[error("protocol_fee_bps {bps} for chain_id {chain_id} exceeds {MAX_PROTOCOL_FEE_BPS}")]
    ProtocolFeeOutOfRange { chain_id: u32, bps: u32 },
    /// A safety margin is not a decimal literal.
    #[error("safety_margin for chain_id {chain_id}: {source}")]
    MalformedSafetyMargin {
        chain_id: u32,
        #[source]
        source: ParseError,
    },
    /// A safety margin is below zero.
    #[error("safety_margin for chain_id {chain_id} is negative, was {value}")]
    NegativeSafetyMargin { chain_id: u32, value: DecimalValue },
    /// A wrapped-token or token address is empty or non-ASCII.
    #[error("invalid token address for chain_id {chain_id}: {reason}")]
    InvalidAddress { chain_id: u32, reason: String },
    /// A token entry uses the native-currency address, which is reserved for the
    /// network's own currency.
    #[error("token entry for chain_id {chain_id} uses the reserved native-currency address")]
    NativeAddressToken { chain_id: u32 },
    /// Two token entries on one network share an address (compared case-insensitively).
    #[error("duplicate token {address} for chain_id {chain_id}")]
    DuplicateToken { chain_id: u32, address: TokenAddress },
}

/// Configuration for a known token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// The token contract address (any case).
    pub address: String,
    /// The token's ticker symbol.
    pub symbol: String,
    /// The full name of the token.
    pub name: String,
    /// The number of decimal places of the token.
    pub decimals: u8,
}

/// Configuration for one network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// The network chain ID.
    pub chain_id: u32,
    /// The human-readable network name.
    pub name: String,
    /// The symbol of the native currency.
    pub native_symbol: String,
    /// The full name of the native currency, defaults to the symbol.
    pub native_name: Option<String>,
    /// The decimals of the native currency.
    pub native_decimals: Option<u8>,
    /// The address of the wrapped native token.
    pub wrapped_token: Option<String>,
    /// The native amount kept back from spendable funds, as a decimal string.
    pub safety_margin: Option<String>,
    /// The proportional wrapping fee in basis points.
    pub protocol_fee_bps: Option<u32>,
    /// Known tokens on this network.
    #[serde(default)]
    pub tokens: Vec<TokenConfig>,
}

/// Configuration for the set of supported networks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworksConfig {
    /// The configured networks.
    pub networks: Vec<NetworkConfig>,
}

impl NetworksConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the document does not parse or fails validation.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the configuration is invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("Unable to read networks config {}", path.display()))?;
        let config = Self::from_toml_str(&data)
            .with_context(|| format!("Invalid networks config {}", path.display()))?;
        log::debug!(
            "Loaded {} networks from {}",
            config.networks.len(),
            path.display()
        );
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut chain_ids = HashSet::new();
        for network in &self.networks {
            let chain_id = network.chain_id;
            if !chain_ids.insert(chain_id) {
                return Err(ConfigError::DuplicateChainId(chain_id));
            }

            if let Some(bps) = network.protocol_fee_bps
                && bps > MAX_PROTOCOL_FEE_BPS
            {
                return Err(ConfigError::ProtocolFeeOutOfRange { chain_id, bps });
            }

            network.parse_safety_margin()?;

            if let Some(wrapped) = &network.wrapped_token {
                parse_address(chain_id, wrapped)?;
            }

            let mut addresses = HashSet::new();
            for token in &network.tokens {
                let address = parse_address(chain_id, &token.address)?;
                if address.is_native() {
                    return Err(ConfigError::NativeAddressToken { chain_id });
                }
                if !addresses.insert(address) {
                    return Err(ConfigError::DuplicateToken { chain_id, address });
                }
            }
        }
        Ok(())
    }

    /// Builds the [`NetworkRegistry`] for this configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn network_registry(&self) -> Result<NetworkRegistry, ConfigError> {
        self.validate()?;

        let mut registry = NetworkRegistry::new();
        for network in &self.networks {
            let wrapped_token = network
                .wrapped_token
                .as_ref()
                .map(|address| parse_address(network.chain_id, address))
                .transpose()?;

            registry.insert(Network {
                chain_id: network.chain_id,
                name: network.name.clone(),
                native_symbol: network.native_symbol.clone(),
                native_decimals: network.native_decimals,
                wrapped_token,
                safety_margin: network.parse_safety_margin()?,
                protocol_fee_bps: network.protocol_fee_bps,
            });
        }
        Ok(registry)
    }

    /// Builds the [`TokenRegistry`] for this configuration, registering each network's
    /// native currency (when its decimals are known) under the native address.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn token_registry(&self) -> anyhow::Result<TokenRegistry> {
        self.validate()?;

        let mut registry = TokenRegistry::new();
        for network in &self.networks {
            if let Some(decimals) = network.native_decimals {
                registry.add(TokenInfo::new(
                    network.chain_id,
                    TokenAddress::native(),
                    network.native_symbol.clone(),
                    network
                        .native_name
                        .clone()
                        .unwrap_or_else(|| network.native_symbol.clone()),
                    decimals,
                ))?;
            }

            for token in &network.tokens {
                registry.add(TokenInfo::new(
                    network.chain_id,
                    TokenAddress::new_checked(&token.address)?,
                    token.symbol.clone(),
                    token.name.clone(),
                    token.decimals,
                ))?;
            }
        }
        Ok(registry)
    }
}

impl NetworkConfig {
    fn parse_safety_margin(&self) -> Result<Option<DecimalValue>, ConfigError> {
        let Some(raw) = &self.safety_margin else {
            return Ok(None);
        };

        let value = DecimalValue::parse(raw).map_err(|source| ConfigError::MalformedSafetyMargin {
            chain_id: self.chain_id,
            source,
        })?;
        if value.is_negative() {
            return Err(ConfigError::NegativeSafetyMargin {
                chain_id: self.chain_id,
                value,
            });
        }
        Ok(Some(value))
    }
}

fn parse_address(chain_id: u32, raw: &str) -> Result<TokenAddress, ConfigError> {
    TokenAddress::new_checked(raw).map_err(|e| ConfigError::InvalidAddress {
        chain_id,
        reason: e.to_string(),
    })
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;

    use super::*;
    use crate::stubs::*;

    #[rstest]
    fn test_parse_stub_config(networks_config: NetworksConfig) {
        assert_eq!(networks_config.networks.len(), 2);
        let mainnet = &networks_config.networks[0];
        assert_eq!(mainnet.chain_id, 1);
        assert_eq!(mainnet.tokens.len(), 2);
        assert_eq!(networks_config.networks[1].safety_margin, None);
    }

    #[rstest]
    fn test_empty_document_is_default() {
        assert_eq!(NetworksConfig::from_toml_str("").unwrap(), NetworksConfig::default());
    }

    #[rstest]
    fn test_duplicate_chain_id() {
        let toml = r#"
            [[networks]]
            chain_id = 1
            name = "A"
            native_symbol = "ETH"

            [[networks]]
            chain_id = 1
            name = "B"
            native_symbol = "ETH"
        "#;
        assert!(matches!(
            NetworksConfig::from_toml_str(toml),
            Err(ConfigError::DuplicateChainId(1))
        ));
    }

    #[rstest]
    #[case("10000", true)]
    #[case("10001", false)]
    fn test_protocol_fee_bound(#[case] bps: &str, #[case] ok: bool) {
        let toml = format!(
            "[[networks]]\nchain_id = 1\nname = \"A\"\nnative_symbol = \"ETH\"\nprotocol_fee_bps = {bps}\n"
        );
        let result = NetworksConfig::from_toml_str(&toml);
        assert_eq!(result.is_ok(), ok);
        if !ok {
            assert!(matches!(
                result,
                Err(ConfigError::ProtocolFeeOutOfRange {
                    chain_id: 1,
                    bps: 10_001
                })
            ));
        }
    }

    #[rstest]
    #[case("12.34.56")]
    #[case("abc")]
    fn test_malformed_safety_margin(#[case] margin: &str) {
        let toml = format!(
            "[[networks]]\nchain_id = 5\nname = \"A\"\nnative_symbol = \"ETH\"\nsafety_margin = \"{margin}\"\n"
        );
        match NetworksConfig::from_toml_str(&toml) {
            Err(ConfigError::MalformedSafetyMargin { chain_id, source }) => {
                assert_eq!(chain_id, 5);
                assert_eq!(source, ParseError::Malformed(margin.to_string()));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[rstest]
    fn test_negative_safety_margin() {
        let toml = "[[networks]]\nchain_id = 5\nname = \"A\"\nnative_symbol = \"ETH\"\nsafety_margin = \"-0.1\"\n";
        assert!(matches!(
            NetworksConfig::from_toml_str(toml),
            Err(ConfigError::NegativeSafetyMargin { chain_id: 5, .. })
        ));
    }

    #[rstest]
    fn test_duplicate_token_differing_by_case() {
        let toml = r#"
            [[networks]]
            chain_id = 1
            name = "A"
            native_symbol = "ETH"

            [[networks.tokens]]
            address = "0xABC"
            symbol = "ABC"
            name = "Abc"
            decimals = 6

            [[networks.tokens]]
            address = "0xabc"
            symbol = "ABC2"
            name = "Abc"
            decimals = 6
        "#;
        assert!(matches!(
            NetworksConfig::from_toml_str(toml),
            Err(ConfigError::DuplicateToken { chain_id: 1, .. })
        ));
    }

    #[rstest]
    fn test_token_at_native_address() {
        let toml = r#"
            [[networks]]
            chain_id = 1
            name = "A"
            native_symbol = "ETH"

            [[networks.tokens]]
            address = "0x0000000000000000000000000000000000000000"
            symbol = "ETH"
            name = "Ether"
            decimals = 18
        "#;
        let err = NetworksConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::NativeAddressToken { chain_id: 1 }));
        assert_eq!(
            err.to_string(),
            "token entry for chain_id 1 uses the reserved native-currency address"
        );
    }

    #[rstest]
    fn test_invalid_toml() {
        assert!(matches!(
            NetworksConfig::from_toml_str("[[networks]]\nchain_id = \"one\"\n"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[rstest]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(STUB_NETWORKS_TOML.as_bytes()).unwrap();
        let config = NetworksConfig::load(file.path()).unwrap();
        assert_eq!(config, networks_config());
    }

    #[rstest]
    fn test_load_missing_file() {
        let err = NetworksConfig::load("/nonexistent/networks.toml").unwrap_err();
        assert!(err.to_string().contains("Unable to read networks config"));
    }

    #[rstest]
    fn test_shipped_example_config_is_valid() {
        let config =
            NetworksConfig::from_toml_str(include_str!("../../../config/networks.example.toml"))
                .unwrap();
        let networks = config.network_registry().unwrap();
        assert!(networks.iter().all(|network| {
            network.wrapped_token.is_some()
                && network.safety_margin.is_some()
                && network.protocol_fee_bps.is_some()
        }));
    }

    #[rstest]
    fn test_registries(networks_config: NetworksConfig) {
        let networks = networks_config.network_registry().unwrap();
        assert_eq!(networks.len(), 2);
        let tokens = networks_config.token_registry().unwrap();
        // Mainnet: native, WETH, USDC. Gnosis: native, WXDAI.
        assert_eq!(tokens.len(), 5);
    }
}
