//! Configuration loader and application settings.

use crate::dex::pair::parse_token_address;
use crate::errors::{AppError, Result};
use alloy_primitives::{Address, B256, address, b256};
use url::Url;

/// Uniswap V2 factory on Ethereum mainnet.
pub const UNISWAP_V2_FACTORY: Address = address!("0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");
/// Init-code hash literal placed in the pair preimage.
pub const UNISWAP_V2_INIT_CODE_HASH: B256 =
    b256!("0x96e8ac4277198fff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845");
/// USDC on Ethereum mainnet; every spot price is quoted against it.
pub const USDC: Address = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

/// Fixed on-chain constants the analyzer prices against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolConstants {
    pub factory: Address,
    pub init_code_hash: B256,
    /// Counter asset of every derived pair.
    pub reference_asset: Address,
}

impl ProtocolConstants {
    pub const fn mainnet() -> Self {
        Self {
            factory: UNISWAP_V2_FACTORY,
            init_code_hash: UNISWAP_V2_INIT_CODE_HASH,
            reference_asset: USDC,
        }
    }
}

impl Default for ProtocolConstants {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Consolidated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// RPC endpoint for the Ethereum-compatible node.
    pub rpc_url: Url,
    /// Comet (Compound III) market whose oracle is checked.
    pub comet_address: Option<Address>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `RPC_URL` is required. `COMET_ADDRESS` may be unset or empty here; use
    /// [`AppConfig::require_comet`] where a market is needed.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rpc_raw = non_empty(lookup("RPC_URL"))
            .ok_or_else(|| AppError::Config("RPC_URL is required".into()))?;
        let rpc_url = Url::parse(&rpc_raw)?;

        let comet_address = non_empty(lookup("COMET_ADDRESS"))
            .map(|raw| parse_token_address(&raw))
            .transpose()?;

        Ok(Self {
            rpc_url,
            comet_address,
        })
    }

    pub fn require_comet(&self) -> Result<Address> {
        self.comet_address
            .ok_or_else(|| AppError::Config("COMET_ADDRESS not set".into()))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_rpc_url_is_a_config_error() {
        let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn malformed_rpc_url_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("RPC_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, AppError::UrlParse(_)));
    }

    #[test]
    fn empty_comet_address_counts_as_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("RPC_URL", "http://localhost:8545"),
            ("COMET_ADDRESS", ""),
        ]))
        .unwrap();
        assert_eq!(cfg.comet_address, None);
        assert!(matches!(cfg.require_comet(), Err(AppError::Config(_))));
    }

    #[test]
    fn comet_address_is_parsed_case_insensitively() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("RPC_URL", "https://eth.example.org"),
            ("COMET_ADDRESS", "0XC3D688B66703497DAA19211EEDFF47F25384CDC3"),
        ]))
        .unwrap();
        assert_eq!(
            cfg.require_comet().unwrap(),
            address!("0xc3d688B66703497DAA19211EEdff47f25384cdc3")
        );
    }

    #[test]
    fn mainnet_constants_are_the_default() {
        assert_eq!(ProtocolConstants::default(), ProtocolConstants::mainnet());
        assert_eq!(ProtocolConstants::mainnet().reference_asset, USDC);
    }
}
