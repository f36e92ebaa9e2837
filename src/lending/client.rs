use crate::errors::Result;
use crate::lending::LendingProtocol;
use crate::models::OracleQuote;
use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use ethers::{
    contract::abigen,
    providers::{Http, Provider},
    types::H160,
};
use std::sync::Arc;

abigen!(
    Comet,
    r"[
        struct AssetInfo { uint8 offset; address asset; address priceFeed; uint64 scale; uint64 borrowCollateralFactor; uint64 liquidateCollateralFactor; uint64 liquidationFactor; uint128 supplyCap; }
        function numAssets() view returns (uint8)
        function getAssetInfo(uint8 i) view returns (AssetInfo)
        function getPrice(address priceFeed) view returns (uint256)
    ]",
);

/// `getAssetInfo` return as decoded by the binding:
/// `(offset, asset, priceFeed, scale, borrowCF, liquidateCF, liquidationFactor, supplyCap)`.
type AssetInfoTuple = (u8, H160, H160, u64, u64, u64, u64, u128);

fn asset_of(info: AssetInfoTuple) -> Address {
    let (_offset, asset, ..) = info;
    Address::from(asset.0)
}

/// Handle for a single Comet market.
#[derive(Clone)]
pub struct CometClient {
    comet: Comet<Provider<Http>>,
}

impl CometClient {
    pub fn new(address: Address, provider: Arc<Provider<Http>>) -> Self {
        let address = ethers::types::Address::from(address.into_array());
        Self {
            comet: Comet::new(address, provider),
        }
    }
}

#[async_trait]
impl LendingProtocol for CometClient {
    async fn num_assets(&self) -> Result<u8> {
        Ok(self.comet.num_assets().call().await?)
    }

    async fn asset_address(&self, index: u8) -> Result<Address> {
        let info: AssetInfoTuple = self.comet.get_asset_info(index).call().await?;
        Ok(asset_of(info))
    }

    async fn price(&self, token: Address) -> Result<OracleQuote> {
        let token = ethers::types::Address::from(token.into_array());
        let raw = self.comet.get_price(token).call().await?;
        Ok(OracleQuote::new(U256::from_limbs(raw.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use ethers::abi::{self, Detokenize, ParamType, Token};

    fn asset_info_type() -> ParamType {
        ParamType::Tuple(vec![
            ParamType::Uint(8),
            ParamType::Address,
            ParamType::Address,
            ParamType::Uint(64),
            ParamType::Uint(64),
            ParamType::Uint(64),
            ParamType::Uint(64),
            ParamType::Uint(128),
        ])
    }

    #[test]
    fn asset_is_taken_from_second_field_of_encoded_asset_info() {
        let weth = address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
        let feed = H160::from_low_u64_be(0xfeed);
        let encoded = abi::encode(&[Token::Tuple(vec![
            Token::Uint(2u64.into()),
            Token::Address(H160::from(weth.into_array())),
            Token::Address(feed),
            Token::Uint(1_000_000_000_000_000_000u64.into()),
            Token::Uint(825_000_000_000_000_000u64.into()),
            Token::Uint(895_000_000_000_000_000u64.into()),
            Token::Uint(950_000_000_000_000_000u64.into()),
            Token::Uint(350_000_000_000_000_000_000_000u128.into()),
        ])]);

        let tokens = abi::decode(&[asset_info_type()], &encoded).unwrap();
        let info = <AssetInfoTuple as Detokenize>::from_tokens(tokens).unwrap();

        assert_eq!(info.0, 2);
        assert_eq!(info.2, feed);
        assert_eq!(asset_of(info), weth);
    }

    #[test]
    fn client_builds_without_touching_the_network() {
        let provider = Arc::new(Provider::<Http>::try_from("http://127.0.0.1:1").unwrap());
        let comet = address!("0xc3d688B66703497DAA19211EEdff47f25384cdc3");
        let client = CometClient::new(comet, provider);
        assert_eq!(client.comet.address().0, comet.into_array());
    }
}
