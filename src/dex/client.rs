use crate::dex::PairReader;
use crate::errors::Result;
use crate::models::PoolReserves;
use alloy_primitives::Address;
use async_trait::async_trait;
use ethers::{
    contract::abigen,
    providers::{Http, Provider},
    types::H160,
};
use std::sync::Arc;

abigen!(
    UniswapV2Pair,
    r"[
        function getReserves() view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast)
        function token0() view returns (address)
        function token1() view returns (address)
    ]",
);

/// Reads Uniswap V2 pairs through a shared HTTP provider.
#[derive(Clone)]
pub struct EthersPairReader {
    provider: Arc<Provider<Http>>,
}

impl EthersPairReader {
    pub fn new(provider: Arc<Provider<Http>>) -> Self {
        Self { provider }
    }

    fn pair(&self, address: Address) -> UniswapV2Pair<Provider<Http>> {
        let address = ethers::types::Address::from(address.into_array());
        UniswapV2Pair::new(address, self.provider.clone())
    }
}

#[async_trait]
impl PairReader for EthersPairReader {
    async fn reserves(&self, pair: Address) -> Result<PoolReserves> {
        let contract = self.pair(pair);
        let reserves: ReservesTuple = contract.get_reserves().call().await?;
        let token0 = contract.token_0().call().await?;
        Ok(pool_reserves(reserves, token0))
    }
}

/// `getReserves` return: `(reserve0, reserve1, blockTimestampLast)`.
type ReservesTuple = (u128, u128, u32);

fn pool_reserves(reserves: ReservesTuple, token0: H160) -> PoolReserves {
    let (reserve0, reserve1, _block_timestamp_last) = reserves;
    PoolReserves {
        reserve0,
        reserve1,
        token0: Address::from(token0.0),
    }
}
