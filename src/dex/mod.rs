//! Uniswap V2 pair pricing: offline pair derivation, reserve reads, spot price.

use crate::errors::Result;
use crate::models::PoolReserves;
use alloy_primitives::Address;
use async_trait::async_trait;

pub mod calc;
pub mod client;
pub mod pair;

pub use calc::spot_price;
pub use client::EthersPairReader;
pub use pair::{PoolAddressDeriver, parse_token_address, sort_tokens};

/// Read access to constant-product pair contracts.
#[async_trait]
pub trait PairReader: Send + Sync {
    /// Reserves and slot-0 token of the pair at `pair`.
    ///
    /// Fails when the pair does not exist or the call reverts.
    async fn reserves(&self, pair: Address) -> Result<PoolReserves>;
}
