//! Lending protocol (Compound III "Comet") market reads.

use crate::errors::Result;
use crate::models::OracleQuote;
use alloy_primitives::Address;
use async_trait::async_trait;

pub mod client;

pub use client::CometClient;

/// Read access to a lending market's asset list and price oracle.
#[async_trait]
pub trait LendingProtocol: Send + Sync {
    /// Number of collateral assets listed by the market.
    async fn num_assets(&self) -> Result<u8>;

    /// Token address of the collateral asset at `index`.
    async fn asset_address(&self, index: u8) -> Result<Address>;

    /// Oracle price of `token` as reported by the market.
    async fn price(&self, token: Address) -> Result<OracleQuote>;
}
