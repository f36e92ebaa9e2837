//! Oracle-versus-DEX deviation analysis.
//!
//! Every contract read made here is absorbed at its call site: a failed read
//! becomes an absent field on that token's record and never stops the run.

use super::types::DeviationResult;
use crate::config::ProtocolConstants;
use crate::dex::{PairReader, PoolAddressDeriver, spot_price};
use crate::lending::LendingProtocol;
use alloy_primitives::Address;
use futures::{Stream, StreamExt, stream};
use tracing::{debug, warn};

/// `|oracle - dex| / dex`, present only when both prices are and `dex > 0`.
pub fn relative_deviation(oracle: Option<f64>, dex: Option<f64>) -> Option<f64> {
    match (oracle, dex) {
        (Some(oracle), Some(dex)) if dex > 0.0 => Some((oracle - dex).abs() / dex),
        _ => None,
    }
}

/// Compares a lending market's oracle prices against Uniswap V2 spot prices.
pub struct DeviationAnalyzer<L, P> {
    lending: L,
    pairs: P,
    deriver: PoolAddressDeriver,
    reference_asset: Address,
}

impl<L, P> DeviationAnalyzer<L, P>
where
    L: LendingProtocol,
    P: PairReader,
{
    pub fn new(lending: L, pairs: P, constants: ProtocolConstants) -> Self {
        Self {
            lending,
            pairs,
            deriver: PoolAddressDeriver::new(constants.factory, constants.init_code_hash),
            reference_asset: constants.reference_asset,
        }
    }

    /// Tokens to analyze: the explicit override if given, otherwise every
    /// asset listed by the market in index order.
    pub async fn resolve_targets(&self, asset: Option<Address>) -> Vec<Address> {
        if let Some(asset) = asset {
            return vec![asset];
        }

        let count = match self.lending.num_assets().await {
            Ok(n) => n,
            Err(e) => {
                warn!(error = %e, "[TARGETS] numAssets read failed, treating as zero assets");
                0
            }
        };

        let mut targets = Vec::with_capacity(count as usize);
        for index in 0..count {
            match self.lending.asset_address(index).await {
                Ok(token) => targets.push(token),
                Err(e) => warn!(index, error = %e, "[TARGETS] getAssetInfo read failed, skipping"),
            }
        }
        targets
    }

    /// Lazily analyzes `tokens` one at a time, yielding one record per token
    /// in input order. Nothing is read until the stream is polled.
    pub fn analyze(&self, tokens: Vec<Address>) -> impl Stream<Item = DeviationResult> + '_ {
        stream::iter(tokens).then(move |token| self.analyze_token(token))
    }

    /// Like [`analyze`](Self::analyze) but keeps up to `concurrency` tokens in
    /// flight. Records are still yielded in input order.
    pub fn analyze_buffered(
        &self,
        tokens: Vec<Address>,
        concurrency: usize,
    ) -> impl Stream<Item = DeviationResult> + '_ {
        stream::iter(tokens)
            .map(move |token| self.analyze_token(token))
            .buffered(concurrency.max(1))
    }

    pub async fn analyze_token(&self, token: Address) -> DeviationResult {
        let oracle = self.oracle_price(token).await;
        let dex = self.dex_price(token).await;
        let deviation = relative_deviation(oracle, dex);
        DeviationResult {
            token,
            oracle,
            dex,
            deviation,
        }
    }

    async fn oracle_price(&self, token: Address) -> Option<f64> {
        match self.lending.price(token).await {
            Ok(quote) => quote.to_usd(),
            Err(e) => {
                debug!(%token, error = %e, "[ORACLE] getPrice failed");
                None
            }
        }
    }

    async fn dex_price(&self, token: Address) -> Option<f64> {
        let pair = self.deriver.derive(token, self.reference_asset);
        match self.pairs.reserves(pair).await {
            Ok(reserves) => spot_price(&reserves, token),
            Err(e) => {
                debug!(%token, %pair, error = %e, "[DEX] pair read failed");
                None
            }
        }
    }
}
