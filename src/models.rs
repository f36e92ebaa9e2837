//! Shared data structures used throughout the application.

use alloy_primitives::{Address, U256};
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

/// Decimal places of the lending protocol's USD price feed.
pub const ORACLE_DECIMALS: i64 = 8;

/// Raw oracle reading: USD price as an 8-decimal fixed-point integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleQuote {
    pub raw: U256,
}

impl OracleQuote {
    pub fn new(raw: U256) -> Self {
        Self { raw }
    }

    /// Decimal USD price, or `None` for a zero reading.
    pub fn to_usd(&self) -> Option<f64> {
        if self.raw.is_zero() {
            return None;
        }
        let digits = BigInt::from_bytes_be(Sign::Plus, &self.raw.to_be_bytes::<32>());
        BigDecimal::new(digits, ORACLE_DECIMALS).to_f64()
    }
}

/// Reserves of a constant-product pair at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolReserves {
    pub reserve0: u128,
    pub reserve1: u128,
    /// Token held in slot 0.
    pub token0: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("quote should be present");
        assert!(
            (actual - expected).abs() <= expected.abs() * 1e-12,
            "{actual} != {expected}"
        );
    }

    #[test]
    fn zero_quote_is_absent() {
        assert_eq!(OracleQuote::new(U256::ZERO).to_usd(), None);
    }

    #[test]
    fn quote_is_scaled_by_eight_decimals() {
        let quote = OracleQuote::new(U256::from(10_000_000_000u64));
        assert_close(quote.to_usd(), 100.0);

        let quote = OracleQuote::new(U256::from(99_995_000u64));
        assert_close(quote.to_usd(), 0.99995);
    }

    #[test]
    fn sub_unit_quote_keeps_precision() {
        let quote = OracleQuote::new(U256::from(1u64));
        assert_close(quote.to_usd(), 0.000_000_01);
    }
}
