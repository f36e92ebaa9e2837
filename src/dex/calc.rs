use crate::models::PoolReserves;
use alloy_primitives::Address;

/// Spot price of `token` in units of the pair's other asset.
///
/// Returns `None` when either reserve is empty. The ratio is taken over raw
/// reserve integers, so it only lines up with a USD price when both tokens
/// share the reference asset's decimals.
pub fn spot_price(reserves: &PoolReserves, token: Address) -> Option<f64> {
    if reserves.reserve0 == 0 || reserves.reserve1 == 0 {
        return None;
    }
    let r0 = reserves.reserve0 as f64;
    let r1 = reserves.reserve1 as f64;

    // Address equality is byte equality, so letter case never matters here.
    if reserves.token0 == token {
        Some(r1 / r0)
    } else {
        Some(r0 / r1)
    }
}
