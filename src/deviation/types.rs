use alloy_primitives::{Address, hex};
use serde::{Serialize, Serializer};

/// Oracle-versus-DEX comparison for one token. Absent fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviationResult {
    #[serde(serialize_with = "lowercase_address")]
    pub token: Address,
    pub oracle: Option<f64>,
    pub dex: Option<f64>,
    pub deviation: Option<f64>,
}

impl DeviationResult {
    /// True when a deviation is present and strictly above `max`.
    pub fn exceeds(&self, max: f64) -> bool {
        self.deviation.is_some_and(|d| d > max)
    }
}

fn lowercase_address<S: Serializer>(address: &Address, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode_prefixed(address))
}
