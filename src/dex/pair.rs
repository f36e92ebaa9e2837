//! Offline pair address derivation.
//!
//! The pair address is `keccak256(0xff ‖ factory ‖ token0 ‖ token1 ‖ init_code_hash)[12..]`
//! where `(token0, token1)` is the sorted pair. Nothing here touches the network.
//!
//! Unlike EVM CREATE2, the sorted tokens go into the preimage as-is rather than
//! as `keccak256(token0 ‖ token1)`, so results differ from the deployed
//! Uniswap V2 pairs.

use crate::errors::{AppError, Result};
use alloy_primitives::{Address, B256, keccak256};

/// Width of an address in hex characters, without the `0x` marker.
const ADDRESS_HEX_LEN: usize = 40;

/// `0xff` ‖ factory(20) ‖ token0(20) ‖ token1(20) ‖ init_code_hash(32)
const CREATE2_PREIMAGE_LEN: usize = 1 + 20 + 20 + 20 + 32;

/// Parse a textual token address into a fixed 20-byte `Address`.
///
/// Accepts an optional `0x`/`0X` marker and any letter case. Inputs shorter
/// than 40 hex digits are left-padded with zeros so that every address fills
/// exactly 20 bytes of the CREATE2 preimage.
pub fn parse_token_address(input: &str) -> Result<Address> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let invalid = |reason: &str| AppError::Address {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    if digits.is_empty() {
        return Err(invalid("empty"));
    }
    if digits.len() > ADDRESS_HEX_LEN {
        return Err(invalid("more than 20 bytes"));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("non-hex character"));
    }

    let padded = format!("{:0>width$}", digits.to_ascii_lowercase(), width = ADDRESS_HEX_LEN);
    padded
        .parse::<Address>()
        .map_err(|e| invalid(&e.to_string()))
}

/// Canonical ordering of a token pair.
///
/// Byte order on `Address` is the same as lexicographic order of the
/// lowercase 40-digit hex strings, so this matches a case-insensitive string
/// compare. Equal tokens are returned unchanged.
pub fn sort_tokens(a: Address, b: Address) -> (Address, Address) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Computes pair addresses for one factory deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolAddressDeriver {
    factory: Address,
    init_code_hash: B256,
}

impl PoolAddressDeriver {
    pub fn new(factory: Address, init_code_hash: B256) -> Self {
        Self {
            factory,
            init_code_hash,
        }
    }

    pub fn factory(&self) -> Address {
        self.factory
    }

    pub fn init_code_hash(&self) -> B256 {
        self.init_code_hash
    }

    /// Pair address for `(token_a, token_b)`, independent of argument order.
    pub fn derive(&self, token_a: Address, token_b: Address) -> Address {
        let (t0, t1) = sort_tokens(token_a, token_b);
        let preimage = self.preimage(t0, t1);
        let digest = keccak256(preimage);
        Address::from_slice(&digest[12..])
    }

    fn preimage(&self, t0: Address, t1: Address) -> [u8; CREATE2_PREIMAGE_LEN] {
        let mut buf = [0u8; CREATE2_PREIMAGE_LEN];
        buf[0] = 0xff;
        buf[1..21].copy_from_slice(self.factory.as_slice());
        buf[21..41].copy_from_slice(t0.as_slice());
        buf[41..61].copy_from_slice(t1.as_slice());
        buf[61..].copy_from_slice(self.init_code_hash.as_slice());
        buf
    }
}
