//! Fixed-width identifiers carried across the bridge.
//!
//! Chain ids and message ids are both opaque 32-byte values. They travel as
//! `Binary` in messages and are stored as raw bytes.

use std::fmt;

use cosmwasm_std::Binary;

use crate::error::MediatorError;
use crate::hash::to_hex;

/// Identifier of one ledger the mediators bridge between.
///
/// The all-zero value is reserved and means "unset".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChainId([u8; 32]);

impl ChainId {
    pub const ZERO: ChainId = ChainId([0u8; 32]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        ChainId(bytes)
    }

    /// Parse a chain id from its wire form. Only the length is checked here.
    pub fn from_binary(value: &Binary) -> Result<Self, MediatorError> {
        let bytes: [u8; 32] =
            value
                .as_slice()
                .try_into()
                .map_err(|_| MediatorError::InvalidChainId {
                    reason: format!("expected 32 bytes, got {}", value.len()),
                })?;
        Ok(ChainId(bytes))
    }

    /// Parse a chain id that must also be set (non-zero).
    pub fn from_binary_nonzero(value: &Binary) -> Result<Self, MediatorError> {
        let chain_id = Self::from_binary(value)?;
        if chain_id.is_zero() {
            return Err(MediatorError::InvalidChainId {
                reason: "chain id 0x00..00 is reserved".to_string(),
            });
        }
        Ok(chain_id)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    pub fn to_binary(&self) -> Binary {
        Binary::from(self.0.to_vec())
    }

    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }
}

/// Numeric chain ids are left-padded big-endian, matching `bytes32(uint256(n))`.
impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        ChainId(u64_to_bytes32(value))
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Left-pad a big-endian u64 into 32 bytes.
pub fn u64_to_bytes32(value: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[24..].copy_from_slice(&value.to_be_bytes());
    out
}
