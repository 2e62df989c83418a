//! Capability ids for `SupportsInterface` queries.
//!
//! Ids follow ERC-165: each entry point contributes the first four bytes of
//! `keccak256(signature)` and the interface id is the XOR of all of them.
//! The signature lists below are the source of truth; the ids are derived.

use crate::hash::keccak256;

/// `supportsInterface(bytes4)` -> `0x01ffc9a7`
pub const ERC165_SIGNATURES: &[&str] = &["supportsInterface(bytes4)"];

/// Token mediator user and callback entry points -> `0x3756c9a5`
pub const TOKEN_MEDIATOR_SIGNATURES: &[&str] = &[
    "sendTokens(address,uint256)",
    "sendAndTransferTokens(address,address,uint256)",
    "receiveTokens(address,address,address,address,uint256)",
];

/// Information receiver callback -> `0xf534de5b`
pub const AMB_INFORMATION_RECEIVER_SIGNATURES: &[&str] =
    &["onInformationReceived(bytes32,bool,bytes)"];

/// Reserved by ERC-165, never supported.
pub const INVALID_INTERFACE_ID: [u8; 4] = [0xff; 4];

/// First four bytes of the keccak256 of a function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// XOR of the selectors of every signature in the set.
pub fn interface_id(signatures: &[&str]) -> [u8; 4] {
    signatures.iter().fold([0u8; 4], |mut acc, signature| {
        for (a, s) in acc.iter_mut().zip(selector(signature)) {
            *a ^= s;
        }
        acc
    })
}

/// Whether `requested` is one of the interfaces built from `supported`.
///
/// Anything that is not exactly four bytes is answered with `false`.
pub fn supports_interface(supported: &[&[&str]], requested: &[u8]) -> bool {
    let Ok(requested) = <[u8; 4]>::try_from(requested) else {
        return false;
    };
    if requested == INVALID_INTERFACE_ID {
        return false;
    }
    supported
        .iter()
        .any(|signatures| interface_id(signatures) == requested)
}
