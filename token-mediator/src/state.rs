//! State for the token mediator
//!
//! Bridge address, allow-list and admin live in `common` storage keys.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:token-mediator";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Counterpart of a local token on the remote chain
#[cw_serde]
pub struct TokenPair {
    /// Token address on the remote chain
    pub remote_token: String,
    /// true: burn on send, mint on receive; false: escrow on send, release on receive
    pub mint_and_burn: bool,
}

/// The one mediator this instance talks to
#[cw_serde]
pub struct RemoteMediator {
    pub address: String,
    pub chain_id: [u8; 32],
}

/// Key: local CW20 address
pub const TOKEN_PAIRS: Map<&Addr, TokenPair> = Map::new("token_pairs");

pub const REMOTE_MEDIATOR: Item<RemoteMediator> = Item::new("remote_mediator");

/// Gas budget passed to the bridge with every relayed message
pub const REQUEST_GAS_LIMIT: Item<u64> = Item::new("request_gas_limit");
