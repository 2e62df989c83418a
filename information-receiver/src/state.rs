use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;
use cw_storage_plus::Map;

pub const CONTRACT_NAME: &str = "crates.io:information-receiver";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Answer to a remote read, written once the bridge delivers it
#[cw_serde]
pub struct CachedResponse {
    pub completed: bool,
    /// Whether the remote read itself succeeded
    pub success: bool,
    pub result: Binary,
}

/// Key: 32-byte message id assigned by the bridge
pub const RESPONSES: Map<&[u8], CachedResponse> = Map::new("responses");
