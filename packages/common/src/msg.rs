//! Message and response types shared by both mediator contracts.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};

/// Allow-list entry as given at instantiation
#[cw_serde]
pub struct AllowedSenderInfo {
    /// Sender address on the source chain
    pub sender: String,
    /// Source chain id (32 bytes)
    pub chain_id: Binary,
}

#[cw_serde]
pub struct BridgeResponse {
    pub bridge: Addr,
}

#[cw_serde]
pub struct AllowedSenderResponse {
    pub chain_id: Binary,
    /// `None` when no sender is allowed for the chain
    pub sender: Option<String>,
}

#[cw_serde]
pub struct PendingAdminResponse {
    pub pending_admin: Option<Addr>,
}

#[cw_serde]
pub struct SupportsInterfaceResponse {
    pub supported: bool,
}
