use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:amb-test-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    /// Chain this bridge instance lives on
    pub source_chain_id: [u8; 32],
    /// Chain this bridge instance relays to
    pub destination_chain_id: [u8; 32],
}

/// Message being delivered, visible to the target through the AMB queries
#[cw_serde]
pub struct MessageContext {
    pub message_id: Binary,
    pub sender: String,
    pub source_chain_id: Binary,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Number of outbound requests issued; the latest one is the last message id
pub const MESSAGE_NONCE: Item<u64> = Item::new("message_nonce");

pub const MESSAGE_CONTEXT: Item<MessageContext> = Item::new("message_context");
