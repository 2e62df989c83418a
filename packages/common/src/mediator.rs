//! Mediator Base: bridge identity and the per-chain sender allow-list.
//!
//! Callback entry points are guarded in two layers that fail independently:
//! 1. `require_bridge` - the immediate caller must be the configured bridge
//! 2. `require_allowed_sender` - the original sender the bridge reports must be
//!    the one allowed for the source chain it reports
//!
//! The allow-list holds at most one sender per chain; adding a sender for a
//! chain that already has one replaces it.

use cosmwasm_std::{
    Addr, Api, Binary, Deps, DepsMut, MessageInfo, Response, StdResult, Storage,
};
use cw_storage_plus::{Item, Map};

use crate::admin::require_admin;
use crate::amb::{AmbQueryMsg, MessageSenderResponse, MessageSourceChainIdResponse};
use crate::error::MediatorError;
use crate::hash::to_hex;
use crate::ids::ChainId;
use crate::msg::{AllowedSenderResponse, BridgeResponse};

/// Bridge allowed to invoke callback entry points
pub const BRIDGE: Item<Addr> = Item::new("bridge");

/// Allowed original sender per source chain
/// Key: 32-byte chain id, Value: sender address on that chain
pub const ALLOWED_SENDERS: Map<&[u8], String> = Map::new("allowed_senders");

/// Origin of a relayed message, as verified by `require_valid_caller`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeMessage {
    pub sender: String,
    pub source_chain_id: ChainId,
}

// ============================================================================
// State Setters
// ============================================================================

/// Validate and store the bridge address, replacing any previous one.
pub fn save_bridge(
    storage: &mut dyn Storage,
    api: &dyn Api,
    bridge: &str,
) -> Result<Addr, MediatorError> {
    let bridge = api.addr_validate(bridge)?;
    BRIDGE.save(storage, &bridge)?;
    Ok(bridge)
}

/// Allow `sender` as the only origin for messages from `chain_id`.
pub fn save_allowed_sender(
    storage: &mut dyn Storage,
    sender: &str,
    chain_id: &ChainId,
) -> Result<(), MediatorError> {
    if chain_id.is_zero() {
        return Err(MediatorError::InvalidChainId {
            reason: "chain id 0x00..00 is reserved".to_string(),
        });
    }
    if sender.trim().is_empty() {
        return Err(MediatorError::InvalidAddress {
            reason: "sender must not be empty".to_string(),
        });
    }
    ALLOWED_SENDERS.save(storage, chain_id.as_slice(), &sender.to_string())?;
    Ok(())
}

// ============================================================================
// Execute Handlers (admin)
// ============================================================================

pub fn execute_set_bridge(
    deps: DepsMut,
    info: MessageInfo,
    bridge: String,
) -> Result<Response, MediatorError> {
    require_admin(deps.storage, &info.sender)?;

    let bridge = save_bridge(deps.storage, deps.api, &bridge)?;

    Ok(Response::new()
        .add_attribute("method", "set_bridge")
        .add_attribute("bridge", bridge))
}

pub fn execute_add_allowed_sender(
    deps: DepsMut,
    info: MessageInfo,
    sender: String,
    chain_id: Binary,
) -> Result<Response, MediatorError> {
    require_admin(deps.storage, &info.sender)?;

    let chain_id = ChainId::from_binary(&chain_id)?;
    save_allowed_sender(deps.storage, &sender, &chain_id)?;

    Ok(Response::new()
        .add_attribute("method", "add_allowed_sender")
        .add_attribute("sender", sender)
        .add_attribute("chain_id", chain_id.to_hex()))
}

// ============================================================================
// Callback Guards
// ============================================================================

/// Guard 1: the immediate caller must be the configured bridge.
pub fn require_bridge(storage: &dyn Storage, caller: &Addr) -> Result<Addr, MediatorError> {
    match BRIDGE.may_load(storage)? {
        Some(bridge) if bridge == *caller => Ok(bridge),
        _ => Err(MediatorError::UnauthorizedBridge {
            caller: caller.to_string(),
        }),
    }
}

/// Guard 2: the bridge-reported sender must be the one allowed for its chain.
///
/// A missing entry and the reserved zero chain id both fail.
pub fn require_allowed_sender(
    storage: &dyn Storage,
    sender: &str,
    chain_id: &ChainId,
) -> Result<(), MediatorError> {
    let allowed = if chain_id.is_zero() {
        None
    } else {
        ALLOWED_SENDERS.may_load(storage, chain_id.as_slice())?
    };

    match allowed {
        Some(allowed) if allowed == sender => Ok(()),
        _ => Err(MediatorError::UnauthorizedSender {
            sender: sender.to_string(),
            chain_id: chain_id.to_hex(),
        }),
    }
}

/// Run both guards for a callback entry point.
///
/// The bridge is asked for the sender and source chain of the message it is
/// delivering; it is trusted to answer truthfully once guard 1 has passed.
pub fn require_valid_caller(
    deps: Deps,
    info: &MessageInfo,
) -> Result<BridgeMessage, MediatorError> {
    let bridge = require_bridge(deps.storage, &info.sender)?;

    let MessageSenderResponse { sender } = deps
        .querier
        .query_wasm_smart(bridge.to_string(), &AmbQueryMsg::MessageSender {})?;
    let MessageSourceChainIdResponse { chain_id } = deps
        .querier
        .query_wasm_smart(bridge.to_string(), &AmbQueryMsg::MessageSourceChainId {})?;

    let source_chain_id =
        ChainId::from_binary(&chain_id).map_err(|_| MediatorError::UnauthorizedSender {
            sender: sender.clone(),
            chain_id: to_hex(chain_id.as_slice()),
        })?;

    require_allowed_sender(deps.storage, &sender, &source_chain_id)?;

    Ok(BridgeMessage {
        sender,
        source_chain_id,
    })
}

// ============================================================================
// Queries
// ============================================================================

pub fn query_bridge(deps: Deps) -> StdResult<BridgeResponse> {
    Ok(BridgeResponse {
        bridge: BRIDGE.load(deps.storage)?,
    })
}

pub fn query_allowed_sender(deps: Deps, chain_id: Binary) -> StdResult<AllowedSenderResponse> {
    let sender = ALLOWED_SENDERS.may_load(deps.storage, chain_id.as_slice())?;
    Ok(AllowedSenderResponse { chain_id, sender })
}
