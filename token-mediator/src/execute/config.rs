//! Admin configuration handlers.

use common::admin::require_admin;
use common::mediator::save_allowed_sender;
use common::ChainId;
use cosmwasm_std::{Addr, Api, Binary, DepsMut, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::msg::TokenInfo;
use crate::state::{RemoteMediator, TokenPair, REMOTE_MEDIATOR, REQUEST_GAS_LIMIT, TOKEN_PAIRS};

/// Register `token`, replacing any pair already stored for its local address.
pub fn save_token_pair(
    storage: &mut dyn Storage,
    api: &dyn Api,
    token: &TokenInfo,
) -> Result<Addr, ContractError> {
    let local_token = api.addr_validate(&token.local_token)?;
    if token.remote_token.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "remote_token must not be empty".to_string(),
        });
    }

    TOKEN_PAIRS.save(
        storage,
        &local_token,
        &TokenPair {
            remote_token: token.remote_token.clone(),
            mint_and_burn: token.mint_and_burn,
        },
    )?;
    Ok(local_token)
}

/// Store the remote mediator and allow it as the sender for its chain.
pub fn save_remote_mediator(
    storage: &mut dyn Storage,
    address: &str,
    chain_id: &Binary,
) -> Result<ChainId, ContractError> {
    let chain_id = ChainId::from_binary_nonzero(chain_id)?;
    save_allowed_sender(storage, address, &chain_id)?;

    REMOTE_MEDIATOR.save(
        storage,
        &RemoteMediator {
            address: address.to_string(),
            chain_id: chain_id.to_bytes(),
        },
    )?;
    Ok(chain_id)
}

pub fn execute_set_request_gas_limit(
    deps: DepsMut,
    info: MessageInfo,
    limit: u64,
) -> Result<Response, ContractError> {
    require_admin(deps.storage, &info.sender)?;

    if limit == 0 {
        return Err(ContractError::InvalidGasLimit);
    }
    REQUEST_GAS_LIMIT.save(deps.storage, &limit)?;

    Ok(Response::new()
        .add_attribute("method", "set_request_gas_limit")
        .add_attribute("limit", limit.to_string()))
}

pub fn execute_set_remote_mediator(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    chain_id: Binary,
) -> Result<Response, ContractError> {
    require_admin(deps.storage, &info.sender)?;

    let chain_id = save_remote_mediator(deps.storage, &address, &chain_id)?;

    Ok(Response::new()
        .add_attribute("method", "set_remote_mediator")
        .add_attribute("remote_mediator", address)
        .add_attribute("chain_id", chain_id.to_hex()))
}

pub fn execute_add_mediated_token(
    deps: DepsMut,
    info: MessageInfo,
    token: TokenInfo,
) -> Result<Response, ContractError> {
    require_admin(deps.storage, &info.sender)?;

    let local_token = save_token_pair(deps.storage, deps.api, &token)?;

    Ok(Response::new()
        .add_attribute("method", "add_mediated_token")
        .add_attribute("local_token", local_token)
        .add_attribute("remote_token", token.remote_token)
        .add_attribute("mint_and_burn", token.mint_and_burn.to_string()))
}
