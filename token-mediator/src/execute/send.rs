//! Outgoing transfers.
//!
//! The caller is debited first (escrow into this contract, or burn), then the
//! bridge is asked to relay `ReceiveTokens` to the remote mediator. Both are
//! messages of the same response, so any failure reverts the whole send.

use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use common::amb::require_to_pass_message;
use common::mediator::BRIDGE;
use common::ChainId;

use crate::error::ContractError;
use crate::msg::ExecuteMsg;
use crate::state::{REMOTE_MEDIATOR, REQUEST_GAS_LIMIT, TOKEN_PAIRS};

/// Handles both `SendTokens` (recipient = caller) and `SendAndTransferTokens`.
pub fn execute_send_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    local_token: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }
    if recipient.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "recipient must not be empty".to_string(),
        });
    }

    // A malformed address can never have been registered.
    let not_registered = || ContractError::TokenNotRegistered {
        token: local_token.clone(),
    };
    let token_addr = deps
        .api
        .addr_validate(&local_token)
        .map_err(|_| not_registered())?;
    let pair = TOKEN_PAIRS
        .may_load(deps.storage, &token_addr)?
        .ok_or_else(not_registered)?;

    let remote = REMOTE_MEDIATOR
        .may_load(deps.storage)?
        .ok_or(ContractError::RemoteMediatorNotSet)?;
    let bridge = BRIDGE.load(deps.storage)?;
    let gas = REQUEST_GAS_LIMIT.load(deps.storage)?;

    let debit_msg = if pair.mint_and_burn {
        Cw20ExecuteMsg::BurnFrom {
            owner: info.sender.to_string(),
            amount,
        }
    } else {
        Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        }
    };
    let debit = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token_addr.to_string(),
        msg: to_json_binary(&debit_msg)?,
        funds: vec![],
    });

    // On the remote side our token is the remote one and theirs is local.
    let payload = ExecuteMsg::ReceiveTokens {
        remote_token: token_addr.to_string(),
        local_token: pair.remote_token.clone(),
        origin: info.sender.to_string(),
        recipient: recipient.clone(),
        amount,
    };
    let relay = require_to_pass_message(
        &bridge,
        remote.address.clone(),
        to_json_binary(&payload)?,
        gas,
    )?;

    Ok(Response::new()
        .add_message(debit)
        .add_message(relay)
        .add_attribute("action", "send_tokens")
        .add_attribute("local_token", token_addr)
        .add_attribute("remote_token", pair.remote_token)
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute(
            "mode",
            if pair.mint_and_burn { "burn" } else { "escrow" },
        )
        .add_attribute("remote_mediator", remote.address)
        .add_attribute("dest_chain_id", ChainId::new(remote.chain_id).to_hex()))
}
