//! Incoming transfers (bridge callback).
//!
//! No message id is tracked here: a callback delivered twice credits twice.
//! At-most-once delivery is the bridge's job.

use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use common::require_valid_caller;

use crate::error::ContractError;
use crate::state::TOKEN_PAIRS;

pub fn execute_receive_tokens(
    deps: DepsMut,
    info: MessageInfo,
    remote_token: String,
    local_token: String,
    origin: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let message = require_valid_caller(deps.as_ref(), &info)?;

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

    if pair.remote_token != remote_token {
        return Err(ContractError::TokenPairMismatch {
            expected: pair.remote_token,
            got: remote_token,
        });
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }

    let recipient = deps.api.addr_validate(&recipient)?;

    // Release fails with the token's own error if custody is short.
    let credit_msg = if pair.mint_and_burn {
        Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        }
    } else {
        Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        }
    };
    let credit = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token_addr.to_string(),
        msg: to_json_binary(&credit_msg)?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(credit)
        .add_attribute("action", "receive_tokens")
        .add_attribute("local_token", token_addr)
        .add_attribute("remote_token", remote_token)
        .add_attribute("origin", origin)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute(
            "mode",
            if pair.mint_and_burn { "mint" } else { "release" },
        )
        .add_attribute("source_chain_id", message.source_chain_id.to_hex()))
}
