//! Token Mediator - Entry Points
//!
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//!
//! Bridge identity, the sender allow-list and the admin role are handled by
//! `common`.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::admin::{
    execute_accept_admin, execute_cancel_admin_proposal, execute_propose_admin,
    query_pending_admin, ADMIN,
};
use common::mediator::{
    execute_add_allowed_sender, execute_set_bridge, query_allowed_sender, query_bridge,
    save_bridge,
};
use common::MediatorError;

use crate::error::ContractError;
use crate::execute::{
    execute_add_mediated_token, execute_receive_tokens, execute_send_tokens,
    execute_set_remote_mediator, execute_set_request_gas_limit, save_remote_mediator,
    save_token_pair,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_custody, query_mediated_token, query_mediated_tokens,
    query_remote_mediator, query_supports_interface,
};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, REQUEST_GAS_LIMIT};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    ADMIN.save(deps.storage, &admin)?;

    let bridge = save_bridge(deps.storage, deps.api, &msg.bridge)?;

    if msg.request_gas_limit == 0 {
        return Err(ContractError::InvalidGasLimit);
    }
    REQUEST_GAS_LIMIT.save(deps.storage, &msg.request_gas_limit)?;

    match (&msg.remote_mediator, &msg.remote_chain_id) {
        (Some(address), Some(chain_id)) => {
            save_remote_mediator(deps.storage, address, chain_id)?;
        }
        (Some(_), None) => {
            return Err(MediatorError::InvalidChainId {
                reason: "remote_chain_id is required with remote_mediator".to_string(),
            }
            .into());
        }
        (None, _) => {}
    }

    for token in &msg.tokens {
        save_token_pair(deps.storage, deps.api, token)?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("bridge", bridge)
        .add_attribute(
            "remote_mediator",
            msg.remote_mediator.unwrap_or_default(),
        )
        .add_attribute("request_gas_limit", msg.request_gas_limit.to_string())
        .add_attribute("token_count", msg.tokens.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // User
        ExecuteMsg::SendTokens {
            local_token,
            amount,
        } => {
            let recipient = info.sender.to_string();
            execute_send_tokens(deps, env, info, local_token, recipient, amount)
        }
        ExecuteMsg::SendAndTransferTokens {
            local_token,
            recipient,
            amount,
        } => execute_send_tokens(deps, env, info, local_token, recipient, amount),

        // Bridge callback
        ExecuteMsg::ReceiveTokens {
            remote_token,
            local_token,
            origin,
            recipient,
            amount,
        } => execute_receive_tokens(
            deps,
            info,
            remote_token,
            local_token,
            origin,
            recipient,
            amount,
        ),

        // Admin
        ExecuteMsg::SetBridge { bridge } => Ok(execute_set_bridge(deps, info, bridge)?),
        ExecuteMsg::AddAllowedSender { sender, chain_id } => {
            Ok(execute_add_allowed_sender(deps, info, sender, chain_id)?)
        }
        ExecuteMsg::SetRequestGasLimit { limit } => {
            execute_set_request_gas_limit(deps, info, limit)
        }
        ExecuteMsg::SetRemoteMediator { address, chain_id } => {
            execute_set_remote_mediator(deps, info, address, chain_id)
        }
        ExecuteMsg::AddMediatedToken { token } => execute_add_mediated_token(deps, info, token),
        ExecuteMsg::ProposeAdmin { new_admin } => {
            Ok(execute_propose_admin(deps, info, new_admin)?)
        }
        ExecuteMsg::AcceptAdmin {} => Ok(execute_accept_admin(deps, info)?),
        ExecuteMsg::CancelAdminProposal {} => Ok(execute_cancel_admin_proposal(deps, info)?),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::MediatedToken { local_token } => {
            to_json_binary(&query_mediated_token(deps, local_token)?)
        }
        QueryMsg::MediatedTokens { start_after, limit } => {
            to_json_binary(&query_mediated_tokens(deps, start_after, limit)?)
        }
        QueryMsg::RemoteMediator {} => to_json_binary(&query_remote_mediator(deps)?),
        QueryMsg::AllowedSender { chain_id } => {
            to_json_binary(&query_allowed_sender(deps, chain_id)?)
        }
        QueryMsg::Bridge {} => to_json_binary(&query_bridge(deps)?),
        QueryMsg::Custody { token } => to_json_binary(&query_custody(deps, env, token)?),
        QueryMsg::SupportsInterface { interface_id } => {
            to_json_binary(&query_supports_interface(interface_id))
        }
        QueryMsg::PendingAdmin {} => to_json_binary(&query_pending_admin(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
