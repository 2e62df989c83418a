use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::admin::{
    execute_accept_admin, execute_cancel_admin_proposal, execute_propose_admin,
    query_pending_admin, ADMIN,
};
use common::amb::require_to_get_information;
use common::hash::to_hex;
use common::interface::{
    supports_interface, AMB_INFORMATION_RECEIVER_SIGNATURES, ERC165_SIGNATURES,
};
use common::mediator::{
    execute_add_allowed_sender, execute_set_bridge, query_allowed_sender, query_bridge,
    save_allowed_sender, save_bridge, BRIDGE,
};
use common::{require_valid_caller, ChainId};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, RemoteCallResponse,
    SupportsInterfaceResponse,
};
use crate::state::{CachedResponse, CONTRACT_NAME, CONTRACT_VERSION, RESPONSES};

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

    for allowed in &msg.allowed_senders {
        let chain_id = ChainId::from_binary(&allowed.chain_id)?;
        save_allowed_sender(deps.storage, &allowed.sender, &chain_id)?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("bridge", bridge)
        .add_attribute("allowed_senders", msg.allowed_senders.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CallRemote { target, call_data } => {
            execute_call_remote(deps, info, target, call_data)
        }
        ExecuteMsg::OnInformationReceived {
            message_id,
            success,
            result,
        } => execute_on_information_received(deps, info, message_id, success, result),
        ExecuteMsg::SetBridge { bridge } => Ok(execute_set_bridge(deps, info, bridge)?),
        ExecuteMsg::AddAllowedSender { sender, chain_id } => {
            Ok(execute_add_allowed_sender(deps, info, sender, chain_id)?)
        }
        ExecuteMsg::ProposeAdmin { new_admin } => {
            Ok(execute_propose_admin(deps, info, new_admin)?)
        }
        ExecuteMsg::AcceptAdmin {} => Ok(execute_accept_admin(deps, info)?),
        ExecuteMsg::CancelAdminProposal {} => Ok(execute_cancel_admin_proposal(deps, info)?),
    }
}

/// Writes no state. The bridge assigns the message id and emits it.
fn execute_call_remote(
    deps: DepsMut,
    info: MessageInfo,
    target: String,
    call_data: Binary,
) -> Result<Response, ContractError> {
    if target.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "target must not be empty".to_string(),
        });
    }

    let bridge = BRIDGE.load(deps.storage)?;
    let request = require_to_get_information(&bridge, target.clone(), call_data)?;

    Ok(Response::new()
        .add_message(request)
        .add_attribute("action", "call_remote")
        .add_attribute("caller", info.sender)
        .add_attribute("target", target))
}

/// Caches the answer under its message id, whether the remote read succeeded
/// or not. A repeated id overwrites the earlier entry.
fn execute_on_information_received(
    deps: DepsMut,
    info: MessageInfo,
    message_id: Binary,
    success: bool,
    result: Binary,
) -> Result<Response, ContractError> {
    let message = require_valid_caller(deps.as_ref(), &info)?;

    if message_id.len() != 32 {
        return Err(ContractError::InvalidMessageId {
            got: message_id.len(),
        });
    }

    RESPONSES.save(
        deps.storage,
        message_id.as_slice(),
        &CachedResponse {
            completed: true,
            success,
            result: result.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "on_information_received")
        .add_attribute("message_id", to_hex(message_id.as_slice()))
        .add_attribute("success", success.to_string())
        .add_attribute("result_len", result.len().to_string())
        .add_attribute("source_chain_id", message.source_chain_id.to_hex()))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::RemoteCallResponse { message_id } => {
            to_json_binary(&query_remote_call_response(deps, message_id)?)
        }
        QueryMsg::Config {} => to_json_binary(&ConfigResponse {
            admin: ADMIN.load(deps.storage)?,
            bridge: BRIDGE.load(deps.storage)?,
        }),
        QueryMsg::Bridge {} => to_json_binary(&query_bridge(deps)?),
        QueryMsg::AllowedSender { chain_id } => {
            to_json_binary(&query_allowed_sender(deps, chain_id)?)
        }
        QueryMsg::SupportsInterface { interface_id } => {
            to_json_binary(&SupportsInterfaceResponse {
                supported: supports_interface(
                    &[ERC165_SIGNATURES, AMB_INFORMATION_RECEIVER_SIGNATURES],
                    interface_id.as_slice(),
                ),
            })
        }
        QueryMsg::PendingAdmin {} => to_json_binary(&query_pending_admin(deps)?),
    }
}

/// Unknown and malformed ids read as not completed.
fn query_remote_call_response(deps: Deps, message_id: Binary) -> StdResult<RemoteCallResponse> {
    let cached = if message_id.len() == 32 {
        RESPONSES.may_load(deps.storage, message_id.as_slice())?
    } else {
        None
    };

    Ok(match cached {
        Some(cached) => RemoteCallResponse {
            completed: cached.completed,
            success: cached.success,
            result: cached.result,
        },
        None => RemoteCallResponse {
            completed: false,
            success: false,
            result: Binary::default(),
        },
    })
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
