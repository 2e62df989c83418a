use common::amb::InformationReceiverMsg;
use common::hash::to_hex;
use common::ids::{u64_to_bytes32, ChainId};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult, Storage, WasmMsg,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    ChainIdsResponse, ExecuteMsg, InstantiateMsg, MessageCountResponse, MessageIdResponse,
    MessageSenderResponse, MessageSourceChainIdResponse, MigrateMsg, QueryMsg,
};
use crate::state::{
    Config, MessageContext, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, MESSAGE_CONTEXT,
    MESSAGE_NONCE,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let source_chain_id = ChainId::from_binary_nonzero(&msg.source_chain_id)?;
    let destination_chain_id = ChainId::from_binary_nonzero(&msg.destination_chain_id)?;

    CONFIG.save(
        deps.storage,
        &Config {
            source_chain_id: source_chain_id.to_bytes(),
            destination_chain_id: destination_chain_id.to_bytes(),
        },
    )?;
    MESSAGE_NONCE.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("source_chain_id", source_chain_id.to_hex())
        .add_attribute("destination_chain_id", destination_chain_id.to_hex()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RequireToPassMessage {
            contract,
            data,
            gas,
        } => execute_require_to_pass_message(deps, info, contract, data, gas),
        ExecuteMsg::RequireToGetInformation {
            request_selector,
            data,
        } => execute_require_to_get_information(deps, info, request_selector, data),
        ExecuteMsg::ExecutePassMessageRequest {
            message_id,
            sender,
            source_chain_id,
            contract,
            data,
            gas,
        } => execute_pass_message_request(
            deps,
            env,
            MessageContext {
                message_id,
                sender,
                source_chain_id,
            },
            contract,
            data,
            gas,
        ),
        ExecuteMsg::ExecuteGetInformationRequest {
            message_id,
            requester,
            source_chain_id,
            success,
            result,
        } => execute_get_information_request(
            deps,
            env,
            MessageContext {
                message_id,
                sender: requester,
                source_chain_id,
            },
            success,
            result,
        ),
        ExecuteMsg::ClearMessageContext {} => execute_clear_message_context(deps, env, info),
    }
}

/// Ids are the nonce left-padded to 32 bytes; the first request gets id 1.
fn next_message_id(storage: &mut dyn Storage) -> StdResult<[u8; 32]> {
    let nonce = MESSAGE_NONCE.may_load(storage)?.unwrap_or_default() + 1;
    MESSAGE_NONCE.save(storage, &nonce)?;
    Ok(u64_to_bytes32(nonce))
}

fn execute_require_to_pass_message(
    deps: DepsMut,
    info: MessageInfo,
    contract: String,
    data: Binary,
    gas: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let message_id = next_message_id(deps.storage)?;

    Ok(Response::new()
        .set_data(Binary::from(message_id.to_vec()))
        .add_attribute("action", "pass_message")
        .add_attribute("message_id", to_hex(&message_id))
        .add_attribute("sender", info.sender)
        .add_attribute("source_chain_id", to_hex(&config.source_chain_id))
        .add_attribute("destination_chain_id", to_hex(&config.destination_chain_id))
        .add_attribute("contract", contract)
        .add_attribute("data", data.to_base64())
        .add_attribute("gas", gas.to_string()))
}

fn execute_require_to_get_information(
    deps: DepsMut,
    info: MessageInfo,
    request_selector: Binary,
    data: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let message_id = next_message_id(deps.storage)?;

    Ok(Response::new()
        .set_data(Binary::from(message_id.to_vec()))
        .add_attribute("action", "get_information")
        .add_attribute("message_id", to_hex(&message_id))
        .add_attribute("requester", info.sender)
        .add_attribute("source_chain_id", to_hex(&config.source_chain_id))
        .add_attribute("request_selector", to_hex(request_selector.as_slice()))
        .add_attribute("data", data.to_base64()))
}

/// Calls `contract` and then clears the context with a self-call, so the
/// context is visible for the whole delivery and gone afterwards.
fn execute_pass_message_request(
    deps: DepsMut,
    env: Env,
    context: MessageContext,
    contract: String,
    data: Binary,
    gas: u64,
) -> Result<Response, ContractError> {
    let contract = deps.api.addr_validate(&contract)?;
    MESSAGE_CONTEXT.save(deps.storage, &context)?;

    let deliver = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: contract.to_string(),
        msg: data,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(deliver)
        .add_message(clear_context_msg(&env)?)
        .add_attribute("action", "execute_pass_message")
        .add_attribute("message_id", to_hex(context.message_id.as_slice()))
        .add_attribute("sender", context.sender)
        .add_attribute("contract", contract)
        .add_attribute("gas", gas.to_string()))
}

fn execute_get_information_request(
    deps: DepsMut,
    env: Env,
    context: MessageContext,
    success: bool,
    result: Binary,
) -> Result<Response, ContractError> {
    let requester = deps.api.addr_validate(&context.sender)?;
    MESSAGE_CONTEXT.save(deps.storage, &context)?;

    let deliver = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: requester.to_string(),
        msg: to_json_binary(&InformationReceiverMsg::OnInformationReceived {
            message_id: context.message_id.clone(),
            success,
            result,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(deliver)
        .add_message(clear_context_msg(&env)?)
        .add_attribute("action", "execute_get_information")
        .add_attribute("message_id", to_hex(context.message_id.as_slice()))
        .add_attribute("requester", requester)
        .add_attribute("success", success.to_string()))
}

fn clear_context_msg(env: &Env) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: env.contract.address.to_string(),
        msg: to_json_binary(&ExecuteMsg::ClearMessageContext {})?,
        funds: vec![],
    }))
}

fn execute_clear_message_context(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::Unauthorized);
    }
    MESSAGE_CONTEXT.remove(deps.storage);

    Ok(Response::new().add_attribute("action", "clear_message_context"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::MessageSender {} => to_json_binary(&MessageSenderResponse {
            sender: load_context(deps)?.sender,
        }),
        QueryMsg::MessageSourceChainId {} => to_json_binary(&MessageSourceChainIdResponse {
            chain_id: load_context(deps)?.source_chain_id,
        }),
        QueryMsg::MessageId {} => to_json_binary(&MessageIdResponse {
            message_id: load_context(deps)?.message_id,
        }),
        QueryMsg::ChainIds {} => to_json_binary(&query_chain_ids(deps)?),
        QueryMsg::MessageCount {} => to_json_binary(&MessageCountResponse {
            count: MESSAGE_NONCE.may_load(deps.storage)?.unwrap_or_default(),
        }),
    }
}

fn load_context(deps: Deps) -> StdResult<MessageContext> {
    MESSAGE_CONTEXT
        .may_load(deps.storage)?
        .ok_or_else(|| StdError::generic_err("No message is being delivered"))
}

fn query_chain_ids(deps: Deps) -> StdResult<ChainIdsResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ChainIdsResponse {
        source_chain_id: Binary::from(config.source_chain_id.to_vec()),
        destination_chain_id: Binary::from(config.destination_chain_id.to_vec()),
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}
