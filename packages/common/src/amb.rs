//! Arbitrary Message Bridge (AMB) interface.
//!
//! The mediators consume the bridge through this narrow surface only:
//! two outbound requests and three queries answered while a relayed
//! message is being delivered. Everything else about the bridge
//! (ordering, finality, validator quorum) is the bridge's own business.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, Binary, CosmosMsg, StdResult, WasmMsg};

use crate::hash::keccak256;

/// Request selector the bridge uses for remote read-calls.
pub const ETH_CALL_SIGNATURE: &str = "eth_call(address,bytes)";

/// `keccak256("eth_call(address,bytes)")`
pub fn eth_call_selector() -> [u8; 32] {
    keccak256(ETH_CALL_SIGNATURE.as_bytes())
}

/// Execute messages accepted by the bridge.
#[cw_serde]
pub enum AmbExecuteMsg {
    /// Relay `data` as an execute message to `contract` on the other chain.
    RequireToPassMessage {
        contract: String,
        data: Binary,
        gas: u64,
    },
    /// Perform a read-call on the other chain and deliver the result back to
    /// the requester's `OnInformationReceived` entry point.
    RequireToGetInformation {
        request_selector: Binary,
        data: Binary,
    },
}

/// Queries answered by the bridge about the message it is currently delivering.
#[cw_serde]
#[derive(QueryResponses)]
pub enum AmbQueryMsg {
    #[returns(MessageSenderResponse)]
    MessageSender {},
    #[returns(MessageSourceChainIdResponse)]
    MessageSourceChainId {},
    #[returns(MessageIdResponse)]
    MessageId {},
}

#[cw_serde]
pub struct MessageSenderResponse {
    pub sender: String,
}

#[cw_serde]
pub struct MessageSourceChainIdResponse {
    pub chain_id: Binary,
}

#[cw_serde]
pub struct MessageIdResponse {
    pub message_id: Binary,
}

/// Payload of a `RequireToGetInformation` request built by `eth_call_selector`.
#[cw_serde]
pub struct RemoteCall {
    /// Contract to read on the other chain
    pub contract: String,
    /// Raw query message for that contract
    pub msg: Binary,
}

/// Callback the bridge delivers to an information receiver.
#[cw_serde]
pub enum InformationReceiverMsg {
    OnInformationReceived {
        message_id: Binary,
        success: bool,
        result: Binary,
    },
}

/// Build the bridge call relaying `data` to `contract`.
pub fn require_to_pass_message(
    bridge: &Addr,
    contract: String,
    data: Binary,
    gas: u64,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: bridge.to_string(),
        msg: to_json_binary(&AmbExecuteMsg::RequireToPassMessage {
            contract,
            data,
            gas,
        })?,
        funds: vec![],
    }))
}

/// Build the bridge call requesting a remote read of `contract` with `msg`.
pub fn require_to_get_information(
    bridge: &Addr,
    contract: String,
    msg: Binary,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: bridge.to_string(),
        msg: to_json_binary(&AmbExecuteMsg::RequireToGetInformation {
            request_selector: Binary::from(eth_call_selector().to_vec()),
            data: to_json_binary(&RemoteCall { contract, msg })?,
        })?,
        funds: vec![],
    }))
}
