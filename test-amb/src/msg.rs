use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

pub use common::amb::{MessageIdResponse, MessageSenderResponse, MessageSourceChainIdResponse};

#[cw_serde]
pub struct InstantiateMsg {
    /// Chain this bridge lives on (32 bytes, non-zero)
    pub source_chain_id: Binary,
    /// Chain this bridge relays to (32 bytes, non-zero)
    pub destination_chain_id: Binary,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ---- outbound, called by mediators ----
    /// Record a message for the other chain. The assigned id is returned as
    /// response data and in the `pass_message` event.
    RequireToPassMessage {
        contract: String,
        data: Binary,
        gas: u64,
    },
    /// Record a read request for the other chain. The assigned id is returned
    /// as response data and in the `get_information` event.
    RequireToGetInformation {
        request_selector: Binary,
        data: Binary,
    },

    // ---- inbound, called by the test harness acting as relayer ----
    /// Deliver `data` to `contract` with the given message context.
    ExecutePassMessageRequest {
        message_id: Binary,
        sender: String,
        source_chain_id: Binary,
        contract: String,
        data: Binary,
        gas: u64,
    },
    /// Deliver the result of a read request back to `requester`.
    ExecuteGetInformationRequest {
        message_id: Binary,
        requester: String,
        source_chain_id: Binary,
        success: bool,
        result: Binary,
    },
    /// Drop the message context after delivery. Only callable by the bridge.
    ClearMessageContext {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Original sender of the message being delivered
    #[returns(MessageSenderResponse)]
    MessageSender {},
    /// Source chain of the message being delivered
    #[returns(MessageSourceChainIdResponse)]
    MessageSourceChainId {},
    /// Id of the message being delivered
    #[returns(MessageIdResponse)]
    MessageId {},
    #[returns(ChainIdsResponse)]
    ChainIds {},
    /// Number of outbound requests recorded so far
    #[returns(MessageCountResponse)]
    MessageCount {},
}

#[cw_serde]
pub struct ChainIdsResponse {
    pub source_chain_id: Binary,
    pub destination_chain_id: Binary,
}

#[cw_serde]
pub struct MessageCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct MigrateMsg {}
