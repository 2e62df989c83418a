use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

pub use common::msg::{
    AllowedSenderInfo, AllowedSenderResponse, BridgeResponse, PendingAdminResponse,
    SupportsInterfaceResponse,
};

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    pub bridge: String,
    /// Allowed sender per source chain. For result callbacks the bridge
    /// reports the requester as sender, so this receiver's own address must
    /// be listed for the chain that answers.
    pub allowed_senders: Vec<AllowedSenderInfo>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Ask the bridge to query `target` on the other chain with `call_data`.
    /// Open to anyone; the message id is only emitted as an event.
    CallRemote { target: String, call_data: Binary },

    /// Bridge callback carrying the result of a remote read.
    OnInformationReceived {
        message_id: Binary,
        success: bool,
        result: Binary,
    },

    // Admin
    SetBridge { bridge: String },
    AddAllowedSender { sender: String, chain_id: Binary },
    ProposeAdmin { new_admin: String },
    AcceptAdmin {},
    CancelAdminProposal {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Cached answer for `message_id`; not completed if never delivered
    #[returns(RemoteCallResponse)]
    RemoteCallResponse { message_id: Binary },

    #[returns(ConfigResponse)]
    Config {},

    #[returns(BridgeResponse)]
    Bridge {},

    #[returns(AllowedSenderResponse)]
    AllowedSender { chain_id: Binary },

    #[returns(SupportsInterfaceResponse)]
    SupportsInterface { interface_id: Binary },

    #[returns(PendingAdminResponse)]
    PendingAdmin {},
}

#[cw_serde]
pub struct RemoteCallResponse {
    pub completed: bool,
    pub success: bool,
    pub result: Binary,
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub bridge: Addr,
}

#[cw_serde]
pub struct MigrateMsg {}
