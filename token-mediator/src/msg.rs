use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

pub use common::msg::{
    AllowedSenderResponse, BridgeResponse, PendingAdminResponse, SupportsInterfaceResponse,
};

/// Token pair as given by the admin
#[cw_serde]
pub struct TokenInfo {
    /// CW20 contract on this chain
    pub local_token: String,
    /// Paired token on the remote chain
    pub remote_token: String,
    pub mint_and_burn: bool,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    pub bridge: String,
    /// Mediator on the remote chain; requires `remote_chain_id`
    pub remote_mediator: Option<String>,
    /// 32-byte chain id of the remote mediator
    pub remote_chain_id: Option<Binary>,
    pub request_gas_limit: u64,
    pub tokens: Vec<TokenInfo>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // User Operations
    // ========================================================================
    /// Send `amount` of `local_token` to the caller's own address on the
    /// remote chain. Requires a CW20 allowance for this contract.
    SendTokens {
        local_token: String,
        amount: Uint128,
    },

    /// Send `amount` of `local_token` to `recipient` on the remote chain.
    /// Requires a CW20 allowance for this contract.
    SendAndTransferTokens {
        local_token: String,
        recipient: String,
        amount: Uint128,
    },

    // ========================================================================
    // Bridge Callback
    // ========================================================================
    /// Credit `recipient` with `amount` of `local_token`. Bridge only, and the
    /// reported sender must be the allowed one for the source chain.
    ReceiveTokens {
        /// Token the tokens left on the remote chain
        remote_token: String,
        local_token: String,
        /// Address that sent on the remote chain
        origin: String,
        recipient: String,
        amount: Uint128,
    },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    SetBridge {
        bridge: String,
    },

    AddAllowedSender {
        sender: String,
        chain_id: Binary,
    },

    SetRequestGasLimit {
        limit: u64,
    },

    /// Point at the remote mediator and allow it as sender for `chain_id`.
    SetRemoteMediator {
        address: String,
        chain_id: Binary,
    },

    /// Register or replace the pair for a local token.
    AddMediatedToken {
        token: TokenInfo,
    },

    ProposeAdmin {
        new_admin: String,
    },

    AcceptAdmin {},

    CancelAdminProposal {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(MediatedTokenResponse)]
    MediatedToken { local_token: String },

    #[returns(MediatedTokensResponse)]
    MediatedTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(RemoteMediatorResponse)]
    RemoteMediator {},

    #[returns(AllowedSenderResponse)]
    AllowedSender { chain_id: Binary },

    #[returns(BridgeResponse)]
    Bridge {},

    /// This contract's own CW20 balance of `token`
    #[returns(CustodyResponse)]
    Custody { token: String },

    #[returns(SupportsInterfaceResponse)]
    SupportsInterface { interface_id: Binary },

    #[returns(PendingAdminResponse)]
    PendingAdmin {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub bridge: Addr,
    pub remote_mediator: Option<String>,
    pub remote_chain_id: Option<Binary>,
    pub request_gas_limit: u64,
}

#[cw_serde]
pub struct MediatedTokenResponse {
    pub local_token: Addr,
    pub remote_token: String,
    pub mint_and_burn: bool,
}

#[cw_serde]
pub struct MediatedTokensResponse {
    pub tokens: Vec<MediatedTokenResponse>,
}

#[cw_serde]
pub struct RemoteMediatorResponse {
    pub address: Option<String>,
    pub chain_id: Option<Binary>,
}

#[cw_serde]
pub struct CustodyResponse {
    pub token: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct MigrateMsg {}
