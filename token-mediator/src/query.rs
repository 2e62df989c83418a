//! Query handlers for the token mediator.

use cosmwasm_std::{Addr, Binary, Deps, Env, Order, StdResult};
use cw20::{BalanceResponse, Cw20QueryMsg};
use cw_storage_plus::Bound;

use common::admin::ADMIN;
use common::interface::{supports_interface, ERC165_SIGNATURES, TOKEN_MEDIATOR_SIGNATURES};
use common::mediator::BRIDGE;

use crate::msg::{
    ConfigResponse, CustodyResponse, MediatedTokenResponse, MediatedTokensResponse,
    RemoteMediatorResponse, SupportsInterfaceResponse,
};
use crate::state::{TokenPair, REMOTE_MEDIATOR, REQUEST_GAS_LIMIT, TOKEN_PAIRS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let remote = REMOTE_MEDIATOR.may_load(deps.storage)?;
    Ok(ConfigResponse {
        admin: ADMIN.load(deps.storage)?,
        bridge: BRIDGE.load(deps.storage)?,
        remote_mediator: remote.as_ref().map(|r| r.address.clone()),
        remote_chain_id: remote.map(|r| Binary::from(r.chain_id.to_vec())),
        request_gas_limit: REQUEST_GAS_LIMIT.load(deps.storage)?,
    })
}

fn to_token_response(local_token: Addr, pair: TokenPair) -> MediatedTokenResponse {
    MediatedTokenResponse {
        local_token,
        remote_token: pair.remote_token,
        mint_and_burn: pair.mint_and_burn,
    }
}

pub fn query_mediated_token(deps: Deps, local_token: String) -> StdResult<MediatedTokenResponse> {
    let local_token = deps.api.addr_validate(&local_token)?;
    let pair = TOKEN_PAIRS.load(deps.storage, &local_token)?;
    Ok(to_token_response(local_token, pair))
}

/// List token pairs ordered by local token address.
pub fn query_mediated_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<MediatedTokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_after.as_ref().map(Bound::exclusive);

    let tokens = TOKEN_PAIRS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(local_token, pair)| to_token_response(local_token, pair)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(MediatedTokensResponse { tokens })
}

pub fn query_remote_mediator(deps: Deps) -> StdResult<RemoteMediatorResponse> {
    let remote = REMOTE_MEDIATOR.may_load(deps.storage)?;
    Ok(match remote {
        Some(remote) => RemoteMediatorResponse {
            address: Some(remote.address),
            chain_id: Some(Binary::from(remote.chain_id.to_vec())),
        },
        None => RemoteMediatorResponse {
            address: None,
            chain_id: None,
        },
    })
}

/// Escrowed balance: whatever this contract holds of `token`.
pub fn query_custody(deps: Deps, env: Env, token: String) -> StdResult<CustodyResponse> {
    let token = deps.api.addr_validate(&token)?;
    let BalanceResponse { balance } = deps.querier.query_wasm_smart(
        token.to_string(),
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    Ok(CustodyResponse {
        token,
        amount: balance,
    })
}

pub fn query_supports_interface(interface_id: Binary) -> SupportsInterfaceResponse {
    SupportsInterfaceResponse {
        supported: supports_interface(
            &[ERC165_SIGNATURES, TOKEN_MEDIATOR_SIGNATURES],
            interface_id.as_slice(),
        ),
    }
}
