//! Admin guard shared by the mediator contracts.
//!
//! Every privileged configuration message goes through `require_admin`.
//! Handing the role over is two-step: the current admin proposes, the
//! proposed address accepts.

use cosmwasm_std::{Addr, Deps, DepsMut, MessageInfo, Response, StdResult, Storage};
use cw_storage_plus::Item;

use crate::error::MediatorError;
use crate::msg::PendingAdminResponse;

/// Current admin
pub const ADMIN: Item<Addr> = Item::new("admin");

/// Proposed admin waiting to accept (if any)
pub const PENDING_ADMIN: Item<Addr> = Item::new("pending_admin");

/// Fail with `Unauthorized` unless `sender` is the admin.
pub fn require_admin(storage: &dyn Storage, sender: &Addr) -> Result<(), MediatorError> {
    let admin = ADMIN.load(storage)?;
    if *sender != admin {
        return Err(MediatorError::Unauthorized);
    }
    Ok(())
}

/// Propose a new admin.
pub fn execute_propose_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, MediatorError> {
    require_admin(deps.storage, &info.sender)?;

    let new_admin_addr = deps.api.addr_validate(&new_admin)?;
    PENDING_ADMIN.save(deps.storage, &new_admin_addr)?;

    Ok(Response::new()
        .add_attribute("method", "propose_admin")
        .add_attribute("new_admin", new_admin_addr))
}

/// Accept a pending admin proposal.
pub fn execute_accept_admin(deps: DepsMut, info: MessageInfo) -> Result<Response, MediatorError> {
    let pending = PENDING_ADMIN
        .may_load(deps.storage)?
        .ok_or(MediatorError::NoPendingAdmin)?;

    if info.sender != pending {
        return Err(MediatorError::UnauthorizedPendingAdmin);
    }

    ADMIN.save(deps.storage, &pending)?;
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "accept_admin")
        .add_attribute("new_admin", pending))
}

/// Cancel a pending admin proposal.
pub fn execute_cancel_admin_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, MediatorError> {
    require_admin(deps.storage, &info.sender)?;

    if PENDING_ADMIN.may_load(deps.storage)?.is_none() {
        return Err(MediatorError::NoPendingAdmin);
    }
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new().add_attribute("method", "cancel_admin_proposal"))
}

pub fn query_pending_admin(deps: Deps) -> StdResult<PendingAdminResponse> {
    Ok(PendingAdminResponse {
        pending_admin: PENDING_ADMIN.may_load(deps.storage)?,
    })
}
