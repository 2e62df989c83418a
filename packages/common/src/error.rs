//! Errors raised by the shared mediator guards.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MediatorError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Admin Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only pending admin can accept")]
    UnauthorizedPendingAdmin,

    #[error("No pending admin change")]
    NoPendingAdmin,

    // ========================================================================
    // Bridge Callback Errors
    // ========================================================================

    #[error("Unauthorized bridge: {caller} is not the configured bridge")]
    UnauthorizedBridge { caller: String },

    #[error("Unauthorized sender: {sender} not allowed for chain {chain_id}")]
    UnauthorizedSender { sender: String, chain_id: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid chain ID: {reason}")]
    InvalidChainId { reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },
}
