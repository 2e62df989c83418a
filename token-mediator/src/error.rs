//! Error types for the token mediator
//!
//! Guard failures (admin, bridge, sender) come from `common` and are wrapped
//! in `Mediator`. CW20 failures are never mapped; they abort the transaction
//! with the token's own error.

use common::MediatorError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Mediator(#[from] MediatorError),

    // ========================================================================
    // Token Registry Errors
    // ========================================================================

    #[error("Token not registered: {token}")]
    TokenNotRegistered { token: String },

    #[error("Token pair mismatch: expected remote token {expected}, got {got}")]
    TokenPairMismatch { expected: String, got: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Remote mediator not set")]
    RemoteMediatorNotSet,

    #[error("Invalid gas limit: must be greater than zero")]
    InvalidGasLimit,

    // ========================================================================
    // Transfer Errors
    // ========================================================================

    #[error("Invalid amount: must be greater than zero")]
    InvalidAmount,

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },
}
