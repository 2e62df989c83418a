use common::MediatorError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Mediator(#[from] MediatorError),

    #[error("Invalid message id: expected 32 bytes, got {got}")]
    InvalidMessageId { got: usize },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },
}
