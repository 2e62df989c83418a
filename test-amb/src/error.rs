use common::MediatorError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Mediator(#[from] MediatorError),

    #[error("Unauthorized: only the bridge itself can clear the message context")]
    Unauthorized,
}
