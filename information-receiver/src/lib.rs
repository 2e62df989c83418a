//! Information Receiver - remote reads over an Arbitrary Message Bridge
//!
//! `CallRemote` asks the bridge to read a contract on the other chain. The
//! bridge later calls `OnInformationReceived` with the result, which is cached
//! by message id and readable by anyone through `RemoteCallResponse`.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
