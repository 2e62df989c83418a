//! Test AMB - Arbitrary Message Bridge double for integration tests
//!
//! Plays the bridge on one chain:
//! - `RequireToPassMessage` / `RequireToGetInformation` assign a message id and
//!   emit it in a `pass_message` / `get_information` event, like the real
//!   bridge does for off-chain relayers
//! - `ExecutePassMessageRequest` / `ExecuteGetInformationRequest` simulate the
//!   delivery side: they expose the message context through the AMB queries
//!   while the target contract is being called

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
