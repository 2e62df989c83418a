//! Token Mediator - CW20 transfers between two chains over an Arbitrary Message Bridge
//!
//! # Outgoing Flow
//! 1. User grants this contract a CW20 allowance
//! 2. `SendTokens` escrows (lock mode) or burns (mint/burn mode) the amount
//! 3. The bridge is asked to relay `ReceiveTokens` to the remote mediator
//!
//! # Incoming Flow
//! 1. The bridge calls `ReceiveTokens`
//! 2. Caller must be the bridge, and the sender it reports must be allowed for
//!    the source chain
//! 3. The remote token must match the registered pair
//! 4. Tokens are released from custody or minted to the recipient
//!
//! Both mediators of a pair must agree on modes: escrow on one side pairs with
//! mint/burn on the other, or escrow with escrow backed by custody.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
