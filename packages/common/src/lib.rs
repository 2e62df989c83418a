//! Common - Mediator Base and Shared Types for the AMB Mediator Contracts
//!
//! This package provides the pieces both mediator contracts are built on:
//! - `mediator` - bridge address, per-chain sender allow-list and the callback guard
//! - `admin` - single-admin guard and two-step admin transfer
//! - `amb` - the narrow Arbitrary Message Bridge interface the contracts consume
//! - `ids` - 32-byte chain and message identifiers
//! - `interface` - ERC-165 style capability ids computed from entry-point signatures

pub mod admin;
pub mod amb;
pub mod error;
pub mod hash;
pub mod ids;
pub mod interface;
pub mod mediator;
pub mod msg;

pub use error::MediatorError;
pub use ids::ChainId;
pub use mediator::{require_valid_caller, BridgeMessage};
