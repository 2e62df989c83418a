//! Execute message handlers for the token mediator.
//!
//! - `config` - Admin setters (gas limit, remote mediator, token pairs)
//! - `send` - SendTokens / SendAndTransferTokens (escrow or burn, then relay)
//! - `receive` - ReceiveTokens bridge callback (release or mint)
//!
//! Bridge, allow-list and admin transfer handlers come from `common`.

mod config;
mod receive;
mod send;

pub use config::{
    execute_add_mediated_token, execute_set_remote_mediator, execute_set_request_gas_limit,
    save_remote_mediator, save_token_pair,
};
pub use receive::execute_receive_tokens;
pub use send::execute_send_tokens;
