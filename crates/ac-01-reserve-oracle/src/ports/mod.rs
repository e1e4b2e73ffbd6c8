//! Ports for the Reserve Consensus Oracle.

mod inbound;
mod outbound;

pub use inbound::*;
pub use outbound::*;
