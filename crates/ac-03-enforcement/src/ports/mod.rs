//! Ports for the enforcement subsystem.

mod inbound;
mod outbound;

pub use inbound::*;
pub use outbound::*;
