//! Ports for the registry and lifecycle subsystem.

mod inbound;
mod outbound;

pub use inbound::*;
pub use outbound::*;
