//! Adapters implementing the oracle's outbound ports.

mod event_bus;

pub use event_bus::SharedBusOracleEvents;
