//! Adapters implementing the enforcement engine's outbound ports.
//!
//! The reserve oracle adapter is `ac_02_qc_registry::OracleServiceGateway`,
//! shared with the registry.

mod event_bus;
mod registry_gateway;

pub use event_bus::SharedBusEnforcementEvents;
pub use registry_gateway::RegistryServiceGateway;
