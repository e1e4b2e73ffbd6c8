//! Adapters implementing the registry's outbound ports.

mod event_bus;
mod oracle_gateway;
mod proof_oracle;
mod redemption_check;

pub use event_bus::SharedBusRegistryEvents;
pub use oracle_gateway::OracleServiceGateway;
pub use proof_oracle::StaticProofOracle;
pub use redemption_check::NoOverdueRedemptions;
