//! Domain layer for the Reserve Consensus Oracle.
//!
//! Pure data and algorithms: attestation bookkeeping, median computation,
//! staleness derivation. No IO, no clocks, no locks.

mod attestation;
mod config;
mod consensus;
mod errors;

pub use attestation::*;
pub use config::*;
pub use consensus::*;
pub use errors::*;
