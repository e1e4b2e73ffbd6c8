//! # ac-01-reserve-oracle
//!
//! Reserve Consensus Oracle subsystem for Account-Control.
//!
//! ## Architecture
//!
//! Produces a manipulation-resistant, stale-data-resistant reserve balance
//! per custodian from attestations submitted by a rotating set of
//! independent attesters:
//!
//! ```text
//! attester A ──┐
//! attester B ──┼── pending set ──→ median at quorum ──→ ConsensusRecord
//! attester C ──┘     (per QC)                             (balance, ts)
//!                                                            │
//!                                              staleness derived lazily
//! ```
//!
//! ### Byzantine Fault Tolerance
//!
//! The median (not mean) of independently submitted balances bounds the
//! influence of any single faulty attester: with the default quorum of 3,
//! one Byzantine attester cannot move the consensus value outside the range
//! spanned by the two honest submissions.
//!
//! ### Forced Consensus
//!
//! An arbiter can force consensus from whatever non-expired attestations
//! exist, but never from zero: at least one independent data point is
//! required, so a single malicious arbiter cannot fabricate a balance out
//! of nothing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ac_01_reserve_oracle::{OracleConfig, OracleService, ReserveOracleApi};
//!
//! let oracle = OracleService::new(event_sink, capabilities, clock, OracleConfig::default());
//! oracle.submit_attestation(qc, 100_000, attester).await?;
//! let outcome = oracle.try_finalize_consensus(qc).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// Re-export main types
pub use adapters::SharedBusOracleEvents;
pub use domain::{
    Attestation, ConsensusRecord, FinalizeOutcome, OracleConfig, OracleError, OracleResult,
    ReserveReading,
};
pub use ports::{OracleEventSink, ReserveOracleApi};
pub use service::OracleService;
