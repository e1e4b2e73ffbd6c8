//! # ac-02-qc-registry
//!
//! Qualified Custodian registry and lifecycle state machine for
//! Account-Control.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: the authoritative record of every
//!   custodian's identity, wallets, minted amount, capacity, and lifecycle
//!   status. Records are never deleted; `Revoked` is terminal but the record
//!   persists for audit.
//! - **Sole Writer of Status**: every status mutation flows through the
//!   lifecycle operations of this crate; the enforcement engine and council
//!   tooling invoke those operations, they never touch the record directly.
//!
//! ## Lifecycle
//!
//! ```text
//!             self-pause / enforcement
//!   Active ──────────────────────────→ MintingPaused
//!     │  ▲                                │     │
//!     │  └── resume (explicit ack) ───────┘     │ self escalation
//!     │                                         ▼
//!     │         severe violation            Paused ──(48h deadline)──→ UnderReview
//!     └────────────────────────────────────────┘                          │
//!                                                        council ┌────────┴───────┐
//!                                                                ▼                ▼
//!                                                             Active           Revoked
//! ```
//!
//! Every transition is validated against the *currently persisted* status
//! inside one critical section; a stale view can never be the basis of a
//! state change.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ac_02_qc_registry::{LifecycleApi, RegistryApi, RegistryDependencies, RegistryService};
//!
//! let registry = RegistryService::new(deps);
//! registry.register_qc(qc, 1_000_000, registrar).await?;
//! registry.self_pause_minting(qc, qc).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// Re-export main types
pub use adapters::{
    NoOverdueRedemptions, OracleServiceGateway, SharedBusRegistryEvents, StaticProofOracle,
};
pub use domain::{
    available_minting_capacity, CustodianRecord, EscalationOutcome, LifecycleConfig,
    RegistryError, RegistryResult, ReviewDecision, TransitionOutcome, WalletRecord,
};
pub use ports::{
    LifecycleApi, ProofOfControlOracle, RedemptionObligationCheck, RegistryApi,
    RegistryEventSink, ReserveOracleGateway, ReserveStatus,
};
pub use service::{RegistryDependencies, RegistryService};
