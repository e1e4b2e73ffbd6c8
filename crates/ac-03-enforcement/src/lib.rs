//! # ac-03-enforcement
//!
//! Permissionless objective-violation enforcement engine for
//! Account-Control.
//!
//! ## Role in System
//!
//! Anyone may call `enforce` against any custodian. The engine never trusts
//! the caller's claim: it re-derives the named violation from the live
//! reserve consensus and the custodian's outstanding minted value, and only
//! a condition that still holds reaches the lifecycle state machine. The
//! caller contributes nothing but the trigger; the verdict is computed
//! in-process from authoritative state.
//!
//! ## Enforcement Flow
//!
//! ```text
//!   caller claim ──→ objective? ──→ re-derive against ──→ apply consequence
//!   (reason)          (reject        oracle + registry      (idempotent)
//!                      subjective)   (no-op if absent)           │
//!                                                                ▼
//!                                                    ViolationEnforced event
//!                                                    (audit id, action_taken)
//! ```
//!
//! Only the three objective conditions are enforceable; every subjective
//! reason is rejected before any state is read. A claim that does not hold
//! is a no-op outcome, not an error, so keepers poll without penalty. The
//! consequence call into the registry is idempotent, so racing keepers
//! cannot double-apply.

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// Re-export main types
pub use adapters::{RegistryServiceGateway, SharedBusEnforcementEvents};
pub use domain::{EnforcementConfig, EnforcementError, EnforcementOutcome, EnforcementResult};
pub use ports::{CustodianGateway, EnforcementApi, EnforcementEventSink};
pub use service::{EnforcementDependencies, EnforcementService};

// The enforcement engine consumes reserves in the exact shape the registry
// does; the port and its oracle adapter are shared rather than redefined.
pub use ac_02_qc_registry::{OracleServiceGateway, ReserveOracleGateway, ReserveStatus};
