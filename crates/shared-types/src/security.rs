//! # Centralized Capability Model
//!
//! The single, authoritative role/capability check consumed at every
//! authority-gated operation across the subsystems.
//!
//! ## Design Rationale
//!
//! Each subsystem gates a different set of operations (attestation
//! submission, forced consensus, custodian registration, council decisions),
//! but they all ask the same question: does this caller currently hold role
//! R? Centralizing the check means:
//! 1. All subsystems apply the SAME authorization policy
//! 2. Swapping the concrete backing (ACL, multisig, token-weighted) touches
//!    one trait implementation
//! 3. Authorization failures are uniformly distinguishable from
//!    business-rule failures

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::entities::Address;

/// Roles recognized by the control plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// May submit reserve-balance attestations.
    Attester,
    /// May force consensus when quorum cannot be reached.
    Arbiter,
    /// May register custodians and raise minting capacity.
    Registrar,
    /// May act on behalf of custodian governance.
    QcGovernance,
    /// May resolve custodians under review (reinstate or revoke).
    EmergencyCouncil,
}

/// Capability check consumed at every authority-gated operation.
///
/// The concrete backing (ACL, multisig, token-weighted voting) is out of
/// scope for the core; the core only ever asks this boolean question at
/// execution time, never caching the answer across operations, so role
/// rotation takes effect on the next call.
pub trait CapabilityProvider: Send + Sync {
    /// Whether `caller` currently holds `role`.
    fn has_capability(&self, caller: &Address, role: Role) -> bool;
}

/// In-memory role table. The default adapter for single-node runtimes and
/// the test suites.
#[derive(Default)]
pub struct StaticCapabilityProvider {
    grants: RwLock<HashMap<Role, HashSet<Address>>>,
}

impl StaticCapabilityProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant `role` to `holder`. Idempotent.
    pub fn grant(&self, holder: Address, role: Role) {
        self.grants.write().entry(role).or_default().insert(holder);
    }

    /// Remove `role` from `holder`. Unknown grants are ignored.
    pub fn revoke(&self, holder: &Address, role: Role) {
        if let Some(holders) = self.grants.write().get_mut(&role) {
            holders.remove(holder);
        }
    }

    /// Number of holders of `role`.
    #[must_use]
    pub fn holder_count(&self, role: Role) -> usize {
        self.grants.read().get(&role).map_or(0, HashSet::len)
    }
}

impl CapabilityProvider for StaticCapabilityProvider {
    fn has_capability(&self, caller: &Address, role: Role) -> bool {
        self.grants
            .read()
            .get(&role)
            .is_some_and(|holders| holders.contains(caller))
    }
}
