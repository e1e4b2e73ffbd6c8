//! Driving ports (inbound API).

use crate::domain::{EnforcementOutcome, EnforcementResult};
use ac_02_qc_registry::EscalationOutcome;
use async_trait::async_trait;
use shared_types::{Address, StatusChangeReason};

/// Permissionless enforcement API. No capability is ever checked here;
/// correctness rests entirely on re-derivation.
#[async_trait]
pub trait EnforcementApi: Send + Sync {
    /// Claim that `qc` is in violation for `reason` and apply the
    /// consequence if the claim re-derives against live state.
    ///
    /// Subjective reasons are rejected outright. A claim that does not hold
    /// is the `NoViolation` no-op outcome; a claim that holds but whose
    /// consequence is already in place returns `AlreadyEnforced` without
    /// touching the custodian. Safe to call repeatedly, by anyone.
    async fn enforce_objective_violation(
        &self,
        qc: Address,
        reason: StatusChangeReason,
        caller: Address,
    ) -> EnforcementResult<EnforcementOutcome>;

    /// Permissionless deadline check for a paused custodian, forwarded to
    /// the lifecycle state machine. Kept on this surface so keepers have a
    /// single entry point for every watchdog duty.
    async fn check_escalation(
        &self,
        qc: Address,
        caller: Address,
    ) -> EnforcementResult<EscalationOutcome>;
}
