//! Driven ports (outbound dependencies).
//!
//! Reserve access reuses `ac_02_qc_registry::ReserveOracleGateway`; the
//! enforcement engine consumes reserves in the same shape the registry
//! does.

use crate::events::ViolationEnforcedEvent;
use ac_02_qc_registry::{EscalationOutcome, RegistryResult, TransitionOutcome};
use async_trait::async_trait;
use shared_types::{Address, Amount, ObjectiveViolation};

/// The registry facts and lifecycle operations enforcement needs.
#[async_trait]
pub trait CustodianGateway: Send + Sync {
    /// Outstanding minted value for `qc`. Fails for unknown custodians.
    async fn minted_amount(&self, qc: Address) -> RegistryResult<Amount>;

    /// Apply the consequence of a re-derived violation. Idempotent.
    async fn apply_objective_violation(
        &self,
        qc: Address,
        violation: ObjectiveViolation,
        caller: Address,
    ) -> RegistryResult<TransitionOutcome>;

    /// Escalate a paused custodian past its deadline, if due.
    async fn check_escalation(
        &self,
        qc: Address,
        caller: Address,
    ) -> RegistryResult<EscalationOutcome>;
}

/// Audit-event sink for enforcement outcomes.
#[async_trait]
pub trait EnforcementEventSink: Send + Sync {
    async fn violation_enforced(&self, event: ViolationEnforcedEvent);
}
