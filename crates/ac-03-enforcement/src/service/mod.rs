//! Enforcement Service - core business logic.
//!
//! # Architecture
//! - "Recompute, don't trust": the caller names a condition, the service
//!   re-derives it from the oracle and the registry before anything is
//!   applied. A claim that fails re-derivation stops here.
//! - The consequence call into the registry is idempotent, so the window
//!   between re-derivation and application is harmless: racing keepers
//!   collapse into one transition and one status-change event.
//! - Every processed call publishes a `ViolationEnforced` audit event,
//!   no-ops included.

use crate::domain::{EnforcementConfig, EnforcementOutcome, EnforcementResult};
use crate::events::ViolationEnforcedEvent;
use crate::ports::{CustodianGateway, EnforcementApi, EnforcementEventSink};
use ac_02_qc_registry::{EscalationOutcome, ReserveOracleGateway, TransitionOutcome};
use async_trait::async_trait;
use shared_types::{
    Address, ObjectiveViolation, ReserveSnapshot, StatusChangeReason, TimeSource,
};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Dependencies for `EnforcementService`.
pub struct EnforcementDependencies<E, C, O> {
    pub events: Arc<E>,
    pub custodians: Arc<C>,
    pub reserves: Arc<O>,
    pub clock: Arc<dyn TimeSource>,
    pub config: EnforcementConfig,
}

/// Permissionless objective-violation enforcement engine.
pub struct EnforcementService<E, C, O>
where
    E: EnforcementEventSink,
    C: CustodianGateway,
    O: ReserveOracleGateway,
{
    events: Arc<E>,
    custodians: Arc<C>,
    reserves: Arc<O>,
    clock: Arc<dyn TimeSource>,
    config: EnforcementConfig,
}

impl<E, C, O> EnforcementService<E, C, O>
where
    E: EnforcementEventSink,
    C: CustodianGateway,
    O: ReserveOracleGateway,
{
    /// Create a new enforcement service.
    pub fn new(deps: EnforcementDependencies<E, C, O>) -> Self {
        Self {
            events: deps.events,
            custodians: deps.custodians,
            reserves: deps.reserves,
            clock: deps.clock,
            config: deps.config,
        }
    }

    /// Re-derive `violation` for `qc` from live state.
    ///
    /// The snapshot carries `consensus_updated_at` so that staleness is
    /// never derivable for a custodian whose attesters have not reached a
    /// first consensus; registration alone must not be enforceable.
    async fn derive_violation(
        &self,
        qc: Address,
        violation: ObjectiveViolation,
    ) -> EnforcementResult<bool> {
        let minted_amount = self.custodians.minted_amount(qc).await?;
        let reading = self.reserves.reserve_status(qc).await;

        let snapshot = ReserveSnapshot {
            consensus_balance: reading.balance,
            consensus_updated_at: reading.last_updated,
            is_stale: reading.is_stale,
            minted_amount,
        };
        Ok(violation.is_violated(&snapshot, self.config.min_collateral_ratio_percent))
    }
}

#[async_trait]
impl<E, C, O> EnforcementApi for EnforcementService<E, C, O>
where
    E: EnforcementEventSink,
    C: CustodianGateway,
    O: ReserveOracleGateway,
{
    async fn enforce_objective_violation(
        &self,
        qc: Address,
        reason: StatusChangeReason,
        caller: Address,
    ) -> EnforcementResult<EnforcementOutcome> {
        // Subjective reasons never reach state.
        let violation = ObjectiveViolation::try_from(reason)?;

        let audit_id = Uuid::new_v4();
        let outcome = if self.derive_violation(qc, violation).await? {
            match self
                .custodians
                .apply_objective_violation(qc, violation, caller)
                .await?
            {
                TransitionOutcome::Applied {
                    old_status,
                    new_status,
                } => {
                    warn!(
                        %audit_id,
                        qc = ?qc,
                        violation = ?violation,
                        from = ?old_status,
                        to = ?new_status,
                        "[ac-03] ⚠️ violation enforced"
                    );
                    EnforcementOutcome::Enforced {
                        audit_id,
                        old_status,
                        new_status,
                    }
                }
                TransitionOutcome::AlreadyApplied { current } => {
                    info!(
                        %audit_id,
                        qc = ?qc,
                        violation = ?violation,
                        current = ?current,
                        "[ac-03] violation already enforced, no action"
                    );
                    EnforcementOutcome::AlreadyEnforced { audit_id, current }
                }
            }
        } else {
            info!(
                %audit_id,
                qc = ?qc,
                violation = ?violation,
                "[ac-03] claimed violation does not hold, no action"
            );
            EnforcementOutcome::NoViolation { audit_id }
        };

        self.events
            .violation_enforced(ViolationEnforcedEvent {
                audit_id,
                qc,
                reason,
                caller,
                action_taken: outcome.action_taken(),
                enforced_at: self.clock.now(),
            })
            .await;

        Ok(outcome)
    }

    async fn check_escalation(
        &self,
        qc: Address,
        caller: Address,
    ) -> EnforcementResult<EscalationOutcome> {
        let outcome = self.custodians.check_escalation(qc, caller).await?;
        if let EscalationOutcome::Escalated { deadline } = outcome {
            info!(qc = ?qc, deadline, "[ac-03] escalation check fired");
        }
        Ok(outcome)
    }
}
