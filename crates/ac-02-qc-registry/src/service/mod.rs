//! Registry Service - core business logic.
//!
//! # Architecture
//! - One write-lock critical section per mutation: every precondition is
//!   validated against the currently persisted record immediately before
//!   the write, so racing callers can never act on a stale view.
//! - External facts (oracle readings, proof verdicts, redemption
//!   obligations) are fetched before the critical section; they do not
//!   depend on registry state, so the ordering loses nothing.
//! - Events are published after the lock is released; the audit surface
//!   observes state changes, it never participates in them.

use crate::domain::{
    available_minting_capacity, transition_allowed, CustodianRecord, EscalationOutcome,
    LifecycleConfig, RegistryError, RegistryResult, ReviewDecision, TransitionOutcome,
    WalletRecord,
};
use crate::events::{
    CapacityIncreasedEvent, EscalationTriggeredEvent, QCRegisteredEvent, StatusChangedEvent,
    SupplyChangedEvent, WalletRegisteredEvent,
};
use crate::ports::{
    LifecycleApi, ProofOfControlOracle, RedemptionObligationCheck, RegistryApi,
    RegistryEventSink, ReserveOracleGateway, ReserveStatus,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{
    Address, Amount, CapabilityProvider, CustodianStatus, ObjectiveViolation, ReserveSnapshot,
    Role, StatusChangeReason, TimeSource, Timestamp, WalletId,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Dependencies for `RegistryService`.
pub struct RegistryDependencies<E, P, O, R> {
    pub events: Arc<E>,
    pub proof_oracle: Arc<P>,
    pub reserve_oracle: Arc<O>,
    pub redemption_check: Arc<R>,
    pub capabilities: Arc<dyn CapabilityProvider>,
    pub clock: Arc<dyn TimeSource>,
    pub config: LifecycleConfig,
}

/// Custodian registry and lifecycle state machine.
pub struct RegistryService<E, P, O, R>
where
    E: RegistryEventSink,
    P: ProofOfControlOracle,
    O: ReserveOracleGateway,
    R: RedemptionObligationCheck,
{
    events: Arc<E>,
    proof_oracle: Arc<P>,
    reserve_oracle: Arc<O>,
    redemption_check: Arc<R>,
    capabilities: Arc<dyn CapabilityProvider>,
    clock: Arc<dyn TimeSource>,
    config: LifecycleConfig,
    custodians: RwLock<HashMap<Address, CustodianRecord>>,
}

/// Apply one lifecycle edge to a record, under the caller's write lock.
///
/// Validates the edge against the graph, updates the status and the pause
/// bookkeeping, and returns the event describing the change. The record is
/// untouched when the edge is illegal.
fn transition(
    record: &mut CustodianRecord,
    to: CustodianStatus,
    reason: StatusChangeReason,
    caller: Address,
    now: Timestamp,
    config: &LifecycleConfig,
) -> RegistryResult<StatusChangedEvent> {
    let from = record.status;
    if !transition_allowed(from, to) {
        return Err(RegistryError::InvalidTransition {
            from,
            attempted: to,
        });
    }

    match to {
        CustodianStatus::Paused => {
            record.paused_at = Some(now);
            record.escalation_deadline = Some(now + config.escalation_timeout_secs);
            record.pause_reason = Some(reason);
        }
        CustodianStatus::MintingPaused => {
            record.pause_reason = Some(reason);
        }
        CustodianStatus::Active => {
            record.paused_at = None;
            record.escalation_deadline = None;
            record.pause_reason = None;
        }
        // UnderReview keeps the pause bookkeeping for the council's audit;
        // Revoked freezes whatever was there.
        CustodianStatus::UnderReview | CustodianStatus::Revoked => {}
    }

    record.status = to;
    Ok(StatusChangedEvent {
        qc: record.id,
        old_status: from,
        new_status: to,
        reason,
        caller,
        changed_at: now,
    })
}

impl<E, P, O, R> RegistryService<E, P, O, R>
where
    E: RegistryEventSink,
    P: ProofOfControlOracle,
    O: ReserveOracleGateway,
    R: RedemptionObligationCheck,
{
    /// Create a new registry service.
    pub fn new(deps: RegistryDependencies<E, P, O, R>) -> Self {
        Self {
            events: deps.events,
            proof_oracle: deps.proof_oracle,
            reserve_oracle: deps.reserve_oracle,
            redemption_check: deps.redemption_check,
            capabilities: deps.capabilities,
            clock: deps.clock,
            config: deps.config,
            custodians: RwLock::new(HashMap::new()),
        }
    }

    fn read_record(&self, qc: &Address) -> RegistryResult<CustodianRecord> {
        self.custodians
            .read()
            .get(qc)
            .cloned()
            .ok_or(RegistryError::UnknownCustodian(*qc))
    }

    /// Run `f` against the custodian's record under the write lock.
    fn with_record<T>(
        &self,
        qc: &Address,
        f: impl FnOnce(&mut CustodianRecord) -> RegistryResult<T>,
    ) -> RegistryResult<T> {
        let mut custodians = self.custodians.write();
        let record = custodians
            .get_mut(qc)
            .ok_or(RegistryError::UnknownCustodian(*qc))?;
        f(record)
    }

    fn require_role(&self, caller: &Address, role: Role) -> RegistryResult<()> {
        if self.capabilities.has_capability(caller, role) {
            return Ok(());
        }
        Err(match role {
            Role::EmergencyCouncil => RegistryError::NotCouncil(*caller),
            _ => RegistryError::NotRegistrar(*caller),
        })
    }

    /// Self-service operations accept the custodian itself, or a caller
    /// holding the governance capability acting on its behalf.
    fn require_self(&self, caller: Address, qc: Address) -> RegistryResult<()> {
        if caller == qc || self.capabilities.has_capability(&caller, Role::QcGovernance) {
            Ok(())
        } else {
            Err(RegistryError::NotCustodian { caller, qc })
        }
    }

    fn snapshot_from(reading: ReserveStatus, minted_amount: Amount) -> ReserveSnapshot {
        ReserveSnapshot {
            consensus_balance: reading.balance,
            consensus_updated_at: reading.last_updated,
            is_stale: reading.is_stale,
            minted_amount,
        }
    }
}

#[async_trait]
impl<E, P, O, R> RegistryApi for RegistryService<E, P, O, R>
where
    E: RegistryEventSink,
    P: ProofOfControlOracle,
    O: ReserveOracleGateway,
    R: RedemptionObligationCheck,
{
    async fn register_qc(
        &self,
        qc: Address,
        initial_capacity: Amount,
        caller: Address,
    ) -> RegistryResult<()> {
        self.require_role(&caller, Role::Registrar)?;
        if initial_capacity == 0 {
            return Err(RegistryError::ZeroInitialCapacity);
        }

        let now = self.clock.now();
        {
            let mut custodians = self.custodians.write();
            if custodians.contains_key(&qc) {
                return Err(RegistryError::AlreadyRegistered(qc));
            }
            custodians.insert(qc, CustodianRecord::new(qc, initial_capacity, now));
        }

        info!(qc = ?qc, capacity = initial_capacity, "[ac-02] custodian registered");
        self.events
            .qc_registered(QCRegisteredEvent {
                qc,
                minting_capacity: initial_capacity,
                registered_at: now,
            })
            .await;
        Ok(())
    }

    async fn increase_minting_capacity(
        &self,
        qc: Address,
        new_capacity: Amount,
        caller: Address,
    ) -> RegistryResult<()> {
        self.require_role(&caller, Role::Registrar)?;

        let event = self.with_record(&qc, |record| {
            if new_capacity <= record.minting_capacity {
                return Err(RegistryError::CapacityNotIncreased {
                    current: record.minting_capacity,
                    requested: new_capacity,
                });
            }
            let old_capacity = record.minting_capacity;
            record.minting_capacity = new_capacity;
            Ok(CapacityIncreasedEvent {
                qc,
                old_capacity,
                new_capacity,
            })
        })?;

        info!(qc = ?qc, old = event.old_capacity, new = event.new_capacity, "[ac-02] capacity increased");
        self.events.capacity_increased(event).await;
        Ok(())
    }

    async fn register_wallet(
        &self,
        qc: Address,
        wallet: WalletId,
        proof: &[u8],
    ) -> RegistryResult<()> {
        // The proof verdict is external and state-independent; fetch it
        // before the critical section.
        if !self.proof_oracle.verify(&wallet, proof).await {
            warn!(qc = ?qc, wallet = ?wallet, "[ac-02] proof of control rejected");
            return Err(RegistryError::ProofOfControlRejected { wallet });
        }

        let now = self.clock.now();
        self.with_record(&qc, |record| {
            if record.status.is_terminal() {
                return Err(RegistryError::CustodianRevoked(qc));
            }
            if record.wallets.contains_key(&wallet) {
                return Err(RegistryError::WalletAlreadyRegistered { qc, wallet });
            }
            record.wallets.insert(
                wallet,
                WalletRecord {
                    active: true,
                    registered_at: now,
                },
            );
            Ok(())
        })?;

        debug!(qc = ?qc, wallet = ?wallet, "[ac-02] wallet registered");
        self.events
            .wallet_registered(WalletRegisteredEvent { qc, wallet })
            .await;
        Ok(())
    }

    async fn deactivate_wallet(
        &self,
        qc: Address,
        wallet: WalletId,
        caller: Address,
    ) -> RegistryResult<()> {
        if caller != qc {
            self.require_role(&caller, Role::Registrar)?;
        }

        self.with_record(&qc, |record| {
            let entry = record
                .wallets
                .get_mut(&wallet)
                .ok_or(RegistryError::UnknownWallet { qc, wallet })?;
            entry.active = false;
            Ok(())
        })
    }

    async fn record_mint(&self, qc: Address, amount: Amount) -> RegistryResult<()> {
        let reading = self.reserve_oracle.reserve_status(qc).await;

        let event = self.with_record(&qc, |record| {
            if !record.status.allows_minting() {
                return Err(RegistryError::MintingNotAllowed {
                    status: record.status,
                });
            }
            if reading.is_stale {
                return Err(RegistryError::StaleReserves);
            }
            let available = available_minting_capacity(
                record.status,
                reading.is_stale,
                record.minting_capacity,
                reading.balance,
                record.minted_amount,
            );
            if amount > available {
                return Err(RegistryError::InsufficientCapacity {
                    available,
                    requested: amount,
                });
            }
            record.minted_amount += amount;
            Ok(SupplyChangedEvent {
                qc,
                amount,
                minted_total: record.minted_amount,
            })
        })?;

        info!(qc = ?qc, amount, total = event.minted_total, "[ac-02] mint recorded");
        self.events.mint_recorded(event).await;
        Ok(())
    }

    async fn record_redemption(&self, qc: Address, amount: Amount) -> RegistryResult<()> {
        let event = self.with_record(&qc, |record| {
            if !record.status.allows_redemption() {
                return Err(RegistryError::RedemptionNotAllowed {
                    status: record.status,
                });
            }
            if amount > record.minted_amount {
                return Err(RegistryError::RedemptionExceedsMinted {
                    minted: record.minted_amount,
                    requested: amount,
                });
            }
            record.minted_amount -= amount;
            Ok(SupplyChangedEvent {
                qc,
                amount,
                minted_total: record.minted_amount,
            })
        })?;

        info!(qc = ?qc, amount, total = event.minted_total, "[ac-02] redemption recorded");
        self.events.redemption_recorded(event).await;
        Ok(())
    }

    async fn available_minting_capacity(&self, qc: Address) -> RegistryResult<Amount> {
        let record = self.read_record(&qc)?;
        let reading = self.reserve_oracle.reserve_status(qc).await;
        Ok(available_minting_capacity(
            record.status,
            reading.is_stale,
            record.minting_capacity,
            reading.balance,
            record.minted_amount,
        ))
    }

    async fn custodian(&self, qc: Address) -> RegistryResult<CustodianRecord> {
        self.read_record(&qc)
    }
}

#[async_trait]
impl<E, P, O, R> LifecycleApi for RegistryService<E, P, O, R>
where
    E: RegistryEventSink,
    P: ProofOfControlOracle,
    O: ReserveOracleGateway,
    R: RedemptionObligationCheck,
{
    async fn self_pause_minting(&self, qc: Address, caller: Address) -> RegistryResult<()> {
        self.require_self(caller, qc)?;

        // External fact, state-independent: fetch before the lock.
        if self.redemption_check.has_overdue_redemptions(qc).await {
            return Err(RegistryError::OverdueRedemptions(qc));
        }

        let now = self.clock.now();
        let cooldown = self.config.self_pause_cooldown_secs;
        let event = self.with_record(&qc, |record| {
            record.replenish_self_pause_credit(now, cooldown);
            if record.status == CustodianStatus::Active && record.self_pause_credits == 0 {
                return Err(RegistryError::NoSelfPauseCredit {
                    next_grant_at: record.last_credit_grant_at + cooldown,
                });
            }
            let event = transition(
                record,
                CustodianStatus::MintingPaused,
                StatusChangeReason::SelfPause,
                caller,
                now,
                &self.config,
            )?;
            record.self_pause_credits -= 1;
            Ok(event)
        })?;

        info!(qc = ?qc, "[ac-02] custodian self-paused minting");
        self.events.status_changed(event).await;
        Ok(())
    }

    async fn resume_minting(&self, qc: Address, caller: Address) -> RegistryResult<()> {
        self.require_self(caller, qc)?;

        let reading = self.reserve_oracle.reserve_status(qc).await;
        let now = self.clock.now();
        let ratio = self.config.min_collateral_ratio_percent;

        let event = self.with_record(&qc, |record| {
            // An enforcement-initiated pause may only be acknowledged away
            // once the triggering violation no longer holds against live
            // reserves. Same predicate the enforcement engine uses.
            if let Some(reason) = record.pause_reason {
                if let Ok(violation) = ObjectiveViolation::try_from(reason) {
                    let snapshot = Self::snapshot_from(reading, record.minted_amount);
                    if violation.is_violated(&snapshot, ratio) {
                        return Err(RegistryError::ViolationStillActive(violation));
                    }
                }
            }
            transition(
                record,
                CustodianStatus::Active,
                StatusChangeReason::SelfResume,
                caller,
                now,
                &self.config,
            )
        })?;

        info!(qc = ?qc, "[ac-02] custodian resumed minting");
        self.events.status_changed(event).await;
        Ok(())
    }

    async fn pause(&self, qc: Address, caller: Address) -> RegistryResult<()> {
        self.require_self(caller, qc)?;

        let now = self.clock.now();
        let event = self.with_record(&qc, |record| {
            // A self-initiated full pause escalates an existing minting
            // pause. The direct Active → Paused edge belongs to enforcement
            // of severe violations; taking it here would skip the credit and
            // overdue-redemption gates that guard the minting pause.
            if record.status != CustodianStatus::MintingPaused {
                return Err(RegistryError::InvalidTransition {
                    from: record.status,
                    attempted: CustodianStatus::Paused,
                });
            }
            transition(
                record,
                CustodianStatus::Paused,
                StatusChangeReason::MaintenancePause,
                caller,
                now,
                &self.config,
            )
        })?;

        info!(qc = ?qc, "[ac-02] custodian entered maintenance pause");
        self.events.status_changed(event).await;
        Ok(())
    }

    async fn apply_objective_violation(
        &self,
        qc: Address,
        violation: ObjectiveViolation,
        caller: Address,
    ) -> RegistryResult<TransitionOutcome> {
        let target = violation.target_status();
        let now = self.clock.now();

        let (outcome, event) = self.with_record(&qc, |record| {
            // Severity ordering makes replays and races a comparison: a
            // custodian already at or past the consequence state needs no
            // second transition.
            if record.status >= target {
                return Ok((
                    TransitionOutcome::AlreadyApplied {
                        current: record.status,
                    },
                    None,
                ));
            }
            let event = transition(record, target, violation.into(), caller, now, &self.config)?;
            Ok((
                TransitionOutcome::Applied {
                    old_status: event.old_status,
                    new_status: event.new_status,
                },
                Some(event),
            ))
        })?;

        if let Some(event) = event {
            warn!(
                qc = ?qc,
                violation = ?violation,
                from = ?event.old_status,
                to = ?event.new_status,
                "[ac-02] ⚠️ violation consequence applied"
            );
            self.events.status_changed(event).await;
        }
        Ok(outcome)
    }

    async fn check_escalation(
        &self,
        qc: Address,
        caller: Address,
    ) -> RegistryResult<EscalationOutcome> {
        let now = self.clock.now();

        let (outcome, events) = self.with_record(&qc, |record| {
            if record.status != CustodianStatus::Paused {
                return Ok((EscalationOutcome::NotDue { deadline: None }, None));
            }
            let Some(deadline) = record.escalation_deadline else {
                return Ok((EscalationOutcome::NotDue { deadline: None }, None));
            };
            if now <= deadline {
                return Ok((
                    EscalationOutcome::NotDue {
                        deadline: Some(deadline),
                    },
                    None,
                ));
            }
            let status_event = transition(
                record,
                CustodianStatus::UnderReview,
                StatusChangeReason::EscalationTimeout,
                caller,
                now,
                &self.config,
            )?;
            let escalation_event = EscalationTriggeredEvent {
                qc,
                from_status: status_event.old_status,
                to_status: status_event.new_status,
                deadline,
                triggered_at: now,
            };
            Ok((
                EscalationOutcome::Escalated { deadline },
                Some((status_event, escalation_event)),
            ))
        })?;

        if let Some((status_event, escalation_event)) = events {
            warn!(qc = ?qc, "[ac-02] ⏰ pause deadline passed, escalated to review");
            self.events.escalation_triggered(escalation_event).await;
            self.events.status_changed(status_event).await;
        }
        Ok(outcome)
    }

    async fn resolve_review(
        &self,
        qc: Address,
        decision: ReviewDecision,
        caller: Address,
    ) -> RegistryResult<()> {
        self.require_role(&caller, Role::EmergencyCouncil)?;

        let now = self.clock.now();
        let (target, reason) = match decision {
            ReviewDecision::Reinstate => (
                CustodianStatus::Active,
                StatusChangeReason::CouncilReinstatement,
            ),
            ReviewDecision::Revoke => (
                CustodianStatus::Revoked,
                StatusChangeReason::CouncilRevocation,
            ),
        };

        let event = self.with_record(&qc, |record| {
            transition(record, target, reason, caller, now, &self.config)
        })?;

        info!(qc = ?qc, decision = ?decision, "[ac-02] review resolved");
        self.events.status_changed(event).await;
        Ok(())
    }
}
