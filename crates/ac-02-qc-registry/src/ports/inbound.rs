//! Driving ports (inbound API).

use crate::domain::{
    CustodianRecord, EscalationOutcome, RegistryResult, ReviewDecision, TransitionOutcome,
};
use async_trait::async_trait;
use shared_types::{Address, Amount, ObjectiveViolation, WalletId};

/// Data-plane API: identity, wallets, capacity, supply accounting.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// Register a new custodian. Registrar-only; fails on duplicate id or
    /// zero initial capacity. The record starts `Active`.
    async fn register_qc(
        &self,
        qc: Address,
        initial_capacity: Amount,
        caller: Address,
    ) -> RegistryResult<()>;

    /// Raise the custodian's capacity ceiling. Registrar-only; the new
    /// value must strictly exceed the current one - capacity never shrinks,
    /// so in-flight mints can never be stranded by a silent reduction.
    async fn increase_minting_capacity(
        &self,
        qc: Address,
        new_capacity: Amount,
        caller: Address,
    ) -> RegistryResult<()>;

    /// Register a Bitcoin wallet after proof-of-control verification.
    /// The wallet starts active; duplicate ids are rejected.
    async fn register_wallet(
        &self,
        qc: Address,
        wallet: WalletId,
        proof: &[u8],
    ) -> RegistryResult<()>;

    /// Deactivate a wallet. Wallets are never removed. Callable by the
    /// custodian itself or a registrar.
    async fn deactivate_wallet(
        &self,
        qc: Address,
        wallet: WalletId,
        caller: Address,
    ) -> RegistryResult<()>;

    /// Report a completed mint. Fails when the status forbids minting, the
    /// reserves are stale, or the amount exceeds available capacity.
    async fn record_mint(&self, qc: Address, amount: Amount) -> RegistryResult<()>;

    /// Report a fulfilled redemption. Fails when the status forbids
    /// fulfillment or the amount exceeds outstanding minted value.
    async fn record_redemption(&self, qc: Address, amount: Amount) -> RegistryResult<()>;

    /// The single gating computation for new mints:
    /// `max(0, min(capacity, consensus) - minted)` when Active and fresh,
    /// else 0.
    async fn available_minting_capacity(&self, qc: Address) -> RegistryResult<Amount>;

    /// Snapshot of the full custodian record, for auditors and tests.
    async fn custodian(&self, qc: Address) -> RegistryResult<CustodianRecord>;
}

/// Lifecycle API: the only writers of custodian status.
#[async_trait]
pub trait LifecycleApi: Send + Sync {
    /// Custodian-initiated minting pause, consuming one self-pause credit.
    /// Blocked while redemption obligations are overdue.
    async fn self_pause_minting(&self, qc: Address, caller: Address) -> RegistryResult<()>;

    /// Explicit custodian acknowledgment ending a minting pause. When the
    /// pause was enforcement-initiated, the triggering violation must
    /// re-derive as cleared against live reserves. Never automatic.
    async fn resume_minting(&self, qc: Address, caller: Address) -> RegistryResult<()>;

    /// Custodian-initiated full maintenance pause. Arms the escalation
    /// deadline.
    async fn pause(&self, qc: Address, caller: Address) -> RegistryResult<()>;

    /// Apply the deterministic consequence of an objective violation.
    /// Idempotent: a custodian already at or past the target status yields
    /// `AlreadyApplied` and no event. Intended caller is the enforcement
    /// engine, which re-derives the condition immediately beforehand.
    async fn apply_objective_violation(
        &self,
        qc: Address,
        violation: ObjectiveViolation,
        caller: Address,
    ) -> RegistryResult<TransitionOutcome>;

    /// Permissionless timer check: a custodian paused past its deadline
    /// moves to `UnderReview`, exactly once.
    async fn check_escalation(
        &self,
        qc: Address,
        caller: Address,
    ) -> RegistryResult<EscalationOutcome>;

    /// Council-only terminal decision for a custodian under review.
    async fn resolve_review(
        &self,
        qc: Address,
        decision: ReviewDecision,
        caller: Address,
    ) -> RegistryResult<()>;
}
