//! Driven ports (outbound dependencies).

use crate::events::{
    CapacityIncreasedEvent, EscalationTriggeredEvent, QCRegisteredEvent, StatusChangedEvent,
    SupplyChangedEvent, WalletRegisteredEvent,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, Timestamp, WalletId};

/// SPV-style proof-of-control verification, consumed during wallet
/// registration. The verification mechanics are an external concern; the
/// registry only consumes the boolean verdict.
#[async_trait]
pub trait ProofOfControlOracle: Send + Sync {
    /// Whether `proof` demonstrates control of `wallet`.
    async fn verify(&self, wallet: &WalletId, proof: &[u8]) -> bool;
}

/// The oracle's answer about one custodian's reserves, as the registry
/// consumes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveStatus {
    /// Last consensus balance (0 when consensus was never reached).
    pub balance: Amount,
    /// When consensus was last updated, `None` when never.
    pub last_updated: Option<Timestamp>,
    /// The oracle's staleness verdict.
    pub is_stale: bool,
}

/// Read access to the reserve consensus oracle.
#[async_trait]
pub trait ReserveOracleGateway: Send + Sync {
    /// Current consensus balance and staleness for `qc`.
    async fn reserve_status(&self, qc: Address) -> ReserveStatus;
}

/// Whether a custodian has redemption obligations past their grace window.
/// Redemption execution lives outside the control plane; this check is the
/// only part of it the lifecycle consults, to stop a custodian pausing out
/// from under its obligations.
#[async_trait]
pub trait RedemptionObligationCheck: Send + Sync {
    async fn has_overdue_redemptions(&self, qc: Address) -> bool;
}

/// Audit-event sink for the registry and lifecycle.
///
/// Observation only: publishing failures never abort the state change.
#[async_trait]
pub trait RegistryEventSink: Send + Sync {
    async fn qc_registered(&self, event: QCRegisteredEvent);
    async fn capacity_increased(&self, event: CapacityIncreasedEvent);
    async fn wallet_registered(&self, event: WalletRegisteredEvent);
    async fn mint_recorded(&self, event: SupplyChangedEvent);
    async fn redemption_recorded(&self, event: SupplyChangedEvent);
    async fn status_changed(&self, event: StatusChangedEvent);
    async fn escalation_triggered(&self, event: EscalationTriggeredEvent);
}
