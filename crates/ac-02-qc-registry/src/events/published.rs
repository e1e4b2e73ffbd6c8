//! Published events (outgoing).

use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, CustodianStatus, StatusChangeReason, Timestamp, WalletId};

/// A new custodian entered the registry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct QCRegisteredEvent {
    pub qc: Address,
    pub minting_capacity: Amount,
    pub registered_at: Timestamp,
}

/// A custodian's capacity ceiling was raised.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CapacityIncreasedEvent {
    pub qc: Address,
    pub old_capacity: Amount,
    pub new_capacity: Amount,
}

/// A wallet passed proof-of-control.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WalletRegisteredEvent {
    pub qc: Address,
    pub wallet: WalletId,
}

/// Outstanding minted value moved.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SupplyChangedEvent {
    pub qc: Address,
    pub amount: Amount,
    /// Outstanding total after the change.
    pub minted_total: Amount,
}

/// A lifecycle status transition took effect. Emitted exactly once per
/// effective transition; no-op checks produce nothing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StatusChangedEvent {
    pub qc: Address,
    pub old_status: CustodianStatus,
    pub new_status: CustodianStatus,
    pub reason: StatusChangeReason,
    pub caller: Address,
    pub changed_at: Timestamp,
}

/// A paused custodian crossed its deadline into review.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EscalationTriggeredEvent {
    pub qc: Address,
    pub from_status: CustodianStatus,
    pub to_status: CustodianStatus,
    pub deadline: Timestamp,
    pub triggered_at: Timestamp,
}
