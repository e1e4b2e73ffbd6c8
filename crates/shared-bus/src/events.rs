//! # Control-Plane Events
//!
//! All audit events that flow through the shared bus, one variant per
//! observable fact. Monitors subscribe by topic; every variant carries enough
//! context to be consumed without a follow-up query.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, CustodianStatus, StatusChangeReason, Timestamp, WalletId};
use uuid::Uuid;

/// All events that can be published to the event bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ControlPlaneEvent {
    // =========================================================================
    // SUBSYSTEM 1: RESERVE ORACLE
    // =========================================================================
    /// An attester submitted (or overwrote) a pending reserve claim.
    ReservesAttested {
        qc: Address,
        attester: Address,
        balance: Amount,
        submitted_at: Timestamp,
    },

    /// A new consensus reserve value was computed.
    /// `forced` distinguishes the arbiter path from the normal quorum path.
    ConsensusUpdated {
        qc: Address,
        balance: Amount,
        attester_count: usize,
        timestamp: Timestamp,
        forced: bool,
    },

    // =========================================================================
    // SUBSYSTEM 2: REGISTRY / LIFECYCLE
    // =========================================================================
    /// A new qualified custodian was registered.
    QCRegistered {
        qc: Address,
        minting_capacity: Amount,
        registered_at: Timestamp,
    },

    /// A custodian's minting capacity was raised (capacity only ever grows).
    MintingCapacityIncreased {
        qc: Address,
        old_capacity: Amount,
        new_capacity: Amount,
    },

    /// A Bitcoin wallet passed proof-of-control and was registered.
    WalletRegistered { qc: Address, wallet: WalletId },

    /// Outstanding minted value increased.
    MintRecorded {
        qc: Address,
        amount: Amount,
        minted_total: Amount,
    },

    /// A redemption was fulfilled and outstanding minted value decreased.
    RedemptionRecorded {
        qc: Address,
        amount: Amount,
        minted_total: Amount,
    },

    /// A custodian's lifecycle status changed. Emitted exactly once per
    /// effective transition; no-op enforcement calls do NOT produce this.
    QCStatusChanged {
        qc: Address,
        old_status: CustodianStatus,
        new_status: CustodianStatus,
        reason: StatusChangeReason,
        caller: Address,
        changed_at: Timestamp,
    },

    /// A paused custodian crossed its deadline and was escalated to review.
    EscalationTriggered {
        qc: Address,
        from_status: CustodianStatus,
        to_status: CustodianStatus,
        deadline: Timestamp,
        triggered_at: Timestamp,
    },

    // =========================================================================
    // SUBSYSTEM 3: ENFORCEMENT
    // =========================================================================
    /// An enforcement call was processed. Emitted for no-op calls too
    /// (`action_taken: false`), so speculative keeper calls stay observable
    /// even when they change nothing.
    ViolationEnforced {
        audit_id: Uuid,
        qc: Address,
        reason: StatusChangeReason,
        caller: Address,
        action_taken: bool,
        enforced_at: Timestamp,
    },
}

/// Topics for event filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTopic {
    /// Attestations and consensus updates.
    ReserveOracle,
    /// Registration, wallets, capacity, mint/redemption accounting.
    Registry,
    /// Lifecycle status changes and escalations.
    Lifecycle,
    /// Enforcement outcomes, including no-ops.
    Enforcement,
    /// Matches every event.
    All,
}

impl ControlPlaneEvent {
    /// Topic this event belongs to.
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::ReservesAttested { .. } | Self::ConsensusUpdated { .. } => {
                EventTopic::ReserveOracle
            }
            Self::QCRegistered { .. }
            | Self::MintingCapacityIncreased { .. }
            | Self::WalletRegistered { .. }
            | Self::MintRecorded { .. }
            | Self::RedemptionRecorded { .. } => EventTopic::Registry,
            Self::QCStatusChanged { .. } | Self::EscalationTriggered { .. } => {
                EventTopic::Lifecycle
            }
            Self::ViolationEnforced { .. } => EventTopic::Enforcement,
        }
    }

    /// The custodian this event concerns.
    #[must_use]
    pub fn qc(&self) -> Address {
        match self {
            Self::ReservesAttested { qc, .. }
            | Self::ConsensusUpdated { qc, .. }
            | Self::QCRegistered { qc, .. }
            | Self::MintingCapacityIncreased { qc, .. }
            | Self::WalletRegistered { qc, .. }
            | Self::MintRecorded { qc, .. }
            | Self::RedemptionRecorded { qc, .. }
            | Self::QCStatusChanged { qc, .. }
            | Self::EscalationTriggered { qc, .. }
            | Self::ViolationEnforced { qc, .. } => *qc,
        }
    }
}

/// Filter used when subscribing to events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Custodians to include. Empty means all custodians.
    pub custodians: Vec<Address>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            custodians: Vec::new(),
        }
    }

    /// Create a filter for events about specific custodians.
    #[must_use]
    pub fn custodians(custodians: Vec<Address>) -> Self {
        Self {
            topics: Vec::new(),
            custodians,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &ControlPlaneEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let custodian_match =
            self.custodians.is_empty() || self.custodians.contains(&event.qc());

        topic_match && custodian_match
    }
}
