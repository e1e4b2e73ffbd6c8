//! Event bus adapter.
//!
//! Implements `RegistryEventSink` over the shared audit bus.

use crate::events::{
    CapacityIncreasedEvent, EscalationTriggeredEvent, QCRegisteredEvent, StatusChangedEvent,
    SupplyChangedEvent, WalletRegisteredEvent,
};
use crate::ports::RegistryEventSink;
use async_trait::async_trait;
use shared_bus::{ControlPlaneEvent, EventPublisher, InMemoryEventBus};
use std::sync::Arc;

/// Publishes registry and lifecycle audit events to the shared bus.
pub struct SharedBusRegistryEvents {
    bus: Arc<InMemoryEventBus>,
}

impl SharedBusRegistryEvents {
    /// Create a new adapter with the given event bus.
    #[must_use]
    pub fn new(bus: Arc<InMemoryEventBus>) -> Self {
        Self { bus }
    }
}

#[async_trait]
impl RegistryEventSink for SharedBusRegistryEvents {
    async fn qc_registered(&self, event: QCRegisteredEvent) {
        self.bus
            .publish(ControlPlaneEvent::QCRegistered {
                qc: event.qc,
                minting_capacity: event.minting_capacity,
                registered_at: event.registered_at,
            })
            .await;
    }

    async fn capacity_increased(&self, event: CapacityIncreasedEvent) {
        self.bus
            .publish(ControlPlaneEvent::MintingCapacityIncreased {
                qc: event.qc,
                old_capacity: event.old_capacity,
                new_capacity: event.new_capacity,
            })
            .await;
    }

    async fn wallet_registered(&self, event: WalletRegisteredEvent) {
        self.bus
            .publish(ControlPlaneEvent::WalletRegistered {
                qc: event.qc,
                wallet: event.wallet,
            })
            .await;
    }

    async fn mint_recorded(&self, event: SupplyChangedEvent) {
        self.bus
            .publish(ControlPlaneEvent::MintRecorded {
                qc: event.qc,
                amount: event.amount,
                minted_total: event.minted_total,
            })
            .await;
    }

    async fn redemption_recorded(&self, event: SupplyChangedEvent) {
        self.bus
            .publish(ControlPlaneEvent::RedemptionRecorded {
                qc: event.qc,
                amount: event.amount,
                minted_total: event.minted_total,
            })
            .await;
    }

    async fn status_changed(&self, event: StatusChangedEvent) {
        self.bus
            .publish(ControlPlaneEvent::QCStatusChanged {
                qc: event.qc,
                old_status: event.old_status,
                new_status: event.new_status,
                reason: event.reason,
                caller: event.caller,
                changed_at: event.changed_at,
            })
            .await;
    }

    async fn escalation_triggered(&self, event: EscalationTriggeredEvent) {
        self.bus
            .publish(ControlPlaneEvent::EscalationTriggered {
                qc: event.qc,
                from_status: event.from_status,
                to_status: event.to_status,
                deadline: event.deadline,
                triggered_at: event.triggered_at,
            })
            .await;
    }
}
