//! Event bus adapter.
//!
//! Implements `OracleEventSink` over the shared audit bus.

use crate::events::{ConsensusUpdatedEvent, ReservesAttestedEvent};
use crate::ports::OracleEventSink;
use async_trait::async_trait;
use shared_bus::{ControlPlaneEvent, EventPublisher, InMemoryEventBus};
use std::sync::Arc;

/// Publishes oracle audit events to the shared bus.
pub struct SharedBusOracleEvents {
    bus: Arc<InMemoryEventBus>,
}

impl SharedBusOracleEvents {
    /// Create a new adapter with the given event bus.
    #[must_use]
    pub fn new(bus: Arc<InMemoryEventBus>) -> Self {
        Self { bus }
    }
}

#[async_trait]
impl OracleEventSink for SharedBusOracleEvents {
    async fn reserves_attested(&self, event: ReservesAttestedEvent) {
        self.bus
            .publish(ControlPlaneEvent::ReservesAttested {
                qc: event.qc,
                attester: event.attester,
                balance: event.balance,
                submitted_at: event.submitted_at,
            })
            .await;
    }

    async fn consensus_updated(&self, event: ConsensusUpdatedEvent) {
        self.bus
            .publish(ControlPlaneEvent::ConsensusUpdated {
                qc: event.qc,
                balance: event.balance,
                attester_count: event.attester_count,
                timestamp: event.timestamp,
                forced: event.forced,
            })
            .await;
    }
}
