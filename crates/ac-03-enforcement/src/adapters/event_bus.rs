//! Event bus adapter.
//!
//! Implements `EnforcementEventSink` over the shared audit bus.

use crate::events::ViolationEnforcedEvent;
use crate::ports::EnforcementEventSink;
use async_trait::async_trait;
use shared_bus::{ControlPlaneEvent, EventPublisher, InMemoryEventBus};
use std::sync::Arc;

/// Publishes enforcement audit events to the shared bus.
pub struct SharedBusEnforcementEvents {
    bus: Arc<InMemoryEventBus>,
}

impl SharedBusEnforcementEvents {
    /// Create a new adapter with the given event bus.
    #[must_use]
    pub fn new(bus: Arc<InMemoryEventBus>) -> Self {
        Self { bus }
    }
}

#[async_trait]
impl EnforcementEventSink for SharedBusEnforcementEvents {
    async fn violation_enforced(&self, event: ViolationEnforcedEvent) {
        self.bus
            .publish(ControlPlaneEvent::ViolationEnforced {
                audit_id: event.audit_id,
                qc: event.qc,
                reason: event.reason,
                caller: event.caller,
                action_taken: event.action_taken,
                enforced_at: event.enforced_at,
            })
            .await;
    }
}
