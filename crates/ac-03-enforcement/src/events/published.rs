//! Published events (outgoing).

use serde::{Deserialize, Serialize};
use shared_types::{Address, StatusChangeReason, Timestamp};
use uuid::Uuid;

/// An enforcement call was processed against live state.
///
/// Emitted for no-op calls too (`action_taken: false`): keepers calling
/// speculatively still leave an audit trail.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ViolationEnforcedEvent {
    /// Correlates this event with the caller's returned outcome.
    pub audit_id: Uuid,
    pub qc: Address,
    pub reason: StatusChangeReason,
    pub caller: Address,
    /// Whether this call changed the custodian's status.
    pub action_taken: bool,
    pub enforced_at: Timestamp,
}
