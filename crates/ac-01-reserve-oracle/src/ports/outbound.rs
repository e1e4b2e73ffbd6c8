//! Driven ports (outbound dependencies).

use crate::events::{ConsensusUpdatedEvent, ReservesAttestedEvent};
use async_trait::async_trait;

/// Audit-event sink for the oracle.
///
/// Publishing is observation only: a failed or dropped publish must never
/// abort the state change it describes, so these methods are infallible from
/// the service's perspective.
#[async_trait]
pub trait OracleEventSink: Send + Sync {
    /// An attestation was accepted into the pending set.
    async fn reserves_attested(&self, event: ReservesAttestedEvent);

    /// A new consensus record was written.
    async fn consensus_updated(&self, event: ConsensusUpdatedEvent);
}
