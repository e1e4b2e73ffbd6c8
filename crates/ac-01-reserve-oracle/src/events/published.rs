//! Published events (outgoing).

use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, Timestamp};

/// Published after every accepted attestation submission, including
/// overwrites of a previous pending claim.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ReservesAttestedEvent {
    pub qc: Address,
    pub attester: Address,
    pub balance: Amount,
    pub submitted_at: Timestamp,
}

/// Published whenever a new consensus record is written, on both the
/// quorum path and the arbiter-forced path.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ConsensusUpdatedEvent {
    pub qc: Address,
    pub balance: Amount,
    pub attester_count: usize,
    pub timestamp: Timestamp,
    /// True when the arbiter forced this record below quorum.
    pub forced: bool,
}
