//! Consensus records and the BFT median.

use serde::{Deserialize, Serialize};
use shared_types::{Amount, Timestamp};

/// The last agreed reserve value for one custodian.
///
/// Replaced only by a new quorum-reaching computation or by the
/// arbiter-invoked forced path; never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusRecord {
    /// Median of the consumed attestation balances.
    pub balance: Amount,
    /// When this record was written.
    pub updated_at: Timestamp,
    /// How many attestations went into the median.
    pub attester_count: usize,
    /// Whether the arbiter forced this record below quorum.
    pub forced: bool,
}

impl ConsensusRecord {
    /// Staleness is derived, never stored: the record is stale once it is
    /// older than the freshness window at the observation instant.
    #[must_use]
    pub fn is_stale(&self, now: Timestamp, staleness_threshold_secs: u64) -> bool {
        now.saturating_sub(self.updated_at) > staleness_threshold_secs
    }
}

/// A pure read of one custodian's consensus state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveReading {
    /// Last consensus balance, 0 when consensus was never reached.
    pub balance: Amount,
    /// Timestamp of the last consensus, `None` when never reached.
    pub last_updated: Option<Timestamp>,
    /// Whether the value is too old to gate minting. A custodian with no
    /// consensus record reads as stale.
    pub is_stale: bool,
}

/// Outcome of a finalization attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinalizeOutcome {
    /// Quorum reached; a new consensus record was written.
    Finalized {
        balance: Amount,
        attester_count: usize,
    },
    /// Below quorum. A no-op, not an error: callers poll optimistically.
    QuorumNotReached { pending: usize, required: usize },
}

/// Median of a non-empty multiset of balances.
///
/// Sorts ascending and takes index `(len - 1) / 2`: the middle element for
/// odd counts, the LOWER-middle for even counts. The lower-middle convention
/// is deliberate and pinned by tests - consensus values must be reproducible
/// bit-for-bit across implementations, and rounding down is the conservative
/// direction for a reserve figure.
///
/// # Panics
///
/// Empty input is a caller bug; both call sites check before calling.
#[must_use]
pub fn median(mut balances: Vec<Amount>) -> Amount {
    assert!(!balances.is_empty(), "median of empty attestation set");
    balances.sort_unstable();
    balances[(balances.len() - 1) / 2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_odd_count_takes_middle() {
        assert_eq!(median(vec![100, 105, 102]), 102);
        assert_eq!(median(vec![7]), 7);
        assert_eq!(median(vec![5, 1, 9, 3, 7]), 5);
    }

    #[test]
    fn median_even_count_takes_lower_middle() {
        assert_eq!(median(vec![1, 2]), 1);
        assert_eq!(median(vec![10, 20, 30, 40]), 20);
    }

    #[test]
    fn one_byzantine_attester_cannot_leave_honest_range() {
        // Honest attesters say 100 and 102; the third is malicious.
        for malicious in [0, u64::MAX, 101] {
            let m = median(vec![100, 102, malicious]);
            assert!((100..=102).contains(&m), "median {m} escaped honest range");
        }
    }

    #[test]
    fn staleness_flips_exactly_at_threshold() {
        let record = ConsensusRecord {
            balance: 50,
            updated_at: 1_000,
            attester_count: 3,
            forced: false,
        };
        assert!(!record.is_stale(1_000, 100));
        assert!(!record.is_stale(1_100, 100)); // exactly at the boundary: fresh
        assert!(record.is_stale(1_101, 100));
    }

    #[test]
    fn staleness_tolerates_clock_before_record() {
        let record = ConsensusRecord {
            balance: 50,
            updated_at: 1_000,
            attester_count: 1,
            forced: true,
        };
        // An observer clock behind the record timestamp must not underflow.
        assert!(!record.is_stale(900, 100));
    }
}
