//! Attestation bookkeeping.
//!
//! Attestations are ephemeral: they live in the per-custodian pending set
//! until a consensus computation consumes them, then the set is cleared.
//! Only the last computed consensus value survives.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, Timestamp};
use std::collections::HashMap;

/// A single pending reserve claim from one attester.
///
/// Zero is a legal balance: a custodian honestly reporting total depletion
/// must be representable, and the zero-reserves violation depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    /// Identity of the submitting attester.
    pub attester: Address,
    /// Claimed reserve balance.
    pub balance: Amount,
    /// Submission time.
    pub submitted_at: Timestamp,
}

/// The pending attestation set for one custodian.
///
/// At most one entry per attester: a resubmission overwrites the previous
/// claim rather than duplicating it, since only each attester's latest
/// opinion matters.
#[derive(Clone, Debug, Default)]
pub struct PendingSet {
    entries: HashMap<Address, Attestation>,
}

impl PendingSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite this attester's pending claim.
    ///
    /// Returns the replaced attestation when the attester had one pending.
    pub fn submit(&mut self, attestation: Attestation) -> Option<Attestation> {
        self.entries.insert(attestation.attester, attestation)
    }

    /// Number of distinct attesters with a pending claim.
    #[must_use]
    pub fn distinct_attesters(&self) -> usize {
        self.entries.len()
    }

    /// All pending balances, in arbitrary order.
    #[must_use]
    pub fn balances(&self) -> Vec<Amount> {
        self.entries.values().map(|a| a.balance).collect()
    }

    /// Balances of attestations submitted within `window_secs` of `now`.
    ///
    /// Used by the forced-consensus path, which must not resurrect claims
    /// that have expired while quorum was unreachable.
    #[must_use]
    pub fn fresh_balances(&self, now: Timestamp, window_secs: u64) -> Vec<Amount> {
        self.entries
            .values()
            .filter(|a| now.saturating_sub(a.submitted_at) <= window_secs)
            .map(|a| a.balance)
            .collect()
    }

    /// Clear the set after a consensus computation consumed it.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
