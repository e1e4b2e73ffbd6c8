//! Oracle Service - core business logic.
//!
//! # Architecture
//! - Per-custodian pending sets, overwrite semantics per attester
//! - Median-at-quorum as the only normal consensus path
//! - Arbiter-forced path with an at-least-one-attestation floor
//! - Staleness derived lazily from the record timestamp, never stored

use crate::domain::{
    median, Attestation, ConsensusRecord, FinalizeOutcome, OracleConfig, OracleError,
    OracleResult, PendingSet, ReserveReading,
};
use crate::events::{ConsensusUpdatedEvent, ReservesAttestedEvent};
use crate::ports::{OracleEventSink, ReserveOracleApi};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Address, Amount, CapabilityProvider, Role, TimeSource};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Mutable oracle state: pending attestations and consensus records,
/// both keyed by custodian. Different custodians never contend on anything
/// beyond this single service lock.
#[derive(Default)]
struct OracleState {
    pending: HashMap<Address, PendingSet>,
    consensus: HashMap<Address, ConsensusRecord>,
}

/// Reserve Consensus Oracle service.
pub struct OracleService<E>
where
    E: OracleEventSink,
{
    events: Arc<E>,
    capabilities: Arc<dyn CapabilityProvider>,
    clock: Arc<dyn TimeSource>,
    config: OracleConfig,
    state: RwLock<OracleState>,
}

impl<E> OracleService<E>
where
    E: OracleEventSink,
{
    /// Create a new oracle service.
    pub fn new(
        events: Arc<E>,
        capabilities: Arc<dyn CapabilityProvider>,
        clock: Arc<dyn TimeSource>,
        config: OracleConfig,
    ) -> Self {
        Self {
            events,
            capabilities,
            clock,
            config,
            state: RwLock::new(OracleState::default()),
        }
    }

    /// Number of distinct pending attesters for `qc`. Test/inspection hook.
    #[must_use]
    pub fn pending_attesters(&self, qc: &Address) -> usize {
        self.state
            .read()
            .pending
            .get(qc)
            .map_or(0, PendingSet::distinct_attesters)
    }

    /// Write a consensus record and clear the pending set. Callers hold the
    /// write lock across the whole count → median → commit sequence, so a
    /// submission can never land between being counted and being cleared.
    fn commit_consensus(
        &self,
        state: &mut OracleState,
        qc: Address,
        balance: Amount,
        attester_count: usize,
        forced: bool,
    ) -> ConsensusRecord {
        let record = ConsensusRecord {
            balance,
            updated_at: self.clock.now(),
            attester_count,
            forced,
        };
        state.consensus.insert(qc, record);
        if let Some(pending) = state.pending.get_mut(&qc) {
            pending.clear();
        }
        record
    }
}

#[async_trait]
impl<E> ReserveOracleApi for OracleService<E>
where
    E: OracleEventSink,
{
    async fn submit_attestation(
        &self,
        qc: Address,
        balance: Amount,
        caller: Address,
    ) -> OracleResult<()> {
        if !self.capabilities.has_capability(&caller, Role::Attester) {
            warn!(qc = ?qc, caller = ?caller, "[ac-01] rejected attestation from non-attester");
            return Err(OracleError::NotAttester(caller));
        }

        let attestation = Attestation {
            attester: caller,
            balance,
            submitted_at: self.clock.now(),
        };

        let replaced = self
            .state
            .write()
            .pending
            .entry(qc)
            .or_default()
            .submit(attestation);

        debug!(
            qc = ?qc,
            attester = ?caller,
            balance,
            overwrote = replaced.is_some(),
            "[ac-01] attestation recorded"
        );

        self.events
            .reserves_attested(ReservesAttestedEvent {
                qc,
                attester: caller,
                balance,
                submitted_at: attestation.submitted_at,
            })
            .await;

        Ok(())
    }

    async fn try_finalize_consensus(&self, qc: Address) -> OracleResult<FinalizeOutcome> {
        // One critical section from quorum check to commit: a submission
        // racing this call is either counted into the median or still
        // pending afterwards, never silently discarded.
        let record = {
            let mut state = self.state.write();
            let balances = state.pending.get(&qc).map(PendingSet::balances).unwrap_or_default();
            if balances.len() < self.config.quorum_threshold {
                return Ok(FinalizeOutcome::QuorumNotReached {
                    pending: balances.len(),
                    required: self.config.quorum_threshold,
                });
            }
            let attester_count = balances.len();
            let consensus_balance = median(balances);
            self.commit_consensus(&mut state, qc, consensus_balance, attester_count, false)
        };

        let attester_count = record.attester_count;
        let consensus_balance = record.balance;

        info!(
            qc = ?qc,
            balance = consensus_balance,
            attester_count,
            "[ac-01] 📊 consensus finalized"
        );

        self.events
            .consensus_updated(ConsensusUpdatedEvent {
                qc,
                balance: record.balance,
                attester_count,
                timestamp: record.updated_at,
                forced: false,
            })
            .await;

        Ok(FinalizeOutcome::Finalized {
            balance: consensus_balance,
            attester_count,
        })
    }

    async fn force_consensus(&self, qc: Address, caller: Address) -> OracleResult<Amount> {
        if !self.capabilities.has_capability(&caller, Role::Arbiter) {
            warn!(qc = ?qc, caller = ?caller, "[ac-01] rejected force-consensus from non-arbiter");
            return Err(OracleError::NotArbiter(caller));
        }

        let now = self.clock.now();
        let record = {
            let mut state = self.state.write();
            let balances = state
                .pending
                .get(&qc)
                .map(|p| p.fresh_balances(now, self.config.attestation_window_secs))
                .unwrap_or_default();

            // The floor: an arbiter alone cannot fabricate a balance. At
            // least one independent attestation must back the forced value.
            if balances.is_empty() {
                return Err(OracleError::NoValidAttestations { qc });
            }

            let attester_count = balances.len();
            let consensus_balance = median(balances);
            self.commit_consensus(&mut state, qc, consensus_balance, attester_count, true)
        };

        let attester_count = record.attester_count;
        let consensus_balance = record.balance;

        warn!(
            qc = ?qc,
            balance = consensus_balance,
            attester_count,
            arbiter = ?caller,
            "[ac-01] ⚠️ consensus forced below quorum"
        );

        self.events
            .consensus_updated(ConsensusUpdatedEvent {
                qc,
                balance: record.balance,
                attester_count,
                timestamp: record.updated_at,
                forced: true,
            })
            .await;

        Ok(consensus_balance)
    }

    async fn reserve_reading(&self, qc: Address) -> ReserveReading {
        let now = self.clock.now();
        let record = self.state.read().consensus.get(&qc).copied();

        match record {
            Some(record) => ReserveReading {
                balance: record.balance,
                last_updated: Some(record.updated_at),
                is_stale: record.is_stale(now, self.config.staleness_threshold_secs),
            },
            // Never-attested custodians read as empty and stale, which gates
            // their available minting capacity to zero.
            None => ReserveReading {
                balance: 0,
                last_updated: None,
                is_stale: true,
            },
        }
    }
}
