//! # Objective-Violation Predicates
//!
//! The single, authoritative implementation of the "recompute, don't trust"
//! checks used by the enforcement engine and by the resume path of the
//! lifecycle state machine.
//!
//! ## Design Rationale
//!
//! If each subsystem carried its own copy of the collateral-ratio comparison,
//! the enforcement engine and the resume acknowledgment could disagree about
//! whether a violation is live, letting a custodian resume while a bot can
//! still pause it (or vice versa). Centralizing the predicate here makes
//! divergence structurally impossible: both sides call the SAME function over
//! a freshly built [`ReserveSnapshot`].

use crate::entities::{Amount, CustodianStatus, StatusChangeReason, Timestamp};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default reserve/minted ratio (percent) required to avoid an
/// insufficient-reserves violation.
pub const DEFAULT_MIN_COLLATERAL_RATIO_PERCENT: u64 = 100;

/// A point-in-time view of one custodian's reserves and liabilities,
/// assembled from live oracle and registry state immediately before a
/// violation check. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveSnapshot {
    /// Last agreed consensus reserve balance (0 when none exists yet).
    pub consensus_balance: Amount,
    /// When consensus was last updated; `None` when never reached.
    pub consensus_updated_at: Option<Timestamp>,
    /// Oracle's staleness verdict for the consensus value.
    pub is_stale: bool,
    /// Currently outstanding minted value backed by this custodian.
    pub minted_amount: Amount,
}

/// The closed set of permissionlessly enforceable violations.
///
/// Matched exhaustively everywhere: adding a variant forces every consumer
/// (condition derivation, consequence mapping, event rendering) to handle it
/// at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectiveViolation {
    /// `consensus_balance * 100 < minted_amount * min_collateral_ratio`.
    InsufficientReserves,
    /// Consensus exists but is older than the freshness window.
    StaleAttestations,
    /// Reserves attested at exactly zero with minted supply outstanding.
    /// Strictly implied by `InsufficientReserves` (for any positive ratio)
    /// but kept as a distinct code for clearer audit trails.
    ZeroReservesWithMintedTokens,
}

/// Error produced when a status-change reason is handed to the enforcement
/// engine but is not an objective violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("reason {0:?} is not an objective violation")]
pub struct NotObjectiveViolation(pub StatusChangeReason);

impl TryFrom<StatusChangeReason> for ObjectiveViolation {
    type Error = NotObjectiveViolation;

    fn try_from(reason: StatusChangeReason) -> Result<Self, Self::Error> {
        match reason {
            StatusChangeReason::InsufficientReserves => Ok(Self::InsufficientReserves),
            StatusChangeReason::StaleAttestations => Ok(Self::StaleAttestations),
            StatusChangeReason::ZeroReservesWithMintedTokens => {
                Ok(Self::ZeroReservesWithMintedTokens)
            }
            other => Err(NotObjectiveViolation(other)),
        }
    }
}

impl From<ObjectiveViolation> for StatusChangeReason {
    fn from(violation: ObjectiveViolation) -> Self {
        match violation {
            ObjectiveViolation::InsufficientReserves => Self::InsufficientReserves,
            ObjectiveViolation::StaleAttestations => Self::StaleAttestations,
            ObjectiveViolation::ZeroReservesWithMintedTokens => {
                Self::ZeroReservesWithMintedTokens
            }
        }
    }
}

impl ObjectiveViolation {
    /// Re-derive whether this violation currently holds.
    ///
    /// Percent-scaled integer comparison, widened to `u128` so the
    /// multiplication cannot overflow for any `u64` balance/ratio pair.
    ///
    /// `StaleAttestations` requires an existing consensus record: a custodian
    /// that has never reached consensus reads as stale for capacity purposes
    /// (its available capacity is zero anyway) but is not enforceable, so a
    /// freshly registered custodian cannot be paused before its attesters
    /// have had any chance to report.
    #[must_use]
    pub fn is_violated(
        &self,
        snapshot: &ReserveSnapshot,
        min_collateral_ratio_percent: u64,
    ) -> bool {
        match self {
            Self::InsufficientReserves => {
                u128::from(snapshot.consensus_balance) * 100
                    < u128::from(snapshot.minted_amount)
                        * u128::from(min_collateral_ratio_percent)
            }
            Self::StaleAttestations => snapshot.consensus_updated_at.is_some() && snapshot.is_stale,
            Self::ZeroReservesWithMintedTokens => {
                snapshot.consensus_balance == 0 && snapshot.minted_amount > 0
            }
        }
    }

    /// The deterministic consequence state for this violation.
    ///
    /// Reserve shortfalls and stale data halt minting; total depletion with
    /// supply outstanding is severe enough to warrant a full pause, which
    /// arms the review-escalation deadline.
    #[must_use]
    pub fn target_status(&self) -> CustodianStatus {
        match self {
            Self::InsufficientReserves | Self::StaleAttestations => {
                CustodianStatus::MintingPaused
            }
            Self::ZeroReservesWithMintedTokens => CustodianStatus::Paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(balance: Amount, minted: Amount) -> ReserveSnapshot {
        ReserveSnapshot {
            consensus_balance: balance,
            consensus_updated_at: Some(1_000),
            is_stale: false,
            minted_amount: minted,
        }
    }

    #[test]
    fn insufficient_reserves_at_100_percent_ratio() {
        let v = ObjectiveViolation::InsufficientReserves;
        assert!(!v.is_violated(&snapshot(100, 100), 100));
        assert!(!v.is_violated(&snapshot(101, 100), 100));
        assert!(v.is_violated(&snapshot(99, 100), 100));
    }

    #[test]
    fn insufficient_reserves_respects_configured_ratio() {
        let v = ObjectiveViolation::InsufficientReserves;
        // 150% ratio: 100 minted requires 150 reserves.
        assert!(v.is_violated(&snapshot(149, 100), 150));
        assert!(!v.is_violated(&snapshot(150, 100), 150));
    }

    #[test]
    fn ratio_arithmetic_does_not_overflow_at_u64_extremes() {
        let v = ObjectiveViolation::InsufficientReserves;
        let s = snapshot(u64::MAX, u64::MAX);
        // Equal balance and minted at 100%: not violated, and no overflow.
        assert!(!v.is_violated(&s, 100));
        assert!(v.is_violated(&s, u64::MAX));
    }

    #[test]
    fn stale_attestations_requires_existing_consensus() {
        let v = ObjectiveViolation::StaleAttestations;
        let never = ReserveSnapshot {
            consensus_balance: 0,
            consensus_updated_at: None,
            is_stale: true,
            minted_amount: 0,
        };
        assert!(!v.is_violated(&never, 100));

        let old = ReserveSnapshot {
            consensus_updated_at: Some(5),
            ..never
        };
        assert!(v.is_violated(&old, 100));
    }

    #[test]
    fn zero_reserves_needs_outstanding_supply() {
        let v = ObjectiveViolation::ZeroReservesWithMintedTokens;
        assert!(v.is_violated(&snapshot(0, 1), 100));
        assert!(!v.is_violated(&snapshot(0, 0), 100));
        assert!(!v.is_violated(&snapshot(1, 1), 100));
    }

    #[test]
    fn consequence_mapping_is_total() {
        assert_eq!(
            ObjectiveViolation::InsufficientReserves.target_status(),
            CustodianStatus::MintingPaused
        );
        assert_eq!(
            ObjectiveViolation::StaleAttestations.target_status(),
            CustodianStatus::MintingPaused
        );
        assert_eq!(
            ObjectiveViolation::ZeroReservesWithMintedTokens.target_status(),
            CustodianStatus::Paused
        );
    }

    #[test]
    fn administrative_reasons_are_rejected() {
        let err = ObjectiveViolation::try_from(StatusChangeReason::SelfPause).unwrap_err();
        assert_eq!(err, NotObjectiveViolation(StatusChangeReason::SelfPause));
        assert!(ObjectiveViolation::try_from(StatusChangeReason::StaleAttestations).is_ok());
    }
}
