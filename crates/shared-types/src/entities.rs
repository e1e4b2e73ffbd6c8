//! # Cross-Subsystem Entities
//!
//! Core identifiers and the custodian lifecycle vocabulary shared by every
//! subsystem.
//!
//! ## Type Decisions
//!
//! - `Amount` is `u64` in satoshi scale. 2^64 satoshis is ~9 orders of
//!   magnitude above the total Bitcoin supply, so no wider integer is needed
//!   for balances; ratio arithmetic widens to `u128` before multiplying.
//! - `Address` is a 20-byte account key, `WalletId` a 32-byte Bitcoin wallet
//!   identifier (script-hash sized). Both are plain arrays so they stay
//!   `Copy` and hashable without allocation.

use serde::{Deserialize, Serialize};

/// Account-equivalent key identifying custodians, attesters, and callers.
pub type Address = [u8; 20];

/// Identifier of a registered Bitcoin wallet (script-hash sized).
pub type WalletId = [u8; 32];

/// Balance or minted value in satoshi scale.
pub type Amount = u64;

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// Lifecycle status of a qualified custodian.
///
/// Declaration order is severity order: every enforcement consequence moves a
/// custodian "rightwards" and never back, so `Ord` is derived and used to
/// decide whether a consequence has already been applied.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CustodianStatus {
    /// Normal operation: may mint and fulfill redemptions.
    Active,
    /// Minting halted; outstanding redemptions must still be fulfilled.
    MintingPaused,
    /// Full maintenance pause: no minting, no redemption fulfillment.
    /// Entering this state arms the review-escalation deadline.
    Paused,
    /// Mandatory manual review; redemption fulfillment allowed so holders
    /// are not trapped while the council investigates.
    UnderReview,
    /// Terminal. The record persists for audit but permits nothing.
    Revoked,
}

impl CustodianStatus {
    /// Whether new mints are permitted in this status.
    #[must_use]
    pub fn allows_minting(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Whether redemption fulfillment is permitted in this status.
    #[must_use]
    pub fn allows_redemption(&self) -> bool {
        matches!(self, Self::Active | Self::MintingPaused | Self::UnderReview)
    }

    /// Whether this status has no outgoing transitions.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Revoked)
    }
}

/// Machine-readable reason accompanying a custodian status change.
///
/// Objective codes are fully computable from on-ledger state and may be
/// enforced permissionlessly; administrative codes record who decided what.
/// The split is checked at the enforcement boundary via
/// [`crate::violations::ObjectiveViolation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusChangeReason {
    /// Consensus reserves no longer cover minted supply at the required ratio.
    InsufficientReserves,
    /// The consensus reserve value is older than the freshness window.
    StaleAttestations,
    /// Reserves attested at exactly zero while minted supply is outstanding.
    ZeroReservesWithMintedTokens,
    /// Custodian spent a self-pause credit.
    SelfPause,
    /// Custodian acknowledged and resumed from a minting pause.
    SelfResume,
    /// Custodian escalated itself to a full maintenance pause.
    MaintenancePause,
    /// The 48-hour pause deadline passed without resolution.
    EscalationTimeout,
    /// Emergency council reinstated the custodian after review.
    CouncilReinstatement,
    /// Emergency council revoked the custodian after review.
    CouncilRevocation,
}

impl StatusChangeReason {
    /// True for reasons whose truth value is computable from ledger state
    /// alone (and therefore permissionlessly enforceable).
    #[must_use]
    pub fn is_objective(&self) -> bool {
        matches!(
            self,
            Self::InsufficientReserves
                | Self::StaleAttestations
                | Self::ZeroReservesWithMintedTokens
        )
    }
}
