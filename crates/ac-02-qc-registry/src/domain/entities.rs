//! # Domain Entities for the Custodian Registry
//!
//! ## Type Decisions
//!
//! - `minted_amount` / `minting_capacity` are `Amount` (`u64`, satoshi
//!   scale); capacity only ever grows, so headroom arithmetic never
//!   underflows through normal operation.
//! - Wallets are never removed, only deactivated: the set is an audit trail
//!   of every wallet that ever passed proof-of-control.

use serde::{Deserialize, Serialize};
use shared_types::{
    Address, Amount, CustodianStatus, StatusChangeReason, Timestamp, WalletId,
    DEFAULT_MIN_COLLATERAL_RATIO_PERCENT,
};
use std::collections::HashMap;

/// A registered Bitcoin wallet under a custodian's control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRecord {
    /// Active wallets back reserves; deactivated ones remain for audit.
    pub active: bool,
    /// When proof-of-control was verified.
    pub registered_at: Timestamp,
}

/// The authoritative record of one qualified custodian.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodianRecord {
    /// Unique identity.
    pub id: Address,
    /// Current lifecycle status. Mutated only by lifecycle operations.
    pub status: CustodianStatus,
    /// Currently outstanding minted value backed by this custodian.
    pub minted_amount: Amount,
    /// Custodian-specific ceiling on `minted_amount`. Only ever increases.
    pub minting_capacity: Amount,
    /// Every wallet that ever passed proof-of-control, by id.
    pub wallets: HashMap<WalletId, WalletRecord>,
    /// Self-pause credits (0 or 1).
    pub self_pause_credits: u8,
    /// When a credit was last granted; replenishment is measured from here.
    pub last_credit_grant_at: Timestamp,
    /// When the custodian entered `Paused`, if it is there now.
    pub paused_at: Option<Timestamp>,
    /// Deadline after which a `Paused` custodian escalates to review.
    pub escalation_deadline: Option<Timestamp>,
    /// Why the custodian left `Active`, while it is away. Drives whether a
    /// resume acknowledgment must re-check the triggering violation.
    pub pause_reason: Option<StatusChangeReason>,
    /// Registration time.
    pub registered_at: Timestamp,
}

impl CustodianRecord {
    /// Create a freshly registered custodian: active, with one self-pause
    /// credit whose cooldown is measured from registration.
    #[must_use]
    pub fn new(id: Address, minting_capacity: Amount, now: Timestamp) -> Self {
        Self {
            id,
            status: CustodianStatus::Active,
            minted_amount: 0,
            minting_capacity,
            wallets: HashMap::new(),
            self_pause_credits: 1,
            last_credit_grant_at: now,
            paused_at: None,
            escalation_deadline: None,
            pause_reason: None,
            registered_at: now,
        }
    }

    /// Lazily replenish the self-pause credit once the cooldown since the
    /// last grant has fully elapsed. At most one credit is ever outstanding.
    pub fn replenish_self_pause_credit(&mut self, now: Timestamp, cooldown_secs: u64) {
        if self.self_pause_credits == 0
            && now.saturating_sub(self.last_credit_grant_at) >= cooldown_secs
        {
            self.self_pause_credits = 1;
            self.last_credit_grant_at = now;
        }
    }
}

/// Tunable lifecycle parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LifecycleConfig {
    /// Seconds between self-pause credit grants (90 days).
    pub self_pause_cooldown_secs: u64,
    /// Seconds a custodian may sit in `Paused` before anyone may escalate
    /// it to review (48 hours).
    pub escalation_timeout_secs: u64,
    /// Reserve/minted ratio (percent) a resume acknowledgment must clear
    /// when the pause was enforcement-initiated.
    pub min_collateral_ratio_percent: u64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            self_pause_cooldown_secs: 90 * 24 * 3600,
            escalation_timeout_secs: 48 * 3600,
            min_collateral_ratio_percent: DEFAULT_MIN_COLLATERAL_RATIO_PERCENT,
        }
    }
}
