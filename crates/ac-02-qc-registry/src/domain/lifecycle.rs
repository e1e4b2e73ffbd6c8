//! The lifecycle transition graph and outcome types.
//!
//! The graph is the complete enumeration of legal status edges. Service
//! operations layer their own preconditions (credits, deadlines, capability
//! checks) on top; nothing anywhere mutates a status except through an edge
//! this graph admits.

use serde::{Deserialize, Serialize};
use shared_types::{CustodianStatus, Timestamp};

/// Whether a direct edge `from -> to` exists in the lifecycle graph.
///
/// `Revoked` is terminal: no outgoing edges, ever.
#[must_use]
pub fn transition_allowed(from: CustodianStatus, to: CustodianStatus) -> bool {
    use CustodianStatus::{Active, MintingPaused, Paused, Revoked, UnderReview};
    matches!(
        (from, to),
        (Active, MintingPaused)          // self-pause or enforcement
            | (Active, Paused)           // severe violation
            | (MintingPaused, Active)    // explicit resume acknowledgment
            | (MintingPaused, Paused)    // self escalation or severe violation
            | (Paused, UnderReview)      // escalation deadline passed
            | (UnderReview, Active)      // council reinstatement
            | (UnderReview, Revoked)     // council revocation
    )
}

/// Council verdict on a custodian under review.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewDecision {
    /// Return the custodian to `Active`.
    Reinstate,
    /// Terminal revocation.
    Revoke,
}

/// Outcome of an enforcement-driven transition request.
///
/// `AlreadyApplied` is what makes racing enforcement calls idempotent: the
/// second caller learns the consequence was applied without producing a
/// second transition or a duplicate status-change event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The transition was applied by this call.
    Applied {
        old_status: CustodianStatus,
        new_status: CustodianStatus,
    },
    /// The custodian was already at (or past) the target status.
    AlreadyApplied { current: CustodianStatus },
}

/// Outcome of a permissionless escalation check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscalationOutcome {
    /// The deadline had passed; the custodian moved to review.
    Escalated { deadline: Timestamp },
    /// Nothing to do: not paused, or the deadline has not passed yet.
    NotDue { deadline: Option<Timestamp> },
}
