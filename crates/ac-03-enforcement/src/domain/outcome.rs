//! Enforcement outcomes.

use shared_types::CustodianStatus;
use uuid::Uuid;

/// Result of a successful enforcement call.
///
/// Both arms carry an audit id; a call that changed nothing is still an
/// auditable fact, and the id correlates the return value with the
/// `ViolationEnforced` event the call published.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnforcementOutcome {
    /// The violation held and this call applied its consequence.
    Enforced {
        audit_id: Uuid,
        old_status: CustodianStatus,
        new_status: CustodianStatus,
    },
    /// The violation held but the consequence was already in place.
    AlreadyEnforced {
        audit_id: Uuid,
        current: CustodianStatus,
    },
    /// The claimed condition did not re-derive against live state. A no-op,
    /// not an error: keepers poll speculatively without penalty.
    NoViolation { audit_id: Uuid },
}

impl EnforcementOutcome {
    /// Whether this call changed the custodian's status.
    #[must_use]
    pub fn action_taken(&self) -> bool {
        matches!(self, Self::Enforced { .. })
    }
}
