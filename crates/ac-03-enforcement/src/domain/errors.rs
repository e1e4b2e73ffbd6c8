//! Enforcement errors.

use ac_02_qc_registry::RegistryError;
use shared_types::NotObjectiveViolation;

/// Why an enforcement call was refused.
///
/// A claimed condition that simply does not hold is NOT an error; that path
/// is the `NoViolation` outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnforcementError {
    /// The claimed reason is subjective; only objective conditions are
    /// enforceable by arbitrary callers.
    #[error(transparent)]
    NotObjective(#[from] NotObjectiveViolation),

    /// The registry refused the lookup or the consequence.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type EnforcementResult<T> = Result<T, EnforcementError>;
