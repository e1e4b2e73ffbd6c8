//! Error types for the Reserve Consensus Oracle.

use shared_types::Address;

/// Oracle error types.
///
/// Authorization failures are distinct variants so operators can tell
/// "you're not allowed" apart from "the precondition isn't met".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("caller {0:?} does not hold the attester capability")]
    NotAttester(Address),

    #[error("caller {0:?} does not hold the arbiter capability")]
    NotArbiter(Address),

    #[error("no valid attestation within the window for custodian {qc:?}; cannot force consensus")]
    NoValidAttestations { qc: Address },
}

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;
