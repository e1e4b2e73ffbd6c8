//! Oracle configuration.

use serde::{Deserialize, Serialize};

/// Tunable parameters for the consensus oracle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Distinct attesters required for the normal consensus path.
    /// Quorum-of-3 with median tolerates 1 Byzantine attester.
    pub quorum_threshold: usize,
    /// Maximum age of an attestation (seconds) to count toward forced
    /// consensus.
    pub attestation_window_secs: u64,
    /// Age (seconds) after which a consensus value no longer gates minting.
    pub staleness_threshold_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            quorum_threshold: 3,
            attestation_window_secs: 6 * 3600,
            staleness_threshold_secs: 24 * 3600,
        }
    }
}
