//! Driving ports (inbound API).

use crate::domain::{FinalizeOutcome, OracleResult, ReserveReading};
use async_trait::async_trait;
use shared_types::{Address, Amount};

/// Primary oracle API.
#[async_trait]
pub trait ReserveOracleApi: Send + Sync {
    /// Record `caller`'s reserve claim for `qc`, overwriting any pending
    /// claim from the same attester.
    ///
    /// # Authorization
    /// Requires the attester capability at submission time. Zero is an
    /// accepted balance. No side effect beyond storing the pending value.
    async fn submit_attestation(
        &self,
        qc: Address,
        balance: Amount,
        caller: Address,
    ) -> OracleResult<()>;

    /// Compute and persist the median consensus when quorum is reached.
    ///
    /// Permissionless. Below quorum this is an explicit no-op outcome, not
    /// an error, so keepers can poll it blindly.
    async fn try_finalize_consensus(&self, qc: Address) -> OracleResult<FinalizeOutcome>;

    /// Arbiter-only: force consensus from the non-expired pending
    /// attestations. Requires at least one; fails otherwise.
    async fn force_consensus(&self, qc: Address, caller: Address) -> OracleResult<Amount>;

    /// Pure read of the current consensus balance and its staleness.
    async fn reserve_reading(&self, qc: Address) -> ReserveReading;
}
