//! Enforcement configuration.

use serde::{Deserialize, Serialize};
use shared_types::DEFAULT_MIN_COLLATERAL_RATIO_PERCENT;

/// Tunable enforcement parameters.
///
/// The ratio here must match the one the registry applies to resume
/// acknowledgments; deployments derive both from one source.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnforcementConfig {
    /// Reserve/minted ratio (percent) below which `InsufficientReserves`
    /// holds.
    pub min_collateral_ratio_percent: u64,
}

impl Default for EnforcementConfig {
    fn default() -> Self {
        Self {
            min_collateral_ratio_percent: DEFAULT_MIN_COLLATERAL_RATIO_PERCENT,
        }
    }
}
