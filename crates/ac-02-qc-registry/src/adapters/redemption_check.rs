//! Redemption obligation adapter.
//!
//! Redemption execution runs outside the control plane; deployments wire a
//! gateway to it here. The default stands in where no redemption subsystem
//! is attached: nothing is ever overdue.

use crate::ports::RedemptionObligationCheck;
use async_trait::async_trait;
use shared_types::Address;

/// Obligation check that always reports a clean slate.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOverdueRedemptions;

#[async_trait]
impl RedemptionObligationCheck for NoOverdueRedemptions {
    async fn has_overdue_redemptions(&self, _qc: Address) -> bool {
        false
    }
}
