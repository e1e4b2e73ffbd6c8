//! Reserve oracle gateway adapter.
//!
//! Bridges the registry's `ReserveOracleGateway` port to the real reserve
//! oracle API. The registry never caches the answer; every gated operation
//! asks again.

use crate::ports::{ReserveOracleGateway, ReserveStatus};
use ac_01_reserve_oracle::ReserveOracleApi;
use async_trait::async_trait;
use shared_types::Address;
use std::sync::Arc;

/// Reads reserve consensus from the oracle subsystem.
pub struct OracleServiceGateway {
    oracle: Arc<dyn ReserveOracleApi>,
}

impl OracleServiceGateway {
    /// Create a gateway over the oracle's API.
    #[must_use]
    pub fn new(oracle: Arc<dyn ReserveOracleApi>) -> Self {
        Self { oracle }
    }
}

#[async_trait]
impl ReserveOracleGateway for OracleServiceGateway {
    async fn reserve_status(&self, qc: Address) -> ReserveStatus {
        let reading = self.oracle.reserve_reading(qc).await;
        ReserveStatus {
            balance: reading.balance,
            last_updated: reading.last_updated,
            is_stale: reading.is_stale,
        }
    }
}
