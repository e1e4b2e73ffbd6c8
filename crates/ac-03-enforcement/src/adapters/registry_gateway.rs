//! Registry gateway adapter.
//!
//! Bridges `CustodianGateway` to the real registry and lifecycle APIs. The
//! engine holds the registry by its ports, never by its concrete service
//! type, so tests and deployments substitute freely.

use crate::ports::CustodianGateway;
use ac_02_qc_registry::{
    EscalationOutcome, LifecycleApi, RegistryApi, RegistryResult, TransitionOutcome,
};
use async_trait::async_trait;
use shared_types::{Address, Amount, ObjectiveViolation};
use std::sync::Arc;

/// Reads custodian facts and applies lifecycle consequences through the
/// registry subsystem.
pub struct RegistryServiceGateway {
    registry: Arc<dyn RegistryApi>,
    lifecycle: Arc<dyn LifecycleApi>,
}

impl RegistryServiceGateway {
    /// Create a gateway over the registry's two API surfaces.
    #[must_use]
    pub fn new(registry: Arc<dyn RegistryApi>, lifecycle: Arc<dyn LifecycleApi>) -> Self {
        Self {
            registry,
            lifecycle,
        }
    }
}

#[async_trait]
impl CustodianGateway for RegistryServiceGateway {
    async fn minted_amount(&self, qc: Address) -> RegistryResult<Amount> {
        Ok(self.registry.custodian(qc).await?.minted_amount)
    }

    async fn apply_objective_violation(
        &self,
        qc: Address,
        violation: ObjectiveViolation,
        caller: Address,
    ) -> RegistryResult<TransitionOutcome> {
        self.lifecycle
            .apply_objective_violation(qc, violation, caller)
            .await
    }

    async fn check_escalation(
        &self,
        qc: Address,
        caller: Address,
    ) -> RegistryResult<EscalationOutcome> {
        self.lifecycle.check_escalation(qc, caller).await
    }
}
