//! Fully wired control plane for integration tests.
//!
//! Real services, real adapters, one shared bus, one manual clock. The only
//! substitutions are at the true system edges: proof-of-control always
//! accepts, and no redemption subsystem is attached.

use std::sync::Arc;

use ac_01_reserve_oracle::{
    FinalizeOutcome, OracleConfig, OracleService, ReserveOracleApi, SharedBusOracleEvents,
};
use ac_02_qc_registry::{
    LifecycleApi, LifecycleConfig, NoOverdueRedemptions, OracleServiceGateway,
    RegistryApi, RegistryDependencies, RegistryService, SharedBusRegistryEvents,
    StaticProofOracle,
};
use ac_03_enforcement::{
    EnforcementConfig, EnforcementDependencies, EnforcementService, RegistryServiceGateway,
    SharedBusEnforcementEvents,
};
use shared_bus::{EventFilter, InMemoryEventBus, Subscription};
use shared_types::{Address, Amount, ManualTimeSource, Role, StaticCapabilityProvider};

pub const GENESIS: u64 = 1_700_000_000;

/// Install a fmt subscriber once per process, honoring `RUST_LOG`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub const ATTESTERS: [Address; 3] = [[0xA1; 20], [0xA2; 20], [0xA3; 20]];
pub const ARBITER: Address = [0xAB; 20];
pub const REGISTRAR: Address = [0xE0; 20];
pub const COUNCIL: Address = [0xC0; 20];
pub const KEEPER: Address = [0x4E; 20];
pub const QC: Address = [0x01; 20];

type WiredRegistry = RegistryService<
    SharedBusRegistryEvents,
    StaticProofOracle,
    OracleServiceGateway,
    NoOverdueRedemptions,
>;
type WiredEnforcement =
    EnforcementService<SharedBusEnforcementEvents, RegistryServiceGateway, OracleServiceGateway>;

/// The three subsystems wired together the way a node runs them.
pub struct ControlPlane {
    pub bus: Arc<InMemoryEventBus>,
    pub clock: Arc<ManualTimeSource>,
    pub capabilities: Arc<StaticCapabilityProvider>,
    pub oracle: Arc<OracleService<SharedBusOracleEvents>>,
    pub registry: Arc<WiredRegistry>,
    pub enforcement: WiredEnforcement,
    pub oracle_config: OracleConfig,
    pub lifecycle_config: LifecycleConfig,
}

impl ControlPlane {
    pub fn new() -> Self {
        init_tracing();
        let bus = Arc::new(InMemoryEventBus::new());
        let clock = Arc::new(ManualTimeSource::new(GENESIS));
        let capabilities = Arc::new(StaticCapabilityProvider::new());
        for attester in ATTESTERS {
            capabilities.grant(attester, Role::Attester);
        }
        capabilities.grant(ARBITER, Role::Arbiter);
        capabilities.grant(REGISTRAR, Role::Registrar);
        capabilities.grant(COUNCIL, Role::EmergencyCouncil);

        let oracle_config = OracleConfig::default();
        let lifecycle_config = LifecycleConfig::default();

        let oracle = Arc::new(OracleService::new(
            Arc::new(SharedBusOracleEvents::new(bus.clone())),
            capabilities.clone(),
            clock.clone(),
            oracle_config.clone(),
        ));
        let oracle_gateway = Arc::new(OracleServiceGateway::new(
            oracle.clone() as Arc<dyn ReserveOracleApi>
        ));

        let registry = Arc::new(RegistryService::new(RegistryDependencies {
            events: Arc::new(SharedBusRegistryEvents::new(bus.clone())),
            proof_oracle: Arc::new(StaticProofOracle::accepting()),
            reserve_oracle: oracle_gateway.clone(),
            redemption_check: Arc::new(NoOverdueRedemptions),
            capabilities: capabilities.clone(),
            clock: clock.clone(),
            config: lifecycle_config.clone(),
        }));

        let enforcement = EnforcementService::new(EnforcementDependencies {
            events: Arc::new(SharedBusEnforcementEvents::new(bus.clone())),
            custodians: Arc::new(RegistryServiceGateway::new(
                registry.clone() as Arc<dyn RegistryApi>,
                registry.clone() as Arc<dyn LifecycleApi>,
            )),
            reserves: oracle_gateway,
            clock: clock.clone(),
            config: EnforcementConfig::default(),
        });

        Self {
            bus,
            clock,
            capabilities,
            oracle,
            registry,
            enforcement,
            oracle_config,
            lifecycle_config,
        }
    }

    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        self.bus.subscribe(filter)
    }

    /// Register `QC` through the registrar.
    pub async fn with_custodian(capacity: Amount) -> Self {
        let plane = Self::new();
        plane
            .registry
            .register_qc(QC, capacity, REGISTRAR)
            .await
            .unwrap();
        plane
    }

    /// Run one full attestation round for `qc` and finalize it.
    pub async fn consensus_round(&self, qc: Address, balances: [Amount; 3]) -> Amount {
        for (attester, balance) in ATTESTERS.iter().zip(balances) {
            self.oracle
                .submit_attestation(qc, balance, *attester)
                .await
                .unwrap();
        }
        match self.oracle.try_finalize_consensus(qc).await.unwrap() {
            FinalizeOutcome::Finalized { balance, .. } => balance,
            FinalizeOutcome::QuorumNotReached { pending, required } => {
                panic!("expected quorum, got {pending}/{required}")
            }
        }
    }
}

impl Default for ControlPlane {
    fn default() -> Self {
        Self::new()
    }
}
