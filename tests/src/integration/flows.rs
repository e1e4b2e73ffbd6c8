//! # Integration Test Flows
//!
//! Subsystem-pair flows over the shared bus:
//!
//! 1. **Oracle (ac-01) → bus**: attestations and consensus updates are
//!    observable with full context.
//! 2. **Oracle (ac-01) → Registry (ac-02)**: minting is gated on live
//!    consensus through the oracle gateway, never on cached values.
//! 3. **Enforcement (ac-03) → bus**: every enforcement call is audited,
//!    no-ops included.
//! 4. **Filtering**: monitors can scope subscriptions by topic and by
//!    custodian.

#[cfg(test)]
mod tests {
    use crate::integration::harness::{
        ControlPlane, ARBITER, ATTESTERS, KEEPER, QC, REGISTRAR,
    };
    use ac_01_reserve_oracle::ReserveOracleApi;
    use ac_02_qc_registry::{LifecycleApi, RegistryApi, RegistryError};
    use ac_03_enforcement::EnforcementApi;
    use shared_bus::{ControlPlaneEvent, EventFilter, EventTopic};
    use shared_types::{CustodianStatus, StatusChangeReason};

    #[tokio::test]
    async fn attestation_round_is_fully_observable() {
        let plane = ControlPlane::with_custodian(1_000).await;
        let mut sub = plane.subscribe(EventFilter::topics(vec![EventTopic::ReserveOracle]));

        let consensus = plane.consensus_round(QC, [100, 105, 102]).await;
        assert_eq!(consensus, 102);

        let events = sub.drain();
        assert_eq!(events.len(), 4);
        for (event, attester) in events.iter().zip(ATTESTERS) {
            match event {
                ControlPlaneEvent::ReservesAttested {
                    qc,
                    attester: from,
                    ..
                } => {
                    assert_eq!(*qc, QC);
                    assert_eq!(*from, attester);
                }
                other => panic!("expected ReservesAttested, got {other:?}"),
            }
        }
        match &events[3] {
            ControlPlaneEvent::ConsensusUpdated {
                qc,
                balance,
                attester_count,
                forced,
                ..
            } => {
                assert_eq!(*qc, QC);
                assert_eq!(*balance, 102);
                assert_eq!(*attester_count, 3);
                assert!(!forced);
            }
            other => panic!("expected ConsensusUpdated, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn minting_is_gated_on_live_consensus() {
        let plane = ControlPlane::with_custodian(1_000).await;

        // No consensus has ever existed: the reading is stale and capacity
        // is zero.
        assert_eq!(
            plane.registry.available_minting_capacity(QC).await.unwrap(),
            0
        );
        assert!(matches!(
            plane.registry.record_mint(QC, 1).await,
            Err(RegistryError::StaleReserves)
        ));

        plane.consensus_round(QC, [700, 700, 700]).await;
        assert_eq!(
            plane.registry.available_minting_capacity(QC).await.unwrap(),
            700
        );
        plane.registry.record_mint(QC, 700).await.unwrap();
        assert_eq!(
            plane.registry.available_minting_capacity(QC).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn forced_consensus_is_flagged_on_the_bus() {
        let plane = ControlPlane::with_custodian(1_000).await;
        let mut sub = plane.subscribe(EventFilter::topics(vec![EventTopic::ReserveOracle]));

        // A single attester cannot reach quorum; the arbiter steps in.
        plane
            .oracle
            .submit_attestation(QC, 500, ATTESTERS[0])
            .await
            .unwrap();
        let forced = plane.oracle.force_consensus(QC, ARBITER).await.unwrap();
        assert_eq!(forced, 500);

        let events = sub.drain();
        assert!(events.iter().any(|event| matches!(
            event,
            ControlPlaneEvent::ConsensusUpdated { forced: true, .. }
        )));
    }

    #[tokio::test]
    async fn lifecycle_events_carry_reason_and_caller() {
        let plane = ControlPlane::with_custodian(1_000).await;
        let mut sub = plane.subscribe(EventFilter::topics(vec![EventTopic::Lifecycle]));

        plane.registry.self_pause_minting(QC, QC).await.unwrap();

        let events = sub.drain();
        assert_eq!(events.len(), 1);
        match &events[0] {
            ControlPlaneEvent::QCStatusChanged {
                qc,
                old_status,
                new_status,
                reason,
                caller,
                ..
            } => {
                assert_eq!(*qc, QC);
                assert_eq!(*old_status, CustodianStatus::Active);
                assert_eq!(*new_status, CustodianStatus::MintingPaused);
                assert_eq!(*reason, StatusChangeReason::SelfPause);
                assert_eq!(*caller, QC);
            }
            other => panic!("expected QCStatusChanged, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn every_enforcement_call_is_audited() {
        let plane = ControlPlane::with_custodian(1_000).await;
        plane.consensus_round(QC, [800, 800, 800]).await;
        plane.registry.record_mint(QC, 800).await.unwrap();
        plane.consensus_round(QC, [500, 500, 500]).await;

        let mut sub = plane.subscribe(EventFilter::topics(vec![EventTopic::Enforcement]));

        plane
            .enforcement
            .enforce_objective_violation(QC, StatusChangeReason::InsufficientReserves, KEEPER)
            .await
            .unwrap();
        plane
            .enforcement
            .enforce_objective_violation(QC, StatusChangeReason::InsufficientReserves, KEEPER)
            .await
            .unwrap();

        let events = sub.drain();
        assert_eq!(events.len(), 2);
        let taken: Vec<bool> = events
            .iter()
            .map(|event| match event {
                ControlPlaneEvent::ViolationEnforced { action_taken, .. } => *action_taken,
                other => panic!("expected ViolationEnforced, got {other:?}"),
            })
            .collect();
        assert_eq!(taken, vec![true, false]);
    }

    #[tokio::test]
    async fn subscriptions_filter_by_custodian() {
        let other_qc = [0x02u8; 20];
        let plane = ControlPlane::with_custodian(1_000).await;
        plane
            .registry
            .register_qc(other_qc, 2_000, REGISTRAR)
            .await
            .unwrap();

        let mut sub = plane.subscribe(EventFilter::custodians(vec![QC]));

        plane.registry.self_pause_minting(QC, QC).await.unwrap();
        plane
            .registry
            .self_pause_minting(other_qc, other_qc)
            .await
            .unwrap();

        let events = sub.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].qc(), QC);
    }
}
