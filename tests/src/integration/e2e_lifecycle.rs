//! # End-to-End Lifecycle Scenarios
//!
//! Full custodian stories across all three subsystems, driven by a manual
//! clock:
//!
//! - undercollateralization: mint, reserves drop, keeper enforcement,
//!   blocked resume, recovery through redemption
//! - staleness: attesters go quiet, minting freezes, fresh consensus
//!   unfreezes
//! - catastrophe: zero reserves, full pause, 48h deadline, council
//!   revocation
//! - adversarial noise: one Byzantine attester never moves the median
//!   outside the honest range

#[cfg(test)]
mod tests {
    use crate::integration::harness::{ControlPlane, ATTESTERS, COUNCIL, KEEPER, QC};
    use ac_01_reserve_oracle::ReserveOracleApi;
    use ac_02_qc_registry::{
        EscalationOutcome, LifecycleApi, RegistryApi, RegistryError, ReviewDecision,
    };
    use ac_03_enforcement::{EnforcementApi, EnforcementOutcome};
    use rand::Rng;
    use shared_bus::{ControlPlaneEvent, EventFilter, EventTopic};
    use shared_types::{CustodianStatus, ObjectiveViolation, StatusChangeReason, TimeSource};

    async fn status(plane: &ControlPlane) -> CustodianStatus {
        plane.registry.custodian(QC).await.unwrap().status
    }

    #[tokio::test]
    async fn undercollateralization_cycle_ends_in_recovery() {
        let plane = ControlPlane::with_custodian(1_000_000).await;
        plane.consensus_round(QC, [1_000_000, 1_000_000, 1_000_000]).await;
        plane.registry.record_mint(QC, 800_000).await.unwrap();

        // Reserves drop below the outstanding minted value.
        plane.clock.advance(3600);
        plane.consensus_round(QC, [500_000, 500_000, 500_000]).await;

        let outcome = plane
            .enforcement
            .enforce_objective_violation(QC, StatusChangeReason::InsufficientReserves, KEEPER)
            .await
            .unwrap();
        assert!(matches!(
            outcome,
            EnforcementOutcome::Enforced {
                new_status: CustodianStatus::MintingPaused,
                ..
            }
        ));

        // Redemptions keep flowing while minting is frozen.
        assert!(matches!(
            plane.registry.record_mint(QC, 1).await,
            Err(RegistryError::MintingNotAllowed { .. })
        ));
        plane.registry.record_redemption(QC, 100_000).await.unwrap();

        // Still undercollateralized: 500k reserves against 700k minted.
        assert!(matches!(
            plane.registry.resume_minting(QC, QC).await,
            Err(RegistryError::ViolationStillActive(
                ObjectiveViolation::InsufficientReserves
            ))
        ));

        // Redeeming down to the reserve level clears the violation; the
        // explicit acknowledgment then succeeds.
        plane.registry.record_redemption(QC, 200_000).await.unwrap();
        plane.registry.resume_minting(QC, QC).await.unwrap();
        assert_eq!(status(&plane).await, CustodianStatus::Active);
        assert_eq!(
            plane.registry.available_minting_capacity(QC).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn quiet_attesters_freeze_minting_until_fresh_consensus() {
        let plane = ControlPlane::with_custodian(1_000).await;
        plane.consensus_round(QC, [900, 900, 900]).await;
        plane.registry.record_mint(QC, 100).await.unwrap();

        // Attesters go quiet past the staleness threshold.
        plane
            .clock
            .advance(plane.oracle_config.staleness_threshold_secs + 1);
        assert!(matches!(
            plane.registry.record_mint(QC, 1).await,
            Err(RegistryError::StaleReserves)
        ));

        // Staleness is objectively enforceable once a record exists.
        let outcome = plane
            .enforcement
            .enforce_objective_violation(QC, StatusChangeReason::StaleAttestations, KEEPER)
            .await
            .unwrap();
        assert!(outcome.action_taken());
        assert_eq!(status(&plane).await, CustodianStatus::MintingPaused);

        // Attesters wake up; a fresh round clears the violation and the
        // custodian acknowledges its way back.
        plane.consensus_round(QC, [900, 900, 900]).await;
        plane.registry.resume_minting(QC, QC).await.unwrap();
        plane.registry.record_mint(QC, 1).await.unwrap();
    }

    #[tokio::test]
    async fn zero_reserve_catastrophe_escalates_to_revocation() {
        let plane = ControlPlane::with_custodian(1_000).await;
        plane.consensus_round(QC, [500, 500, 500]).await;
        plane.registry.record_mint(QC, 500).await.unwrap();

        // Attesters report total loss.
        plane.clock.advance(3600);
        plane.consensus_round(QC, [0, 0, 0]).await;

        let outcome = plane
            .enforcement
            .enforce_objective_violation(QC, StatusChangeReason::ZeroReservesWithMintedTokens, KEEPER)
            .await
            .unwrap();
        assert!(matches!(
            outcome,
            EnforcementOutcome::Enforced {
                new_status: CustodianStatus::Paused,
                ..
            }
        ));
        let deadline = plane
            .registry
            .custodian(QC)
            .await
            .unwrap()
            .escalation_deadline
            .unwrap();
        assert_eq!(
            deadline,
            plane.clock.now() + plane.lifecycle_config.escalation_timeout_secs
        );

        // At the deadline, nothing; one second past it, anyone escalates.
        plane.clock.set(deadline);
        assert!(matches!(
            plane.enforcement.check_escalation(QC, KEEPER).await.unwrap(),
            EscalationOutcome::NotDue { deadline: Some(_) }
        ));
        plane.clock.set(deadline + 1);
        assert_eq!(
            plane.enforcement.check_escalation(QC, KEEPER).await.unwrap(),
            EscalationOutcome::Escalated { deadline }
        );
        assert_eq!(status(&plane).await, CustodianStatus::UnderReview);

        plane
            .registry
            .resolve_review(QC, ReviewDecision::Revoke, COUNCIL)
            .await
            .unwrap();
        assert_eq!(status(&plane).await, CustodianStatus::Revoked);

        // Terminal: nothing moves, but enforcement stays safe to call.
        assert!(matches!(
            plane.registry.record_redemption(QC, 1).await,
            Err(RegistryError::RedemptionNotAllowed { .. })
        ));
        let outcome = plane
            .enforcement
            .enforce_objective_violation(QC, StatusChangeReason::ZeroReservesWithMintedTokens, KEEPER)
            .await
            .unwrap();
        assert!(matches!(
            outcome,
            EnforcementOutcome::AlreadyEnforced {
                current: CustodianStatus::Revoked,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn racing_keepers_produce_exactly_one_transition() {
        let plane = ControlPlane::with_custodian(1_000).await;
        plane.consensus_round(QC, [800, 800, 800]).await;
        plane.registry.record_mint(QC, 800).await.unwrap();
        plane.clock.advance(3600);
        plane.consensus_round(QC, [100, 100, 100]).await;

        let mut sub = plane.subscribe(EventFilter::topics(vec![EventTopic::Lifecycle]));

        let keepers = [[0x51u8; 20], [0x52u8; 20], [0x53u8; 20]];
        let mut actions = 0;
        for keeper in keepers {
            let outcome = plane
                .enforcement
                .enforce_objective_violation(QC, StatusChangeReason::InsufficientReserves, keeper)
                .await
                .unwrap();
            if outcome.action_taken() {
                actions += 1;
            }
        }
        assert_eq!(actions, 1);

        let status_changes = sub
            .drain()
            .into_iter()
            .filter(|event| matches!(event, ControlPlaneEvent::QCStatusChanged { .. }))
            .count();
        assert_eq!(status_changes, 1);
    }

    #[tokio::test]
    async fn fresh_custodian_cannot_be_insta_paused() {
        let plane = ControlPlane::with_custodian(1_000).await;

        // No consensus has ever existed: staleness is not enforceable.
        let outcome = plane
            .enforcement
            .enforce_objective_violation(QC, StatusChangeReason::StaleAttestations, KEEPER)
            .await
            .unwrap();
        assert!(matches!(outcome, EnforcementOutcome::NoViolation { .. }));

        // Nothing minted: zero reserves are not a violation either.
        let outcome = plane
            .enforcement
            .enforce_objective_violation(QC, StatusChangeReason::ZeroReservesWithMintedTokens, KEEPER)
            .await
            .unwrap();
        assert!(matches!(outcome, EnforcementOutcome::NoViolation { .. }));
        assert_eq!(status(&plane).await, CustodianStatus::Active);
    }

    #[tokio::test]
    async fn byzantine_attester_never_moves_consensus_outside_honest_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let plane = ControlPlane::with_custodian(u64::MAX).await;
            let honest_low: u64 = rng.gen_range(1_000..2_000);
            let honest_high: u64 = rng.gen_range(honest_low..3_000);
            let byzantine: u64 = rng.gen();

            for (attester, balance) in
                ATTESTERS.iter().zip([honest_low, byzantine, honest_high])
            {
                plane
                    .oracle
                    .submit_attestation(QC, balance, *attester)
                    .await
                    .unwrap();
            }
            plane.oracle.try_finalize_consensus(QC).await.unwrap();

            // The median of {low, x, high} is always within [low, high],
            // wherever the Byzantine value lands.
            let reading = plane.oracle.reserve_reading(QC).await;
            assert!(reading.balance >= honest_low && reading.balance <= honest_high);
        }
    }
}
