//! The available-capacity formula.
//!
//! This is the single gating computation that the minting path and any
//! outside auditor must agree on; it exists exactly once, here.

use shared_types::{Amount, CustodianStatus};

/// Headroom available for new mints:
///
/// `max(0, min(minting_capacity, consensus_balance) - minted_amount)`
/// when the custodian may mint and reserves are fresh; otherwise 0.
///
/// Both the capacity cap and the consensus balance bound new supply - the
/// custodian can never mint beyond what its reserves demonstrably cover,
/// nor beyond the ceiling the registrar granted it.
#[must_use]
pub fn available_minting_capacity(
    status: CustodianStatus,
    reserves_stale: bool,
    minting_capacity: Amount,
    consensus_balance: Amount,
    minted_amount: Amount,
) -> Amount {
    if !status.allows_minting() || reserves_stale {
        return 0;
    }
    minting_capacity
        .min(consensus_balance)
        .saturating_sub(minted_amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_reference_case() {
        // capacity=100, consensus=70, minted=30, fresh, Active -> 40
        assert_eq!(
            available_minting_capacity(CustodianStatus::Active, false, 100, 70, 30),
            40
        );
    }

    #[test]
    fn any_non_active_status_zeroes_capacity() {
        for status in [
            CustodianStatus::MintingPaused,
            CustodianStatus::Paused,
            CustodianStatus::UnderReview,
            CustodianStatus::Revoked,
        ] {
            assert_eq!(
                available_minting_capacity(status, false, 100, 70, 30),
                0,
                "{status:?}"
            );
        }
    }

    #[test]
    fn stale_reserves_zero_capacity() {
        assert_eq!(
            available_minting_capacity(CustodianStatus::Active, true, 100, 70, 30),
            0
        );
    }

    #[test]
    fn capacity_is_bounded_by_the_smaller_of_cap_and_reserves() {
        // reserves above cap: cap binds
        assert_eq!(
            available_minting_capacity(CustodianStatus::Active, false, 100, 500, 0),
            100
        );
        // cap above reserves: reserves bind
        assert_eq!(
            available_minting_capacity(CustodianStatus::Active, false, 500, 100, 0),
            100
        );
    }

    #[test]
    fn over_minted_clamps_to_zero_not_underflow() {
        // consensus dropped below minted: headroom is zero, not negative
        assert_eq!(
            available_minting_capacity(CustodianStatus::Active, false, 100, 20, 80),
            0
        );
    }
}
