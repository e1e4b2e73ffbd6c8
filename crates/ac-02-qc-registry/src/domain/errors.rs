//! Error types for the registry and lifecycle subsystem.

use shared_types::{Address, Amount, CustodianStatus, ObjectiveViolation, WalletId};

/// Registry and lifecycle error types.
///
/// Authorization variants (`Not*`) are kept distinct from business-rule
/// variants so operators can tell "you're not allowed" apart from "the
/// system correctly rejected this".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    // --- authorization ---
    #[error("caller {0:?} does not hold the registrar capability")]
    NotRegistrar(Address),

    #[error("caller {0:?} does not hold the emergency-council capability")]
    NotCouncil(Address),

    #[error("caller {caller:?} is not custodian {qc:?}; self-service operations only")]
    NotCustodian { caller: Address, qc: Address },

    // --- not found ---
    #[error("custodian {0:?} is not registered")]
    UnknownCustodian(Address),

    #[error("wallet {wallet:?} is not registered for custodian {qc:?}")]
    UnknownWallet { qc: Address, wallet: WalletId },

    // --- invariant violations ---
    #[error("custodian {0:?} is already registered")]
    AlreadyRegistered(Address),

    #[error("initial minting capacity must be non-zero")]
    ZeroInitialCapacity,

    #[error("capacity must strictly increase: current {current}, requested {requested}")]
    CapacityNotIncreased { current: Amount, requested: Amount },

    #[error("wallet {wallet:?} is already registered for custodian {qc:?}")]
    WalletAlreadyRegistered { qc: Address, wallet: WalletId },

    #[error("proof of control rejected for wallet {wallet:?}")]
    ProofOfControlRejected { wallet: WalletId },

    #[error("custodian {0:?} is revoked; record is read-only")]
    CustodianRevoked(Address),

    // --- mint/redemption gating ---
    #[error("minting not allowed in status {status:?}")]
    MintingNotAllowed { status: CustodianStatus },

    #[error("consensus reserves are stale; minting blocked")]
    StaleReserves,

    #[error("mint exceeds available capacity: available {available}, requested {requested}")]
    InsufficientCapacity { available: Amount, requested: Amount },

    #[error("redemption fulfillment not allowed in status {status:?}")]
    RedemptionNotAllowed { status: CustodianStatus },

    #[error("redemption exceeds outstanding minted value: minted {minted}, requested {requested}")]
    RedemptionExceedsMinted { minted: Amount, requested: Amount },

    // --- lifecycle ---
    #[error("no transition from {from:?} to {attempted:?}")]
    InvalidTransition {
        from: CustodianStatus,
        attempted: CustodianStatus,
    },

    #[error("no self-pause credit available; next grant no earlier than {next_grant_at}")]
    NoSelfPauseCredit { next_grant_at: u64 },

    #[error("custodian {0:?} has overdue redemption obligations; self-pause blocked")]
    OverdueRedemptions(Address),

    #[error("cannot resume: violation {0:?} still holds against live reserves")]
    ViolationStillActive(ObjectiveViolation),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
