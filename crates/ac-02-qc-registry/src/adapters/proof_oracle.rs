//! Proof-of-control oracle adapter.
//!
//! Real deployments back this with an SPV verifier against Bitcoin headers.
//! The in-process variant applies a single policy to every proof, which is
//! all the integration harness needs.

use crate::ports::ProofOfControlOracle;
use async_trait::async_trait;
use shared_types::WalletId;
use std::sync::atomic::{AtomicBool, Ordering};

/// Proof oracle with a switchable accept/reject policy.
pub struct StaticProofOracle {
    accept: AtomicBool,
}

impl StaticProofOracle {
    /// Oracle that accepts every proof.
    #[must_use]
    pub fn accepting() -> Self {
        Self {
            accept: AtomicBool::new(true),
        }
    }

    /// Oracle that rejects every proof.
    #[must_use]
    pub fn rejecting() -> Self {
        Self {
            accept: AtomicBool::new(false),
        }
    }

    /// Flip the policy at runtime.
    pub fn set_accept(&self, accept: bool) {
        self.accept.store(accept, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProofOfControlOracle for StaticProofOracle {
    async fn verify(&self, _wallet: &WalletId, proof: &[u8]) -> bool {
        !proof.is_empty() && self.accept.load(Ordering::SeqCst)
    }
}
