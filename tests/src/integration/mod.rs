//! Cross-subsystem integration tests.

pub mod harness;

mod e2e_lifecycle;
mod flows;
