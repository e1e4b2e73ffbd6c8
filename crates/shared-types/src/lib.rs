//! # Shared Types Crate
//!
//! This crate contains all cross-subsystem types for the Account-Control
//! workspace: domain entities, the role/capability model, the time source
//! abstraction, and the objective-violation predicates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Recompute, Don't Trust**: The objective-violation predicates live here
//!   so that every subsystem that needs to decide "is this custodian in
//!   violation?" runs the SAME code over live state, never a caller-supplied
//!   flag.
//! - **No Ambient Clock**: Every timing decision flows through `TimeSource`,
//!   so staleness and escalation deadlines are deterministic under test.

pub mod entities;
pub mod security;
pub mod time;
pub mod violations;

pub use entities::*;
pub use security::*;
pub use time::*;
pub use violations::*;
