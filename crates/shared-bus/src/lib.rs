//! # Shared Bus - Audit Event Surface
//!
//! In-memory event bus carrying the control plane's audit events to off-chain
//! monitors (keeper bots, dashboards, alerting).
//!
//! ## Event Flow
//!
//! ```text
//! ┌───────────────┐                     ┌──────────────┐
//! │ Oracle (1)    │ ──ReservesAttested──┐
//! │ Registry (2)  │ ──QCStatusChanged───┤     publish()
//! │ Enforcement(3)│ ──ViolationEnforced─┤
//! └───────────────┘                     ▼
//!                                ┌──────────────┐
//!                                │  Event Bus   │ ───→ subscribers
//!                                └──────────────┘      (keepers, monitors)
//! ```
//!
//! ## Semantics
//!
//! The bus is an OBSERVATION surface, not a control path: no subsystem makes
//! a state decision based on a bus message. All control-plane decisions
//! re-derive their conditions from live state, so a lost or replayed event
//! can never cause an incorrect transition - at worst a monitor misses a
//! notification it can recover by polling.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{ControlPlaneEvent, EventFilter, EventTopic};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, EventSubscriber, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before backpressure.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
