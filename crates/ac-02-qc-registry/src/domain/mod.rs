//! Domain layer for the registry and lifecycle state machine.
//!
//! Pure entities and rules: the custodian record, the available-capacity
//! formula, and the transition graph. No IO, no clocks, no locks.

mod capacity;
mod entities;
mod errors;
mod lifecycle;

pub use capacity::*;
pub use entities::*;
pub use errors::*;
pub use lifecycle::*;
