//! Events for the enforcement subsystem.

mod published;

pub use published::*;
