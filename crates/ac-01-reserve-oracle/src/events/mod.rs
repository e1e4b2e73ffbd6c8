//! Events published by the oracle subsystem.

mod published;

pub use published::*;
