//! Events published by the registry subsystem.

mod published;

pub use published::*;
