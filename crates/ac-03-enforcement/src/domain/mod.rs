//! Domain layer for the enforcement engine.

mod config;
mod errors;
mod outcome;

pub use config::*;
pub use errors::*;
pub use outcome::*;
