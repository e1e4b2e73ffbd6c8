//! # Account-Control Test Suite
//!
//! Unified test crate for cross-subsystem flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-subsystem choreography
//!     ├── harness.rs    # Fully wired control plane (real services, manual clock)
//!     ├── flows.rs      # Subsystem-pair flows over the shared bus
//!     └── e2e_lifecycle.rs  # Full custodian lifecycle scenarios
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ac-tests
//!
//! # By category
//! cargo test -p ac-tests integration::
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
