//! Common types shared across the machine.
//!
//! This module provides the building blocks the rest of the crate is written
//! against. It includes:
//! 1. **Constants:** Memory and register-bank geometry.
//! 2. **Error Handling:** Fault and halt-reason representations.
//! 3. **Register Management:** The register file with PC, SP, and the
//!    current-register selector.

/// Machine geometry constants.
pub mod constants;

/// Fault and halt-reason definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, REGISTER_COUNT, SP_INIT};
pub use error::{Fault, HaltReason};
pub use reg::RegisterFile;
