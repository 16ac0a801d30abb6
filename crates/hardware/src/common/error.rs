//! Fault and halt-reason definitions.
//!
//! The machine has exactly two fatal conditions. Both are communicated by
//! halting the machine rather than by propagating an error value, so callers
//! inspect a [`HaltReason`] once stepping stops.

use thiserror::Error;

/// Fatal machine conditions.
///
/// A fault freezes the machine with the program counter still addressing the
/// offending instruction; no register or memory write happens as part of the
/// faulting step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// The byte at the program counter has no dispatcher entry.
    #[error("invalid instruction {opcode:#04x} at address {addr:#04x}")]
    InvalidInstruction {
        /// The unrecognized opcode byte.
        opcode: u8,
        /// Address the byte was fetched from.
        addr: u8,
    },

    /// A DIV instruction named a divisor register holding zero.
    #[error("divide by zero at address {addr:#04x}")]
    DivideByZero {
        /// Address of the DIV opcode.
        addr: u8,
    },
}

/// Why the machine stopped stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// The program executed HALT.
    Requested,
    /// A fatal condition stopped the machine.
    Fault(Fault),
}
