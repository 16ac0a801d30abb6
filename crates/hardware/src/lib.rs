//! 8-bit byte-addressable virtual processor library.
//!
//! This crate implements a small clocked virtual processor with the following:
//! 1. **Core:** Flat 256-byte memory, a 256-register byte bank with an
//!    accumulator-select indirection, and a wrapping byte ALU.
//! 2. **ISA:** One-byte opcodes with fixed operand widths, decoded into an
//!    `Opcode` enum and dispatched through a branch table of handler functions.
//! 3. **Execution:** A pure `step()` fetch/decode/execute cycle with
//!    halt-as-state semantics for the two fatal conditions.
//! 4. **Simulation:** A fixed-period clock adapter, a program loader, and
//!    execution statistics.

/// Common types and constants (faults, halt reasons, register file).
pub mod common;
/// Machine configuration (defaults, general and clock settings).
pub mod config;
/// Machine core (memory, ALU, machine state, execution engine).
pub mod core;
/// Output device abstraction behind the PRN instruction.
pub mod device;
/// Instruction set (opcode bytes, decode, disassembly).
pub mod isa;
/// Clock pacing and program loading.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main machine type; holds registers, memory, halt latch, and stats.
pub use crate::core::Machine;
/// Pacing adapter; drives `Machine::step` at a fixed period.
pub use crate::sim::Clock;
