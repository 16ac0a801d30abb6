//! Instruction set.
//!
//! One-byte opcodes with fixed operand widths. This module provides:
//! 1. **Opcode bytes:** The encoded constants programs are written in.
//! 2. **Decode:** The `Opcode` enum and byte-to-opcode mapping.
//! 3. **Disassembly:** Mnemonic rendering for tracing and diagnostics.

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcode decoding and instruction widths.
pub mod instruction;

/// Opcode byte constants.
pub mod opcodes;

pub use instruction::Opcode;
