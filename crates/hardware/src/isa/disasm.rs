//! Instruction disassembler.
//!
//! Converts the instruction at a memory address into a human-readable
//! mnemonic string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use bytevm_core::core::Memory;
//! use bytevm_core::isa::disasm::disassemble;
//!
//! let mut mem = Memory::new();
//! mem.write(0, 0x04);
//! mem.write(1, 5);
//! assert_eq!(disassemble(&mem, 0), "SAVE 5");
//! ```

use crate::core::memory::Memory;
use crate::isa::Opcode;

/// Disassembles the instruction at `addr`.
///
/// Returns text like `"SAVE 5"` or `"ADD r0, r1"`, or `"??? 0x07"` for a
/// byte with no dispatcher entry. Operand reads wrap at the end of memory,
/// matching the fetch path.
pub fn disassemble(mem: &Memory, addr: u8) -> String {
    let byte = mem.read(addr);
    let Some(op) = Opcode::from_byte(byte) else {
        return format!("??? {byte:#04x}");
    };
    match op {
        Opcode::Set => format!("{op} r{}", mem.read(addr.wrapping_add(1))),
        Opcode::Save => format!("{op} {}", mem.read(addr.wrapping_add(1))),
        Opcode::Mul | Opcode::Div | Opcode::Sub | Opcode::Add => format!(
            "{op} r{}, r{}",
            mem.read(addr.wrapping_add(1)),
            mem.read(addr.wrapping_add(2))
        ),
        _ => op.to_string(),
    }
}
