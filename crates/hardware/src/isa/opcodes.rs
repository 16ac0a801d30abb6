//! Opcode byte constants.
//!
//! One byte identifies each instruction. Operand widths are fixed per opcode
//! and tabulated in [`Opcode::width`](crate::isa::Opcode::width); nothing is
//! inferred from the bit pattern.

/// HALT: stop the machine.
pub const HALT: u8 = 0x00;

/// INIT: reset the current-register selector to r0.
pub const INIT: u8 = 0x01;

/// SET: select a register by index (one operand byte).
pub const SET: u8 = 0x02;

/// SAVE: store an immediate into the selected register (one operand byte).
pub const SAVE: u8 = 0x04;

/// MUL: multiply two registers into the selected register (two operand bytes).
pub const MUL: u8 = 0x05;

/// PRN: emit the selected register's value.
pub const PRN: u8 = 0x06;

/// DIV: divide two registers into the selected register (two operand bytes).
pub const DIV: u8 = 0x09;

/// INC: reserved increment opcode.
pub const INC: u8 = 0x0B;

/// SUB: subtract two registers into the selected register (two operand bytes).
pub const SUB: u8 = 0x0D;

/// ADD: add two registers into the selected register (two operand bytes).
pub const ADD: u8 = 0x0F;

/// DEC: reserved decrement opcode.
pub const DEC: u8 = 0x11;

/// PUSH: stack push stub.
pub const PUSH: u8 = 0x19;

/// POP: stack pop stub.
pub const POP: u8 = 0x1D;
