//! Opcode decoding.
//!
//! [`Opcode`] is the decoded form of an instruction byte. Each opcode has a
//! fixed instruction width (the opcode byte plus zero, one, or two operand
//! bytes) consumed from memory starting at the program counter.

use std::fmt;

use crate::isa::opcodes;

/// Decoded instruction byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Stop the machine.
    Halt,
    /// Reset the current-register selector to r0.
    Init,
    /// Select the register named by the operand byte.
    Set,
    /// Store the operand byte into the selected register.
    Save,
    /// Multiply two operand registers into the selected register.
    Mul,
    /// Emit the selected register's value.
    Prn,
    /// Divide two operand registers into the selected register.
    Div,
    /// Reserved increment opcode.
    Inc,
    /// Subtract two operand registers into the selected register.
    Sub,
    /// Add two operand registers into the selected register.
    Add,
    /// Reserved decrement opcode.
    Dec,
    /// Stack push stub.
    Push,
    /// Stack pop stub.
    Pop,
}

impl Opcode {
    /// Decodes an instruction byte.
    ///
    /// Returns `None` for any byte with no dispatcher entry; the execution
    /// engine turns that into the invalid-instruction fault.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            opcodes::HALT => Some(Self::Halt),
            opcodes::INIT => Some(Self::Init),
            opcodes::SET => Some(Self::Set),
            opcodes::SAVE => Some(Self::Save),
            opcodes::MUL => Some(Self::Mul),
            opcodes::PRN => Some(Self::Prn),
            opcodes::DIV => Some(Self::Div),
            opcodes::INC => Some(Self::Inc),
            opcodes::SUB => Some(Self::Sub),
            opcodes::ADD => Some(Self::Add),
            opcodes::DEC => Some(Self::Dec),
            opcodes::PUSH => Some(Self::Push),
            opcodes::POP => Some(Self::Pop),
            _ => None,
        }
    }

    /// The opcode's encoded byte value.
    pub const fn byte(self) -> u8 {
        match self {
            Self::Halt => opcodes::HALT,
            Self::Init => opcodes::INIT,
            Self::Set => opcodes::SET,
            Self::Save => opcodes::SAVE,
            Self::Mul => opcodes::MUL,
            Self::Prn => opcodes::PRN,
            Self::Div => opcodes::DIV,
            Self::Inc => opcodes::INC,
            Self::Sub => opcodes::SUB,
            Self::Add => opcodes::ADD,
            Self::Dec => opcodes::DEC,
            Self::Push => opcodes::PUSH,
            Self::Pop => opcodes::POP,
        }
    }

    /// Total instruction width in bytes: the opcode byte plus its fixed
    /// operand count.
    ///
    /// HALT has width 1 but its handler never advances the PC, so after a
    /// requested halt the PC still addresses the HALT byte.
    pub const fn width(self) -> u8 {
        match self {
            Self::Halt
            | Self::Init
            | Self::Prn
            | Self::Inc
            | Self::Dec
            | Self::Push
            | Self::Pop => 1,
            Self::Set | Self::Save => 2,
            Self::Mul | Self::Div | Self::Sub | Self::Add => 3,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Halt => "HALT",
            Self::Init => "INIT",
            Self::Set => "SET",
            Self::Save => "SAVE",
            Self::Mul => "MUL",
            Self::Prn => "PRN",
            Self::Div => "DIV",
            Self::Inc => "INC",
            Self::Sub => "SUB",
            Self::Add => "ADD",
            Self::Dec => "DEC",
            Self::Push => "PUSH",
            Self::Pop => "POP",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
