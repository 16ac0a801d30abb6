//! Register file.
//!
//! A bank of 256 byte-wide general registers plus the architectural
//! registers: the program counter, the stack pointer, and the
//! current-register selector. The selector is machine-level state naming
//! which general register receives the next arithmetic or move result; it is
//! a scalar field of its own, not a slot in the bank.

use crate::common::constants::{REGISTER_COUNT, SP_INIT};

/// Register bank and architectural registers.
///
/// All values are bytes; wraparound on overflow is enforced at the write
/// boundary by the `u8` value domain (255 + 1 stores 0, 0 - 1 stores 255).
#[derive(Debug, Clone)]
pub struct RegisterFile {
    bank: [u8; REGISTER_COUNT],
    pc: u8,
    sp: u8,
    current: u8,
}

impl RegisterFile {
    /// Creates a register file with a zeroed bank, the PC at address 0, the
    /// selector on r0, and the SP at the top of memory.
    pub fn new() -> Self {
        Self {
            bank: [0; REGISTER_COUNT],
            pc: 0,
            sp: SP_INIT,
            current: 0,
        }
    }

    /// Reads a general register.
    pub fn read(&self, index: u8) -> u8 {
        self.bank[index as usize]
    }

    /// Writes a general register.
    pub fn write(&mut self, index: u8, value: u8) {
        self.bank[index as usize] = value;
    }

    /// Current program counter.
    pub fn pc(&self) -> u8 {
        self.pc
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, addr: u8) {
        self.pc = addr;
    }

    /// Current stack pointer.
    ///
    /// Reserved for stack operations; nothing reads or writes it through the
    /// instruction set today.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, addr: u8) {
        self.sp = addr;
    }

    /// Index of the register that receives the next arithmetic result.
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Selects the register that receives the next arithmetic result.
    pub fn set_current(&mut self, index: u8) {
        self.current = index;
    }

    /// Dumps the architectural registers and every nonzero general register
    /// to stdout.
    ///
    /// Useful for post-mortem inspection after a fault.
    pub fn dump(&self) {
        println!(
            "PC = {:#04x}  SP = {:#04x}  cur = r{}",
            self.pc, self.sp, self.current
        );
        for (index, &value) in self.bank.iter().enumerate() {
            if value != 0 {
                println!("r{index:<3} = {value:#04x} ({value})");
            }
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
