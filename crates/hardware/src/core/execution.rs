//! Instruction execution engine.
//!
//! This module holds the fetch/decode/dispatch cycle and one handler per
//! opcode. Handlers are free functions over explicit machine state; the
//! branch table is the exhaustive match in [`dispatch`], so an opcode
//! without a handler fails to compile rather than at runtime.

use tracing::trace;

use crate::common::{Fault, HaltReason};
use crate::core::alu;
use crate::core::machine::Machine;
use crate::isa::Opcode;
use crate::isa::disasm::disassemble;

/// A handler executes one instruction against the machine state, advancing
/// the program counter itself (or halting instead of advancing).
pub type Handler = fn(&mut Machine);

/// Outcome of a single execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The machine is still running.
    Continue,
    /// The machine is halted; further steps are no-ops.
    Halted(HaltReason),
}

/// Resolves an opcode to its handler.
pub fn dispatch(op: Opcode) -> Handler {
    match op {
        Opcode::Halt => halt,
        Opcode::Init => init,
        Opcode::Set => set,
        Opcode::Save => save,
        Opcode::Mul => mul,
        Opcode::Prn => prn,
        Opcode::Div => div,
        Opcode::Inc => inc,
        Opcode::Sub => sub,
        Opcode::Add => add,
        Opcode::Dec => dec,
        Opcode::Push => push,
        Opcode::Pop => pop,
    }
}

impl Machine {
    /// Runs one fetch/decode/execute cycle.
    ///
    /// A halted machine stays halted: the call returns the existing reason
    /// without fetching. An unrecognized opcode byte halts the machine with
    /// the program counter left at the offending address.
    pub fn step(&mut self) -> Step {
        if let Some(reason) = self.halt_reason() {
            return Step::Halted(reason);
        }

        let pc = self.regs.pc();
        let byte = self.mem.read(pc);
        let Some(op) = Opcode::from_byte(byte) else {
            let fault = Fault::InvalidInstruction { opcode: byte, addr: pc };
            self.halt(HaltReason::Fault(fault));
            return Step::Halted(HaltReason::Fault(fault));
        };

        if self.trace {
            trace!(pc, text = %disassemble(&self.mem, pc), "exec");
        }

        dispatch(op)(self);

        match self.halt_reason() {
            Some(reason @ HaltReason::Requested) => {
                self.stats.instructions_retired += 1;
                Step::Halted(reason)
            }
            Some(reason) => Step::Halted(reason),
            None => {
                self.stats.instructions_retired += 1;
                Step::Continue
            }
        }
    }

    /// Byte at `pc + offset`, wrapping at the end of memory like the fetch
    /// path itself.
    fn operand(&self, offset: u8) -> u8 {
        self.mem.read(self.regs.pc().wrapping_add(offset))
    }

    /// Advances the program counter by `width` single increments.
    fn advance_pc(&mut self, width: u8) {
        for _ in 0..width {
            let next = alu::inc(self.regs.pc());
            self.regs.set_pc(next);
        }
    }
}

/// HALT: stop the machine, leaving the PC at the HALT opcode itself.
fn halt(m: &mut Machine) {
    m.halt(HaltReason::Requested);
}

/// INIT: reset the current-register selector to r0.
fn init(m: &mut Machine) {
    m.regs.set_current(0);
    m.advance_pc(1);
}

/// SET: select the register named by the operand byte.
fn set(m: &mut Machine) {
    let index = m.operand(1);
    m.regs.set_current(index);
    m.advance_pc(2);
}

/// SAVE: store the immediate operand into the selected register.
fn save(m: &mut Machine) {
    let value = m.operand(1);
    let target = m.regs.current();
    m.regs.write(target, value);
    m.advance_pc(2);
}

/// Shared body of the always-succeeding arithmetic ops: read the two operand
/// registers, combine, write the selected register.
fn binary(m: &mut Machine, f: fn(u8, u8) -> u8) {
    let a = m.regs.read(m.operand(1));
    let b = m.regs.read(m.operand(2));
    let target = m.regs.current();
    m.regs.write(target, f(a, b));
    m.advance_pc(3);
}

/// ADD: selected register receives `reg[a] + reg[b]`, mod 256.
fn add(m: &mut Machine) {
    binary(m, alu::add);
}

/// SUB: selected register receives `reg[a] - reg[b]`, mod 256.
fn sub(m: &mut Machine) {
    binary(m, alu::sub);
}

/// MUL: selected register receives `reg[a] * reg[b]`, mod 256.
fn mul(m: &mut Machine) {
    binary(m, alu::mul);
}

/// DIV: as the other arithmetic ops, except a zero divisor is fatal and
/// leaves both the selected register and the PC untouched.
fn div(m: &mut Machine) {
    let a = m.regs.read(m.operand(1));
    let b = m.regs.read(m.operand(2));
    match alu::div(a, b) {
        Some(quotient) => {
            let target = m.regs.current();
            m.regs.write(target, quotient);
            m.advance_pc(3);
        }
        None => {
            let addr = m.regs.pc();
            m.halt(HaltReason::Fault(Fault::DivideByZero { addr }));
        }
    }
}

/// PRN: emit the selected register's value to the output sink.
fn prn(m: &mut Machine) {
    let value = m.regs.read(m.regs.current());
    m.emit(value);
    m.advance_pc(1);
}

/// INC is reserved: recognized, but wired to nothing beyond the PC step.
fn inc(m: &mut Machine) {
    m.advance_pc(1);
}

/// DEC is reserved: recognized, but wired to nothing beyond the PC step.
fn dec(m: &mut Machine) {
    m.advance_pc(1);
}

/// PUSH is a stub: it steps over itself; SP and memory stay untouched.
fn push(m: &mut Machine) {
    m.advance_pc(1);
}

/// POP is a stub: it moves the PC back one byte; SP and memory stay
/// untouched.
fn pop(m: &mut Machine) {
    let prev = alu::dec(m.regs.pc());
    m.regs.set_pc(prev);
}
