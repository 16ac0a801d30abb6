//! Machine state container.
//!
//! `Machine` owns the register file, memory, halt latch, statistics, and the
//! output sink. It is exclusively owned by its driver: all mutation happens
//! inside [`Machine::step`](crate::core::execution) or through the poke
//! primitive before a run, so no locking discipline is needed beyond "one
//! stepper per machine".

use tracing::{debug, error};

use crate::common::{HaltReason, RegisterFile};
use crate::config::Config;
use crate::core::memory::Memory;
use crate::device::{OutputSink, StdoutSink};
use crate::stats::MachineStats;

/// The complete machine state.
#[derive(Debug)]
pub struct Machine {
    /// Register bank, PC, SP, and the current-register selector.
    pub regs: RegisterFile,
    /// Flat 256-byte memory.
    pub mem: Memory,
    /// Execution statistics.
    pub stats: MachineStats,
    pub(crate) trace: bool,
    halted: Option<HaltReason>,
    sink: Box<dyn OutputSink>,
}

impl Machine {
    /// Creates a zeroed machine that emits PRN values to stdout.
    pub fn new(config: &Config) -> Self {
        Self::with_sink(config, Box::new(StdoutSink))
    }

    /// Creates a zeroed machine that emits PRN values to `sink`.
    pub fn with_sink(config: &Config, sink: Box<dyn OutputSink>) -> Self {
        Self {
            regs: RegisterFile::new(),
            mem: Memory::new(),
            stats: MachineStats::default(),
            trace: config.general.trace_instructions,
            halted: None,
            sink,
        }
    }

    /// Writes one byte into memory.
    ///
    /// Loaders call this to install the encoded instruction stream and any
    /// initial data before the clock starts.
    pub fn poke(&mut self, addr: u8, value: u8) {
        self.mem.write(addr, value);
    }

    /// Why the machine stopped, if it has.
    pub fn halt_reason(&self) -> Option<HaltReason> {
        self.halted
    }

    /// Clears the halt latch without touching any other state.
    ///
    /// The program counter still addresses the instruction that stopped the
    /// machine, so stepping again re-attempts it unless memory was corrected
    /// first.
    pub fn resume(&mut self) {
        if self.halted.take().is_some() {
            debug!("halt latch cleared");
        }
    }

    /// Dumps PC and registers to stdout for post-mortem inspection.
    pub fn dump_state(&self) {
        self.regs.dump();
    }

    /// Latches a halt reason and stops further stepping.
    pub(crate) fn halt(&mut self, reason: HaltReason) {
        match reason {
            HaltReason::Fault(fault) => {
                self.stats.traps_taken += 1;
                error!(%fault, "machine fault");
            }
            HaltReason::Requested => debug!("halt requested"),
        }
        self.halted = Some(reason);
    }

    /// Hands one PRN value to the output sink.
    pub(crate) fn emit(&mut self, value: u8) {
        self.sink.emit(value);
        self.stats.values_emitted += 1;
    }
}
