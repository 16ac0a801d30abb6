//! Execution statistics collection and reporting.
//!
//! Tracks how much work one machine has done. It provides:
//! 1. **Progress:** Instructions retired and PRN values emitted.
//! 2. **Faults:** Count of fatal conditions taken.
//! 3. **Timing:** Wall-clock runtime since machine construction.

use std::time::Instant;

/// Counters for one machine's execution history.
#[derive(Debug, Clone)]
pub struct MachineStats {
    start_time: Instant,
    /// Instructions that completed. HALT counts; a faulting instruction
    /// does not.
    pub instructions_retired: u64,
    /// PRN values handed to the output sink.
    pub values_emitted: u64,
    /// Fatal conditions taken.
    pub traps_taken: u64,
}

impl Default for MachineStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            values_emitted: 0,
            traps_taken: 0,
        }
    }
}

impl MachineStats {
    /// Prints a run summary to stdout.
    pub fn print(&self) {
        let elapsed = self.start_time.elapsed();
        println!("instructions retired : {}", self.instructions_retired);
        println!("values emitted       : {}", self.values_emitted);
        println!("traps taken          : {}", self.traps_taken);
        println!("wall clock           : {:.3}s", elapsed.as_secs_f64());
    }
}
