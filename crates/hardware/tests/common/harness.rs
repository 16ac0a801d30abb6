//! Test harness.

use bytevm_core::common::HaltReason;
use bytevm_core::core::Step;
use bytevm_core::sim::loader;
use bytevm_core::{Config, Machine};

use crate::common::mocks::sink::CaptureSink;

/// A machine wired to a capturing output sink, plus run helpers.
pub struct TestContext {
    /// The machine under test.
    pub machine: Machine,
    output: CaptureSink,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a zeroed machine with default configuration and a captured
    /// output sink.
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let output = CaptureSink::default();
        let machine = Machine::with_sink(&Config::default(), Box::new(output.handle()));
        Self { machine, output }
    }

    /// Installs `image` at address 0.
    pub fn load_program(mut self, image: &[u8]) -> Self {
        loader::install(&mut self.machine, image, 0).expect("program fits in memory");
        self
    }

    /// Steps until the machine halts, panicking if it runs away.
    pub fn run_until_halt(&mut self, max_steps: usize) -> HaltReason {
        for _ in 0..max_steps {
            if let Step::Halted(reason) = self.machine.step() {
                return reason;
            }
        }
        panic!("machine did not halt within {max_steps} steps");
    }

    /// Everything PRN emitted so far, in order.
    pub fn output(&self) -> Vec<u8> {
        self.output.values()
    }
}
