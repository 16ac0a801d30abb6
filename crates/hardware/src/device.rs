//! Output device abstraction.
//!
//! PRN emits the selected register's value to an external sink. The sink is
//! a one-way collaborator: values go out, nothing is queryable back. The
//! default sink prints to stdout; tests substitute a capturing sink.

use std::fmt;

/// Receiver for values emitted by the PRN instruction.
pub trait OutputSink: fmt::Debug {
    /// Accepts one emitted byte value.
    fn emit(&mut self, value: u8);
}

/// Sink that prints each value in decimal, one per line, to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, value: u8) {
        println!("{value}");
    }
}
