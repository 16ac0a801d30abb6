//! Clock pacing adapter.

use std::time::Duration;

use bytevm_core::Clock;
use bytevm_core::common::HaltReason;

use crate::common::harness::TestContext;

/// SET r0; SAVE 5; SET r1; SAVE 3; ADD r0, r1; PRN; HALT
const SUM_PROGRAM: [u8; 13] = [
    0x02, 0, 0x04, 5, 0x02, 1, 0x04, 3, 0x0F, 0, 1, 0x06, 0x00,
];

#[test]
fn unpaced_clock_matches_manual_stepping() {
    let mut manual = TestContext::new().load_program(&SUM_PROGRAM);
    let manual_reason = manual.run_until_halt(32);

    let mut clocked = TestContext::new().load_program(&SUM_PROGRAM);
    let mut clock = Clock::with_period(Duration::ZERO);
    let clocked_reason = clock.start(&mut clocked.machine);

    assert_eq!(manual_reason, clocked_reason);
    assert_eq!(manual.output(), clocked.output());
    assert_eq!(manual.machine.regs.pc(), clocked.machine.regs.pc());
    assert_eq!(
        manual.machine.stats.instructions_retired,
        clocked.machine.stats.instructions_retired
    );
}

#[test]
fn paced_clock_still_reaches_halt() {
    let mut ctx = TestContext::new().load_program(&[0x01, 0x06, 0x00]);
    let mut clock = Clock::with_period(Duration::from_millis(1));

    let reason = clock.start(&mut ctx.machine);

    assert_eq!(reason, HaltReason::Requested);
    assert_eq!(ctx.output(), vec![0]);
    assert!(!clock.is_running());
}

#[test]
fn stop_is_idempotent() {
    let mut clock = Clock::with_period(Duration::ZERO);
    clock.stop();
    clock.stop();
    assert!(!clock.is_running());
}

#[test]
fn starting_a_halted_machine_returns_without_stepping() {
    let mut ctx = TestContext::new().load_program(&[0x00]);
    let mut clock = Clock::with_period(Duration::ZERO);

    assert_eq!(clock.start(&mut ctx.machine), HaltReason::Requested);
    let retired = ctx.machine.stats.instructions_retired;

    assert_eq!(clock.start(&mut ctx.machine), HaltReason::Requested);
    assert_eq!(ctx.machine.stats.instructions_retired, retired);
}
