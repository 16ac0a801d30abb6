//! Program installation and image parsing.

use std::io::Write;

use bytevm_core::common::HaltReason;
use bytevm_core::sim::loader::{self, LoadError};

use crate::common::harness::TestContext;

#[test]
fn installs_at_the_requested_base() {
    let mut ctx = TestContext::new();
    loader::install(&mut ctx.machine, &[1, 2, 3], 0x80).expect("image fits");

    assert_eq!(ctx.machine.mem.read(0x80), 1);
    assert_eq!(ctx.machine.mem.read(0x81), 2);
    assert_eq!(ctx.machine.mem.read(0x82), 3);
    assert_eq!(ctx.machine.mem.read(0x7F), 0);
    assert_eq!(ctx.machine.mem.read(0x83), 0);
}

#[test]
fn an_image_may_end_exactly_at_the_top() {
    let mut ctx = TestContext::new();
    loader::install(&mut ctx.machine, &[7, 8], 254).expect("image fits");
    assert_eq!(ctx.machine.mem.read(254), 7);
    assert_eq!(ctx.machine.mem.read(255), 8);
}

#[test]
fn rejects_images_that_run_past_the_end() {
    let mut ctx = TestContext::new();
    let err = loader::install(&mut ctx.machine, &[1, 2, 3], 254).expect_err("image too large");

    assert!(matches!(
        err,
        LoadError::ImageTooLarge { len: 3, base: 254 }
    ));
    // Nothing was written.
    assert_eq!(ctx.machine.mem.read(254), 0);
    assert_eq!(ctx.machine.mem.read(255), 0);
}

#[test]
fn a_full_memory_image_fits_exactly() {
    let mut ctx = TestContext::new();
    let image = [0x0B; 256];
    loader::install(&mut ctx.machine, &image, 0).expect("image fits");
    assert_eq!(ctx.machine.mem.read(255), 0x0B);
}

#[test]
fn parses_a_listing_with_comments_and_blanks() {
    let text = "\
# prints the zero register
00000001  # INIT

00000110  # PRN
00000000  # HALT
";
    let image = loader::parse_listing(text).expect("valid listing");
    assert_eq!(image, vec![0x01, 0x06, 0x00]);
}

#[test]
fn rejects_short_binary_lines() {
    let err = loader::parse_listing("101\n").expect_err("short line");
    assert!(matches!(err, LoadError::BadListing { line: 1, .. }));
}

#[test]
fn rejects_non_binary_digits_with_the_line_number() {
    let err = loader::parse_listing("00000001\n0000002x\n").expect_err("bad digit");
    assert!(matches!(err, LoadError::BadListing { line: 2, .. }));
}

#[test]
fn reads_raw_images_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(&[0x01, 0x06, 0x00]).expect("write image");

    let image = loader::load_binary(file.path()).expect("readable image");
    assert_eq!(image, vec![0x01, 0x06, 0x00]);
}

#[test]
fn missing_files_surface_as_io_errors() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = loader::load_binary(&dir.path().join("nope.bin")).expect_err("missing file");
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn a_listing_program_runs_end_to_end() {
    let text = "00000001\n00000110\n00000000\n";
    let image = loader::parse_listing(text).expect("valid listing");

    let mut ctx = TestContext::new().load_program(&image);
    assert_eq!(ctx.run_until_halt(8), HaltReason::Requested);
    assert_eq!(ctx.output(), vec![0]);
}
