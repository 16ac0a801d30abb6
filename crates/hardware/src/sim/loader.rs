//! Program loading.
//!
//! A program is just bytes poked into memory before the clock starts. This
//! module installs byte images, reads raw image files from disk, and parses
//! the hand-authorable listing format: one instruction byte per line,
//! written as 8 binary digits, with `#` comments.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::common::constants::MEMORY_SIZE;
use crate::core::Machine;

/// Failures installing or parsing a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image does not fit between `base` and the end of memory.
    #[error("{len}-byte image does not fit at base {base:#04x}")]
    ImageTooLarge {
        /// Image length in bytes.
        len: usize,
        /// Requested install address.
        base: u8,
    },

    /// A listing line is not an 8-digit binary byte.
    #[error("listing line {line}: expected 8 binary digits, found {text:?}")]
    BadListing {
        /// One-based line number.
        line: usize,
        /// Offending text, after comment stripping.
        text: String,
    },

    /// The image file could not be read.
    #[error("failed to read program image")]
    Io(#[from] std::io::Error),
}

/// Pokes `image` into memory starting at `base`.
///
/// Fails without writing anything if the image would run past address 255.
/// Installing the same image twice is indistinguishable from installing it
/// once.
pub fn install(machine: &mut Machine, image: &[u8], base: u8) -> Result<(), LoadError> {
    if base as usize + image.len() > MEMORY_SIZE {
        return Err(LoadError::ImageTooLarge {
            len: image.len(),
            base,
        });
    }
    for (offset, &byte) in image.iter().enumerate() {
        machine.poke(base + offset as u8, byte);
    }
    debug!(len = image.len(), base, "program installed");
    Ok(())
}

/// Reads a raw byte image from disk.
pub fn load_binary(path: &Path) -> Result<Vec<u8>, LoadError> {
    Ok(fs::read(path)?)
}

/// Parses a text listing into a byte image.
///
/// Each line carries one instruction byte as exactly 8 binary digits. Blank
/// lines are skipped and `#` comments run to end of line.
pub fn parse_listing(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.split_once('#').map_or(raw, |(code, _)| code).trim();
        if line.is_empty() {
            continue;
        }
        if line.len() != 8 || !line.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(LoadError::BadListing {
                line: index + 1,
                text: line.to_string(),
            });
        }
        let byte = u8::from_str_radix(line, 2).map_err(|_| LoadError::BadListing {
            line: index + 1,
            text: line.to_string(),
        })?;
        image.push(byte);
    }
    Ok(image)
}
