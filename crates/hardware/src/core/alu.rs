//! Arithmetic logic unit.
//!
//! Pure byte arithmetic with 8-bit wraparound. Operations take operand
//! values, never addresses; the execution engine resolves registers before
//! calling in here. Division is the one operation that can refuse to produce
//! a result, and the caller decides what that refusal means.

/// Returns `(a + b) mod 256`.
#[inline]
pub const fn add(a: u8, b: u8) -> u8 {
    a.wrapping_add(b)
}

/// Returns `(a - b) mod 256`, wrapping on negative results.
#[inline]
pub const fn sub(a: u8, b: u8) -> u8 {
    a.wrapping_sub(b)
}

/// Returns `(a * b) mod 256`.
#[inline]
pub const fn mul(a: u8, b: u8) -> u8 {
    a.wrapping_mul(b)
}

/// Integer quotient of `a / b`, or `None` when `b` is zero.
#[inline]
pub const fn div(a: u8, b: u8) -> Option<u8> {
    if b == 0 { None } else { Some(a / b) }
}

/// Returns `(a + 1) mod 256`.
///
/// Also the primitive by which the program counter advances: instruction
/// widths are applied as repeated increments, one per consumed byte.
#[inline]
pub const fn inc(a: u8) -> u8 {
    a.wrapping_add(1)
}

/// Returns `(a - 1) mod 256`.
#[inline]
pub const fn dec(a: u8) -> u8 {
    a.wrapping_sub(1)
}
