//! Fixed-Width Bit-Plane Adder
//!
//! Sums a set of non-negative integers over a fixed binary register using
//! column-by-column carry propagation instead of native wide addition:
//! - Each addend is treated as a `width`-bit register
//! - For every bit position, the column of addend bits is counted together
//!   with the running result at and above that position
//! - The count is folded back into the result with shifted XORs, so a carry
//!   spanning several positions resolves across later iterations as the
//!   evolving result is re-read
//!
//! The externally observable output is `(Σ addends) mod 2^width`, rendered
//! as a bit string with the most significant bit first. Overflow past
//! `width` bits wraps silently.

use tracing::warn;

/// Round a real value to a fixed-point integer at the given precision
///
/// `precision` is a power of ten (1, 10, 1e9, ...). Returns
/// `floor(value * precision + 0.5)` - round half up. The float-to-integer
/// conversion saturates: negative inputs clamp to 0 and scaled values beyond
/// `u64::MAX` clamp to `u64::MAX`.
pub fn fixed_point_round(value: f64, precision: f64) -> u64 {
    (value * precision + 0.5) as u64
}

/// Sum `values` over a `width`-bit register and render the result as a bit
/// string, most significant bit first
///
/// Returns exactly `width` characters of `'0'`/`'1'` representing
/// `(Σ values) mod 2^width`. Each addend is assumed to fit in `width` bits;
/// high bits of oversized addends are ignored. `width` must be in `1..=64`
/// (normally [`REGISTER_WIDTH`](crate::checksum::REGISTER_WIDTH); smaller
/// registers exist for the unit tests).
///
/// An empty slice is caller misuse. The function logs a warning and returns
/// the all-zero register rather than panicking.
pub fn sum_as_bits(values: &[u64], width: u32) -> String {
    debug_assert!(
        (1..=u64::BITS).contains(&width),
        "register width must be within 1..=64, got {width}"
    );
    if values.is_empty() {
        warn!(width, "no addends supplied; returning an all-zero register");
        return "0".repeat(width as usize);
    }

    let mask = if width == u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    };

    let mut result: u64 = 0;
    for i in 0..width {
        // Column count: bit i of every addend, plus the running result at
        // and above bit i. The latter carries forward every correction the
        // previous iterations deferred.
        let column: u64 = values.iter().map(|v| (v >> i) & 1).sum();
        let count = (column + (result >> i)) & mask;
        // Fold the count back in at position i; bits above i become the
        // carries the next iterations will re-read.
        result ^= ((count ^ (result >> i)) << i) & mask;
    }

    format!("{:0width$b}", result, width = width as usize)
}
