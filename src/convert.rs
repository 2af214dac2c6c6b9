//! Base-Conversion and Hex Codecs
//!
//! Reshapes an opaque byte buffer into other textual forms:
//!
//! - **Quantization**: per-byte linear rescaling from base 256 into a
//!   smaller target base. This is lossy and one-way; it exists to render
//!   a seed for display (dice rolls, card draws, custom alphabets), not
//!   to round-trip it.
//! - **Hex**: exact, lossless byte↔string conversion.

use crate::error::{Error, Result};

// ============================================================================
// Quantization
// ============================================================================

/// Rescale each byte into a digit of `base`.
///
/// Base 256 is the identity. For smaller bases each byte `v` maps to
/// `round(v / 255 * (base - 1))`, so the output has exactly one digit per
/// input byte and every digit is below `base`.
///
/// Returns [`Error::InvalidBase`] when `base` is outside `[2, 256]`.
pub fn to_base(base: usize, bytes: &[u8]) -> Result<Vec<u8>> {
    if !(2..=256).contains(&base) {
        return Err(Error::InvalidBase(base));
    }
    if base == 256 {
        return Ok(bytes.to_vec());
    }
    Ok(bytes
        .iter()
        .map(|&v| (f64::from(v) / 255.0 * (base - 1) as f64).round() as u8)
        .collect())
}

/// Render a byte buffer through a caller-supplied digit alphabet.
///
/// Quantizes into `base`, then maps each digit through `to_text` and
/// concatenates the fragments with no separator. The mapping function
/// owns each fragment; this function owns the assembled string.
pub fn to_alphabet<F>(bytes: &[u8], base: usize, to_text: F) -> Result<String>
where
    F: Fn(u8) -> String,
{
    let digits = to_base(base, bytes)?;
    Ok(digits.into_iter().map(to_text).collect())
}

/// Render a byte buffer as decimal integers in `[low, high]`.
///
/// Quantizes into base `high - low + 1`, shifts every digit up by `low`,
/// and joins the decimal renderings with `separator`.
///
/// Returns [`Error::InvalidIntRange`] when `low >= high`.
pub fn to_ints(bytes: &[u8], low: u8, high: u8, separator: &str) -> Result<String> {
    if low >= high {
        return Err(Error::InvalidIntRange { low, high });
    }
    let base = usize::from(high) - usize::from(low) + 1;
    let digits = to_base(base, bytes)?;
    Ok(digits
        .iter()
        .map(|&d| (u16::from(d) + u16::from(low)).to_string())
        .collect::<Vec<_>>()
        .join(separator))
}

// ============================================================================
// Hex
// ============================================================================

/// Lowercase hex, two characters per byte, no separators or prefix.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Exact inverse of [`to_hex`].
///
/// Fails on odd length or any non-hex digit; never returns partial bytes.
pub fn from_hex(s: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(s)?)
}

// ============================================================================
// Tests
// ============================================================================
