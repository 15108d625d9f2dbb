//! Extraction of bit-packed fields from record bytes.

use thiserror::Error;

use super::locate::BitLocation;

/// The widest field that can be extracted, in bits.
pub const MAX_WIDTH: u32 = u64::BITS;

/// An error extracting a field.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// Field width is zero or wider than [`MAX_WIDTH`].
    #[error("Invalid field width ({0} bits).")]
    InvalidWidth(u32),
    /// The field extends past the end of the data.
    #[error("Field needs {needed} bytes, but only {available} are available.")]
    OutOfBounds { needed: usize, available: usize },
}

/// Extract a field of `width` bits starting at `location` from a slice of
/// bytes.
///
/// Bits are read most significant first, and the value is returned
/// right-aligned. Bytes outside the field do not affect the result.
pub fn extract(location: BitLocation, width: u32, data: &[u8]) -> Result<u64, ExtractError> {
    if width == 0 || width > MAX_WIDTH {
        Err(ExtractError::InvalidWidth(width))?;
    }

    let lead = u32::from(location.bit_position()) + 1; // Bits taken from the first byte.
    let span = 1 + width.saturating_sub(lead).div_ceil(8) as usize;

    let start = location.byte_index();
    let needed = start.saturating_add(span);

    let bytes = data.get(start..needed).ok_or(ExtractError::OutOfBounds {
        needed,
        available: data.len(),
    })?;

    // A 64-bit field starting low in its first byte accumulates up to 71 bits.
    let mut value = u128::from(bytes[0] & ((1u16 << lead) - 1) as u8);
    let mut accumulated = lead;

    for &b in &bytes[1..] {
        value = (value << 8) | u128::from(b);
        accumulated += 8;
    }

    // Drop trailing bits that belong to whatever follows the field.
    Ok((value >> (accumulated - width)) as u64)
}
