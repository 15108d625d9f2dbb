//! Translation of bit offsets into byte and bit positions.

use thiserror::Error;

/// An error locating a field.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LocateError {
    /// The bit offset cannot be decomposed into a byte and bit position.
    #[error("Malformed bit offset ({0}).")]
    MalformedOffset(i64),
    /// The bit position lies outside a byte.
    #[error("Bit position ({0}) is not within 0..=7.")]
    BitPosition(u8),
}

/// The byte holding a field's most significant bit, and that bit's position
/// within the byte (7 for the most significant, 0 for the least).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitLocation {
    byte_index: usize,
    bit_position: u8,
}

impl BitLocation {
    /// Construct a location from its parts.
    pub fn new(byte_index: usize, bit_position: u8) -> Result<Self, LocateError> {
        if bit_position > 7 {
            Err(LocateError::BitPosition(bit_position))?;
        }

        Ok(Self {
            byte_index,
            bit_position,
        })
    }

    pub fn byte_index(&self) -> usize {
        self.byte_index
    }

    pub fn bit_position(&self) -> u8 {
        self.bit_position
    }

    /// The bit offset this location was derived from.
    pub fn bit_offset(&self) -> u64 {
        (self.byte_index as u64)
            .saturating_mul(8)
            .saturating_add(u64::from(7 - self.bit_position))
    }
}

/// Locate the most significant bit of a field from its bit offset.
///
/// The offset is relative to the start of a record, so the same location
/// applies to every record of a source.
pub fn locate(field_offset_bits: i64) -> Result<BitLocation, LocateError> {
    let malformed = LocateError::MalformedOffset(field_offset_bits);

    if field_offset_bits < 0 {
        Err(malformed)?;
    }

    let byte_index = usize::try_from(field_offset_bits / 8).map_err(|_| malformed)?;
    let bit_position = 7 - (field_offset_bits % 8) as u8;

    Ok(BitLocation {
        byte_index,
        bit_position,
    })
}
