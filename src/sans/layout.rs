//! The shape of records in a source.

use thiserror::Error;

use super::{extract::MAX_WIDTH, locate::BitLocation};

/// An error describing a layout that cannot be scanned.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Records must hold at least one byte.
    #[error("Record length must be greater than zero.")]
    ZeroRecordLength,
    /// Field width is zero or wider than the widest extractable field.
    #[error("Invalid field width ({0} bits).")]
    InvalidWidth(u32),
    /// The field does not fit within a single record.
    #[error("Field ending at bit {end} lies outside a record of {record_bits} bits.")]
    FieldOutsideRecord { end: u64, record_bits: u64 },
}

/// Record length (in bytes) and field width (in bits) shared by every record
/// of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordLayout {
    record_len: usize,
    field_width: u32,
}

impl RecordLayout {
    pub fn new(record_len: usize, field_width: u32) -> Result<Self, LayoutError> {
        if record_len == 0 {
            Err(LayoutError::ZeroRecordLength)?;
        }

        if field_width == 0 || field_width > MAX_WIDTH {
            Err(LayoutError::InvalidWidth(field_width))?;
        }

        Ok(Self {
            record_len,
            field_width,
        })
    }

    /// Length of a single record, in bytes.
    pub fn record_len(&self) -> usize {
        self.record_len
    }

    /// Width of the field, in bits.
    pub fn field_width(&self) -> u32 {
        self.field_width
    }

    /// Check that a field at `location` lies entirely within a record.
    pub fn check(&self, location: BitLocation) -> Result<(), LayoutError> {
        let end = location
            .bit_offset()
            .saturating_add(u64::from(self.field_width));
        let record_bits = (self.record_len as u64).saturating_mul(8);

        if end > record_bits {
            Err(LayoutError::FieldOutsideRecord { end, record_bits })?;
        }

        Ok(())
    }
}
