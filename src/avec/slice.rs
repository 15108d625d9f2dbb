//! Slice-based scanner implementation.

use either::Either::{Left, Right};
use thiserror::Error;

use crate::sans::{
    BitLocation, Positioning, Query, RecordLayout, ScanResult,
    extract::{ExtractError, extract},
};

/// Errors occurring while scanning a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// A field could not be extracted from a record.
    #[error("Could not extract field: {0}")]
    Extract(#[from] ExtractError),
}

/// Scan the records of a slice for the first field matching a query, starting
/// at record `start`.
///
/// This method is also re-exported as `statescan::avec::scan_slice`.
pub fn scan(data: &[u8], query: Query, start: u64) -> Result<ScanResult, Error> {
    let source_len = data.len() as u64;

    tracing::debug!(
        start,
        record_len = query.layout().record_len(),
        source_len,
        "scanning slice"
    );

    let mut reading = match Positioning::new(query, start).advance(source_len) {
        Left((_, reading)) => reading,
        Right(result) => return Ok(result),
    };

    let result = loop {
        let i = reading.position() as usize;
        let record = &data[i..i + reading.record_len()];
        let index = reading.index();

        let (value, successor) = reading.advance(record)?;
        tracing::trace!(index, value, "compared record");

        reading = match successor {
            Left(reading) => reading,
            Right(result) => break result,
        };
    };

    tracing::debug!(?result, "scan complete");
    Ok(result)
}

/// Decode the field of every full record in a slice.
///
/// Unlike [`scan`], this visits the final record too. Trailing bytes that do
/// not form a full record are ignored.
pub fn values(
    data: &[u8],
    layout: RecordLayout,
    location: BitLocation,
) -> impl Iterator<Item = Result<u64, ExtractError>> + '_ {
    data.chunks_exact(layout.record_len())
        .map(move |record| extract(location, layout.field_width(), record))
}
