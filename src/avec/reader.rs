//! Reader-based scanner implementation.
//!
//! _Requires Cargo feature `std`._

use std::{
    fs::File,
    io::{self, BufReader, ErrorKind, Read, Seek, SeekFrom},
    path::Path,
    vec,
};

use either::Either::{Left, Right};
use thiserror::Error;

use crate::sans::{Positioning, Query, ScanResult, extract::ExtractError};

extern crate std;

/// Errors occurring while scanning a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A field could not be extracted from a record.
    #[error("Could not extract field: {0}")]
    Extract(#[from] ExtractError),
}

/// Scan the records of a reader for the first field matching a query,
/// starting at record `start`.
///
/// The reader is left positioned after the last record read.
///
/// This method is also re-exported as `statescan::avec::scan_reader`.
///
/// _Requires Cargo feature `std`._
pub fn scan(r: &mut (impl Read + Seek), query: Query, start: u64) -> Result<ScanResult, Error> {
    let source_len = r.seek(SeekFrom::End(0))?;

    tracing::debug!(
        start,
        record_len = query.layout().record_len(),
        source_len,
        "scanning reader"
    );

    let (position, mut reading) = match Positioning::new(query, start).advance(source_len) {
        Left(state) => state,
        Right(result) => return Ok(result),
    };

    r.seek(SeekFrom::Start(position))?;

    let mut record = vec![0; reading.record_len()];

    let result = loop {
        record.fill(0);

        if let Err(err) = r.read_exact(&mut record) {
            if err.kind() != ErrorKind::UnexpectedEof {
                Err(err)?;
            }

            // The source shrank underneath the scan; a partial record is
            // never a candidate.
            tracing::warn!(index = reading.index(), "source ended mid-record");
            break ScanResult::NotFound;
        }

        let index = reading.index();

        let (value, successor) = reading.advance(&record)?;
        tracing::trace!(index, value, "compared record");

        reading = match successor {
            Left(reading) => reading,
            Right(result) => break result,
        };
    };

    tracing::debug!(?result, "scan complete");
    Ok(result)
}

/// Scan the records of a file for the first field matching a query, starting
/// at record `start`.
///
/// The file is opened read-only, and closed before returning.
///
/// _Requires Cargo feature `std`._
pub fn scan_path(path: impl AsRef<Path>, query: Query, start: u64) -> Result<ScanResult, Error> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "opening source");

    let mut file = BufReader::new(File::open(path)?);
    scan(&mut file, query, start)
}
