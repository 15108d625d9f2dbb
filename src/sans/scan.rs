//! States processing a scan over a source of records.

use either::Either::{self, Left, Right};

use super::{
    extract::{ExtractError, extract},
    layout::{LayoutError, RecordLayout},
    locate::BitLocation,
};

/// The parameters of a scan: what records look like, where the field lies,
/// and which opcode to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    layout: RecordLayout,
    location: BitLocation,
    target: u8,
}

impl Query {
    /// Construct a query, checking that the field fits within a record.
    pub fn new(
        layout: RecordLayout,
        location: BitLocation,
        target: u8,
    ) -> Result<Self, LayoutError> {
        layout.check(location)?;

        Ok(Self {
            layout,
            location,
            target,
        })
    }

    pub fn layout(&self) -> RecordLayout {
        self.layout
    }

    pub fn location(&self) -> BitLocation {
        self.location
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    /// Decode the field from the bytes of a single record.
    pub fn decode(&self, record: &[u8]) -> Result<u64, ExtractError> {
        extract(self.location, self.layout.field_width(), record)
    }

    /// Whether a decoded field matches the target opcode.
    ///
    /// Only the low 8 bits of the field take part in the comparison.
    pub fn matches(&self, value: u64) -> bool {
        value as u8 == self.target
    }
}

/// The terminal outcome of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanResult {
    /// Absolute index (from the beginning of the source) of the first
    /// matching record.
    Found(u64),
    /// No record from the starting index matched.
    NotFound,
}

impl ScanResult {
    /// The index of the matching record, if any.
    pub fn index(&self) -> Option<u64> {
        match self {
            Self::Found(index) => Some(*index),
            Self::NotFound => None,
        }
    }

    /// The index of the matching record, or `-1` if none matched.
    pub fn sentinel(&self) -> i64 {
        self.index()
            .and_then(|index| i64::try_from(index).ok())
            .unwrap_or(-1)
    }
}

impl From<ScanResult> for Option<u64> {
    fn from(result: ScanResult) -> Self {
        result.index()
    }
}

/// State token to position a scan at its starting record.
#[derive(Debug)]
pub struct Positioning {
    query: Query,
    start: u64,
}

impl Positioning {
    pub fn new(query: Query, start: u64) -> Self {
        Self { query, start }
    }

    /// Transition to another state, given the length of the source in bytes.
    ///
    /// Returns the byte offset of the starting record and a successor state
    /// token, or a terminal result if the starting record lies out of range.
    pub fn advance(self, source_len: u64) -> Either<(u64, Reading), ScanResult> {
        let record_len = self.query.layout.record_len() as u64;

        let reading = self
            .start
            .checked_mul(record_len)
            .and_then(|position| Reading::at(self.query, self.start, position, source_len));

        match reading {
            Some(reading) => Left((reading.position, reading)),
            None => Right(ScanResult::NotFound),
        }
    }
}

/// State token to compare the field of a single record.
#[derive(Debug)]
pub struct Reading {
    query: Query,
    index: u64,
    position: u64,
    source_len: u64,
}

impl Reading {
    /// Construct a token for the record at `position`, if it may be read.
    ///
    /// A record is only read while another record's worth of bytes follows
    /// it, so the final record of a source is never compared.
    fn at(query: Query, index: u64, position: u64, source_len: u64) -> Option<Self> {
        let limit = source_len.checked_sub(query.layout.record_len() as u64)?;

        (position < limit).then_some(Self {
            query,
            index,
            position,
            source_len,
        })
    }

    /// Absolute index of the record to be read.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Byte offset of the record to be read.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Number of bytes to read for this record.
    pub fn record_len(&self) -> usize {
        self.query.layout.record_len()
    }

    /// Transition to another state by comparing the field of a record.
    ///
    /// Returns the decoded field value, and either a successor state token for
    /// the following record or a terminal result.
    pub fn advance(
        self,
        record: &[u8],
    ) -> Result<(u64, Either<Self, ScanResult>), ExtractError> {
        let value = self.query.decode(record)?;

        let successor = if self.query.matches(value) {
            Right(ScanResult::Found(self.index))
        } else {
            let position = self.position + self.record_len() as u64;

            match Self::at(self.query, self.index + 1, position, self.source_len) {
                Some(reading) => Left(reading),
                None => Right(ScanResult::NotFound),
            }
        };

        Ok((value, successor))
    }
}
