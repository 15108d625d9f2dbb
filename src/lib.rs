#![no_std]

//! A decoder and scanner for bit-packed fields in fixed-length binary state
//! records.
//!
//! A source is a contiguous run of equally sized records with no header. Each
//! record carries a field at a fixed bit offset and width. Statescan locates
//! that field, decodes it from a record, and searches a source for the first
//! record (from a starting index) whose field matches a target opcode.
//!
//! Most users should begin with the functions in the [`avec`] module. The
//! [`sans`] module exposes the underlying arithmetic and the scan state
//! machine, for applications that manage their own I/O.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader- and path-based scanners (default).

pub mod avec;
pub mod sans;
