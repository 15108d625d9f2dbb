//! Convenience interfaces for common scanning patterns.
//!
//! The functions in this module drive the [`crate::sans`] state machine over
//! data slices, readers and files.
//!
//! # Example
//!
//! ```
//! use statescan::{avec, sans};
//!
//! // Six-byte records, with an opcode packed into bits 4..12.
//! let layout = sans::RecordLayout::new(6, 8)?;
//! let location = sans::locate::locate(4)?;
//! let query = sans::Query::new(layout, location, 0x2A)?;
//!
//! match avec::scan_path("states.bin", query, 0)? {
//!     sans::ScanResult::Found(index) => println!("opcode found in record {index}"),
//!     sans::ScanResult::NotFound => println!("opcode not found"),
//! }
//! ```

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::{scan as scan_reader, scan_path};
pub use slice::scan as scan_slice;
