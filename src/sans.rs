//! Field arithmetic and the scan finite-state machine.
//!
//! Nothing in this module performs I/O. See [`crate::avec`] for scanners
//! covering slices, readers and files.
//!
//! # Addressing
//!
//! A field is addressed by its bit offset from the start of a record, counted
//! left to right. Within a byte, bits are numbered from the most significant
//! (7) down to the least significant (0):
//!
//! ```text
//!         byte 0               byte 1
//!  7 6 5 4 3 2 1 0  |  7 6 5 4 3 2 1 0
//!  | | |               | |
//!  | | offset 2        | offset 9
//!  | offset 1          offset 8
//!  offset 0
//! ```
//!
//! [`locate`](locate::locate) translates an offset into a [`BitLocation`],
//! which [`extract`](extract::extract) then reads from a record.
//!
//! # Scanning
//!
//! A scan is represented by non-copy state tokens. Begin with a
//! [`Positioning`] token, and advance it with the length of the source. This
//! returns the byte offset of the first record to read along with a
//! [`Reading`] token, or a terminal [`ScanResult`]. Advance each `Reading`
//! token with the bytes of its record until a terminal result is returned.
//!
//! Implementations remain responsible for seeking to the returned offset and
//! supplying records in order.

pub mod extract;
pub mod layout;
pub mod locate;
pub mod scan;

pub use layout::RecordLayout;
pub use locate::BitLocation;
pub use scan::{Positioning, Query, Reading, ScanResult};
