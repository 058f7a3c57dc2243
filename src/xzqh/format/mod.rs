//! Binary region format: layout, verification, views and encoder.
//!
//! # Architecture
//!
//! ```text
//! Buffer:
//! ┌─────────────────┐
//! │  Header (16 B)  │ ← layout::Header::parse()
//! ├─────────────────┤
//! │  Root vector    │ ← Data::root()
//! ├─────────────────┤
//! │  Region tables, │ ← Region::{name, code, center, children}
//! │  strings and    │
//! │  child vectors  │
//! └─────────────────┘
//! ```
//!
//! Every reference is an absolute offset, so any node can be read without
//! touching the bytes of its siblings or their subtrees.

pub mod builder;
pub mod layout;
pub mod verify;
pub mod view;

pub use verify::{check, verify};
pub use view::{Data, Region, Regions, RegionsIter};

/// Returns a view positioned at the document root.
///
/// The buffer must already have passed [`verify`]; on anything else the
/// accessors of the returned view may panic.
pub fn get_root(buf: &[u8]) -> Data<'_> {
    Data::new_unchecked(buf)
}
