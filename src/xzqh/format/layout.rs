//! Byte layout of the binary region format.
//!
//! ```text
//! Header
//! [4 bytes]  Magic `XZQH`
//! [2 bytes]  Format version (u16)
//! [2 bytes]  Flags (u16, reserved, 0)
//! [4 bytes]  Offset of the root region vector (u32)
//! [4 bytes]  Total number of region tables (u32)
//!
//! Region vector
//! [4 bytes]      Count (u32)
//! [count * 4]    Region table offsets (u32)
//!
//! Region table (32 bytes)
//! [4 bytes]  Name string offset
//! [4 bytes]  Code string offset
//! [4 bytes]  Children vector offset, 0 if absent
//! [1 byte ]  Level (0 = not recorded)
//! [1 byte ]  Flags (bit 0: center present)
//! [2 bytes]  Reserved
//! [8 bytes]  Longitude (f64)
//! [8 bytes]  Latitude (f64)
//!
//! String
//! [4 bytes]  Byte length (u32)
//! [N bytes]  UTF-8 text
//! ```
//!
//! All integers are little-endian and all offsets are absolute. Offset 0
//! lies inside the header, so it doubles as the "absent" marker.

use byteorder::{ByteOrder, LittleEndian};
use log::trace;
use crate::xzqh::types::error::{XzqhError, Result};
use crate::xzqh::utils;

pub const MAGIC: [u8; 4] = *b"XZQH";
pub const VERSION: u16 = 1;
pub const HEADER_LEN: usize = 16;
pub const REGION_TABLE_LEN: usize = 32;

pub const FLAG_HAS_CENTER: u8 = 0x01;

/// Field positions inside a region table.
pub mod field {
    pub const NAME: usize = 0;
    pub const CODE: usize = 4;
    pub const CHILDREN: usize = 8;
    pub const LEVEL: usize = 12;
    pub const FLAGS: usize = 13;
    pub const RESERVED: usize = 14;
    pub const LONGITUDE: usize = 16;
    pub const LATITUDE: usize = 24;
}

const _: () = assert!(REGION_TABLE_LEN == field::LATITUDE + 8);

/// Field positions inside the header.
pub mod header_field {
    pub const MAGIC: usize = 0;
    pub const VERSION: usize = 4;
    pub const FLAGS: usize = 6;
    pub const ROOT: usize = 8;
    pub const REGION_COUNT: usize = 12;
}

/// Parsed file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: u16,
    pub root_offset: usize,
    pub region_count: usize,
}

impl Header {
    /// Parses and validates the header at the start of `buf`.
    pub fn parse(buf: &[u8]) -> Result<Self> {
        let raw = utils::checked_slice(buf, 0, HEADER_LEN, "header")?;

        let mut found = [0u8; 4];
        found.copy_from_slice(&raw[header_field::MAGIC..header_field::MAGIC + 4]);
        if found != MAGIC {
            return Err(XzqhError::BadMagic { expected: MAGIC, found });
        }

        let version = LittleEndian::read_u16(&raw[header_field::VERSION..]);
        if version != VERSION {
            return Err(XzqhError::UnsupportedVersion(version));
        }

        let flags = LittleEndian::read_u16(&raw[header_field::FLAGS..]);
        if flags != 0 {
            return Err(XzqhError::InvalidFormat(format!("Unknown header flags: {:#06x}", flags)));
        }

        let root_offset = LittleEndian::read_u32(&raw[header_field::ROOT..]) as usize;
        let region_count = LittleEndian::read_u32(&raw[header_field::REGION_COUNT..]) as usize;
        trace!(
            "Header: version={}, root_offset={}, region_count={}",
            version, root_offset, region_count
        );

        Ok(Self { version, root_offset, region_count })
    }
}
