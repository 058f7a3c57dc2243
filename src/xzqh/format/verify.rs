//! Structural verification of untrusted region buffers.
//!
//! Verification walks every region table once with an explicit stack and
//! checks that:
//! - the header carries the `XZQH` tag and a supported version
//! - every offset and length stays inside the buffer
//! - strings are valid UTF-8 and names are non-empty
//! - level and flag bytes hold known values
//! - each table is reached exactly once (no sharing, no cycles) and the
//!   total matches the count recorded in the header
//!
//! Nesting depth is not limited: the walk uses a heap stack, and the
//! exactly-once rule already excludes cycles.
//!
//! A buffer that passes can be read through the views without any further
//! checks.

use std::collections::HashSet;
use byteorder::{ByteOrder, LittleEndian};
use log::{debug, trace};

use super::layout::{field, Header, FLAG_HAS_CENTER, HEADER_LEN, REGION_TABLE_LEN};
use crate::xzqh::types::error::{XzqhError, Result};
use crate::xzqh::types::models::Level;
use crate::xzqh::utils;

/// Returns `true` if `buf` is a well-formed region buffer.
pub fn verify(buf: &[u8]) -> bool {
    match check(buf) {
        Ok(()) => true,
        Err(e) => {
            debug!("Buffer verification failed: {}", e);
            false
        }
    }
}

/// Verifies `buf`, reporting the first structural problem found.
pub fn check(buf: &[u8]) -> Result<()> {
    let header = Header::parse(buf)?;

    let mut seen: HashSet<usize> = HashSet::with_capacity(header.region_count.min(buf.len() / REGION_TABLE_LEN));
    let mut stack: Vec<(usize, usize)> = vec![(header.root_offset, 1)];
    let mut max_depth = 0;

    while let Some((vector_offset, depth)) = stack.pop() {
        max_depth = max_depth.max(depth);
        let entries = check_vector(buf, vector_offset)?;
        for slot in entries.chunks_exact(4) {
            let region_offset = LittleEndian::read_u32(slot) as usize;
            if region_offset < HEADER_LEN {
                return Err(XzqhError::InvalidFormat(format!(
                    "Region offset {} points into the header",
                    region_offset
                )));
            }
            if !seen.insert(region_offset) {
                return Err(XzqhError::InvalidFormat(format!(
                    "Region at offset {} is referenced more than once",
                    region_offset
                )));
            }
            if seen.len() > header.region_count {
                return Err(XzqhError::CountMismatch {
                    item_type: "regions",
                    expected: header.region_count as u64,
                    found: seen.len() as u64,
                });
            }

            if let Some(children) = check_region(buf, region_offset)? {
                stack.push((children, depth + 1));
            }
        }
    }

    if seen.len() != header.region_count {
        return Err(XzqhError::CountMismatch {
            item_type: "regions",
            expected: header.region_count as u64,
            found: seen.len() as u64,
        });
    }

    debug!(
        "Verified region buffer: {} bytes, {} regions, {} levels deep",
        buf.len(),
        seen.len(),
        max_depth
    );
    Ok(())
}

/// Checks a region vector and returns its slot bytes.
fn check_vector(buf: &[u8], offset: usize) -> Result<&[u8]> {
    if offset < HEADER_LEN {
        return Err(XzqhError::InvalidFormat(format!(
            "Region vector offset {} points into the header",
            offset
        )));
    }
    let count = utils::checked_u32(buf, offset, "region vector length")? as usize;
    let len = count.checked_mul(4).ok_or_else(|| {
        XzqhError::InvalidFormat(format!("Region vector length {} overflows", count))
    })?;
    trace!("Region vector at {}: {} entries", offset, count);
    utils::checked_slice(buf, offset + 4, len, "region vector entries")
}

/// Checks one region table and returns its children vector offset, if any.
fn check_region(buf: &[u8], offset: usize) -> Result<Option<usize>> {
    let table = utils::checked_slice(buf, offset, REGION_TABLE_LEN, "region table")?;

    let name_offset = LittleEndian::read_u32(&table[field::NAME..]) as usize;
    let name = check_str(buf, name_offset, "region name")?;
    if name.is_empty() {
        return Err(XzqhError::EmptyName { offset: offset as u64 });
    }

    let code_offset = LittleEndian::read_u32(&table[field::CODE..]) as usize;
    check_str(buf, code_offset, "region code")?;

    Level::from_byte(table[field::LEVEL])?;

    let flags = table[field::FLAGS];
    if flags & !FLAG_HAS_CENTER != 0 {
        return Err(XzqhError::InvalidFormat(format!(
            "Unknown region flags {:#04x} at offset {}",
            flags, offset
        )));
    }
    if LittleEndian::read_u16(&table[field::RESERVED..]) != 0 {
        return Err(XzqhError::InvalidFormat(format!(
            "Reserved bytes are not zero in region at offset {}",
            offset
        )));
    }

    match LittleEndian::read_u32(&table[field::CHILDREN..]) as usize {
        0 => Ok(None),
        children => Ok(Some(children)),
    }
}

/// Checks a length-prefixed UTF-8 string.
fn check_str<'a>(buf: &'a [u8], offset: usize, context: &'static str) -> Result<&'a str> {
    if offset < HEADER_LEN {
        return Err(XzqhError::InvalidFormat(format!(
            "String offset {} for {} points into the header",
            offset, context
        )));
    }
    let len = utils::checked_u32(buf, offset, context)? as usize;
    let bytes = utils::checked_slice(buf, offset + 4, len, context)?;
    std::str::from_utf8(bytes).map_err(|_| XzqhError::InvalidUtf8 { offset: offset as u64 })
}
