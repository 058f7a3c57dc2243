//! Low-level byte reading utilities.
//!
//! The `checked_*` helpers are used while verifying untrusted input and report
//! out-of-range reads as errors. The plain readers are used by the views on an
//! already verified buffer and simply index into it.

use byteorder::{ByteOrder, LittleEndian};
use crate::xzqh::types::error::{XzqhError, Result};

/// Returns `buf[offset..offset + len]`, or an `OutOfBounds` error naming `context`.
pub fn checked_slice<'a>(
    buf: &'a [u8],
    offset: usize,
    len: usize,
    context: &'static str,
) -> Result<&'a [u8]> {
    let out_of_bounds = || XzqhError::OutOfBounds {
        context,
        offset: offset as u64,
        len: len as u64,
        buffer_len: buf.len() as u64,
    };
    let end = offset.checked_add(len).ok_or_else(out_of_bounds)?;
    buf.get(offset..end).ok_or_else(out_of_bounds)
}

/// Reads a little-endian `u32` at `offset` with bounds checking.
pub fn checked_u32(buf: &[u8], offset: usize, context: &'static str) -> Result<u32> {
    checked_slice(buf, offset, 4, context).map(LittleEndian::read_u32)
}

/// Reads a little-endian `u32` at `offset`, as a `usize`.
#[inline]
pub fn read_offset(buf: &[u8], offset: usize) -> usize {
    LittleEndian::read_u32(&buf[offset..offset + 4]) as usize
}

#[inline]
pub fn read_f64(buf: &[u8], offset: usize) -> f64 {
    LittleEndian::read_f64(&buf[offset..offset + 8])
}

/// Reads a length-prefixed string at `offset`.
///
/// Invalid UTF-8 decodes as an empty string; verification rules that out
/// for any buffer that passed [`verify`](crate::xzqh::format::verify).
#[inline]
pub fn read_str(buf: &[u8], offset: usize) -> &str {
    let len = read_offset(buf, offset);
    let start = offset + 4;
    std::str::from_utf8(&buf[start..start + len]).unwrap_or_default()
}
