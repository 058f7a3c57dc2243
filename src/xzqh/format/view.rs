//! Zero-copy views over a region buffer.
//!
//! A view is a `(buffer, offset)` pair. Nothing is decoded until an accessor
//! is called, and each accessor reads only the bytes of its own field.

use std::fmt;
use std::iter::FusedIterator;

use super::layout::{field, header_field, FLAG_HAS_CENTER};
use super::verify;
use crate::xzqh::types::error::Result;
use crate::xzqh::types::models::{Level, Point};
use crate::xzqh::utils;

/// The document root of a region buffer.
#[derive(Clone, Copy)]
pub struct Data<'a> {
    buf: &'a [u8],
    root_offset: usize,
}

impl<'a> Data<'a> {
    /// Verifies `buf` and returns the root view.
    ///
    /// # Errors
    /// Returns a structural error if the buffer is truncated, corrupt or
    /// written for a different schema.
    pub fn from_bytes(buf: &'a [u8]) -> Result<Self> {
        verify::check(buf)?;
        Ok(Self::new_unchecked(buf))
    }

    /// Builds the root view without verifying `buf`.
    pub fn new_unchecked(buf: &'a [u8]) -> Self {
        Self {
            buf,
            root_offset: utils::read_offset(buf, header_field::ROOT),
        }
    }

    /// The top-level regions (provinces), in stored order.
    pub fn root(&self) -> Regions<'a> {
        Regions::at(self.buf, self.root_offset)
    }

    /// Total number of regions in the buffer, as recorded in the header.
    pub fn region_count(&self) -> usize {
        utils::read_offset(self.buf, header_field::REGION_COUNT)
    }
}

impl fmt::Debug for Data<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Data")
            .field("len", &self.buf.len())
            .field("root_offset", &self.root_offset)
            .finish()
    }
}

/// One administrative unit: province, city or county.
#[derive(Clone, Copy)]
pub struct Region<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Region<'a> {
    pub(crate) fn at(buf: &'a [u8], offset: usize) -> Self {
        Self { buf, offset }
    }

    pub fn name(&self) -> &'a str {
        utils::read_str(self.buf, utils::read_offset(self.buf, self.offset + field::NAME))
    }

    pub fn code(&self) -> &'a str {
        utils::read_str(self.buf, utils::read_offset(self.buf, self.offset + field::CODE))
    }

    /// The administrative level, if the encoder recorded one.
    pub fn level(&self) -> Option<Level> {
        Level::from_byte(self.buf[self.offset + field::LEVEL]).ok().flatten()
    }

    /// The geographic center, or `None` when no coordinates are available.
    pub fn center(&self) -> Option<Point> {
        if self.buf[self.offset + field::FLAGS] & FLAG_HAS_CENTER == 0 {
            return None;
        }
        Some(Point::new(
            utils::read_f64(self.buf, self.offset + field::LONGITUDE),
            utils::read_f64(self.buf, self.offset + field::LATITUDE),
        ))
    }

    /// The ordered child regions, or `None` when the region has no child vector.
    ///
    /// A present but empty vector is returned as `Some` with length 0.
    pub fn children(&self) -> Option<Regions<'a>> {
        match utils::read_offset(self.buf, self.offset + field::CHILDREN) {
            0 => None,
            offset => Some(Regions::at(self.buf, offset)),
        }
    }

    /// Number of children, 0 when the child vector is absent.
    pub fn child_count(&self) -> usize {
        self.children().map_or(0, |c| c.len())
    }

    pub fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }

    /// Byte offset of this region's table inside the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Two views are equal when they point at the same table of the same buffer.
impl PartialEq for Region<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.buf.as_ptr(), other.buf.as_ptr()) && self.offset == other.offset
    }
}

impl Eq for Region<'_> {}

impl fmt::Debug for Region<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("name", &self.name())
            .field("code", &self.code())
            .field("offset", &self.offset)
            .finish()
    }
}

/// An ordered vector of regions with O(1) random access.
#[derive(Clone, Copy)]
pub struct Regions<'a> {
    buf: &'a [u8],
    offset: usize,
    len: usize,
}

impl<'a> Regions<'a> {
    fn at(buf: &'a [u8], offset: usize) -> Self {
        Self { buf, offset, len: utils::read_offset(buf, offset) }
    }

    /// An empty vector borrowing `buf`; used where a region has no children.
    pub(crate) fn empty(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the region at `index`, or `None` if it is out of range.
    pub fn get(&self, index: usize) -> Option<Region<'a>> {
        if index >= self.len {
            return None;
        }
        let slot = self.offset + 4 + index * 4;
        Some(Region::at(self.buf, utils::read_offset(self.buf, slot)))
    }

    pub fn iter(&self) -> RegionsIter<'a> {
        RegionsIter { regions: *self, front: 0, back: self.len }
    }
}

impl<'a> IntoIterator for Regions<'a> {
    type Item = Region<'a>;
    type IntoIter = RegionsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &Regions<'a> {
    type Item = Region<'a>;
    type IntoIter = RegionsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Regions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over a [`Regions`] vector, in stored order.
#[derive(Clone)]
pub struct RegionsIter<'a> {
    regions: Regions<'a>,
    front: usize,
    back: usize,
}

impl<'a> Iterator for RegionsIter<'a> {
    type Item = Region<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let region = self.regions.get(self.front);
        self.front += 1;
        region
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for RegionsIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.regions.get(self.back)
    }
}

impl ExactSizeIterator for RegionsIter<'_> {}

impl FusedIterator for RegionsIter<'_> {}
