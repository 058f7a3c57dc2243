//! Encoder for the binary region format.
//!
//! Serializes an owned [`RegionNode`] tree into a buffer that passes
//! [`verify`](super::verify). Used by tests and tools that need a buffer;
//! it does not read or clean any source dataset.

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use log::debug;

use super::layout::{field, header_field, FLAG_HAS_CENTER, HEADER_LEN, MAGIC, REGION_TABLE_LEN, VERSION};
use crate::xzqh::types::error::{XzqhError, Result};
use crate::xzqh::types::models::{Level, Point};

/// An owned region used as encoder input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionNode {
    pub name: String,
    pub code: String,
    pub level: Option<Level>,
    pub center: Option<Point>,
    pub children: Vec<RegionNode>,
}

impl RegionNode {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_center(mut self, longitude: f64, latitude: f64) -> Self {
        self.center = Some(Point::new(longitude, latitude));
        self
    }

    pub fn with_child(mut self, child: RegionNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RegionNode>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Writes region trees into the binary format.
#[derive(Debug, Default)]
pub struct DataBuilder {
    buf: Vec<u8>,
    region_count: u32,
    keep_empty_children: bool,
}

impl DataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write an explicit empty child vector for leaves instead of leaving the
    /// children offset absent.
    pub fn keep_empty_children(mut self, keep: bool) -> Self {
        self.keep_empty_children = keep;
        self
    }

    /// Encodes `roots` as the document's root vector.
    ///
    /// # Errors
    /// Returns `EmptyName` for a region without a name, and `InvalidFormat`
    /// if the output would not be addressable with 32-bit offsets.
    pub fn build(mut self, roots: &[RegionNode]) -> Result<Vec<u8>> {
        self.buf.clear();
        self.buf.resize(HEADER_LEN, 0);

        let root_offset = self.write_vector(roots)?;

        let header = &mut self.buf[..HEADER_LEN];
        header[header_field::MAGIC..header_field::MAGIC + 4].copy_from_slice(&MAGIC);
        LittleEndian::write_u16(&mut header[header_field::VERSION..], VERSION);
        LittleEndian::write_u16(&mut header[header_field::FLAGS..], 0);
        LittleEndian::write_u32(&mut header[header_field::ROOT..], root_offset);
        LittleEndian::write_u32(&mut header[header_field::REGION_COUNT..], self.region_count);

        debug!("Encoded {} regions into {} bytes", self.region_count, self.buf.len());
        Ok(self.buf)
    }

    fn position(&self) -> Result<u32> {
        u32::try_from(self.buf.len())
            .map_err(|_| XzqhError::InvalidFormat("Encoded data exceeds 4 GiB".to_string()))
    }

    fn write_vector(&mut self, nodes: &[RegionNode]) -> Result<u32> {
        let start = self.position()?;
        let count = u32::try_from(nodes.len())
            .map_err(|_| XzqhError::InvalidFormat(format!("Too many regions in one vector: {}", nodes.len())))?;
        self.buf.write_u32::<LittleEndian>(count)?;
        let slots = self.buf.len();
        self.buf.resize(slots + nodes.len() * 4, 0);

        for (i, node) in nodes.iter().enumerate() {
            let table = self.write_region(node)?;
            LittleEndian::write_u32(&mut self.buf[slots + i * 4..], table);
        }
        Ok(start)
    }

    fn write_region(&mut self, node: &RegionNode) -> Result<u32> {
        let table = self.position()?;
        if node.name.is_empty() {
            return Err(XzqhError::EmptyName { offset: table as u64 });
        }
        self.buf.resize(self.buf.len() + REGION_TABLE_LEN, 0);
        self.region_count += 1;

        let name = self.write_str(&node.name)?;
        let code = self.write_str(&node.code)?;
        let children = if node.children.is_empty() && !self.keep_empty_children {
            0
        } else {
            self.write_vector(&node.children)?
        };

        let at = table as usize;
        let t = &mut self.buf[at..at + REGION_TABLE_LEN];
        LittleEndian::write_u32(&mut t[field::NAME..], name);
        LittleEndian::write_u32(&mut t[field::CODE..], code);
        LittleEndian::write_u32(&mut t[field::CHILDREN..], children);
        t[field::LEVEL] = Level::as_byte(node.level);
        if let Some(center) = node.center {
            t[field::FLAGS] = FLAG_HAS_CENTER;
            LittleEndian::write_f64(&mut t[field::LONGITUDE..], center.longitude);
            LittleEndian::write_f64(&mut t[field::LATITUDE..], center.latitude);
        }
        Ok(table)
    }

    fn write_str(&mut self, s: &str) -> Result<u32> {
        let start = self.position()?;
        let len = u32::try_from(s.len())
            .map_err(|_| XzqhError::InvalidFormat("String exceeds 4 GiB".to_string()))?;
        self.buf.write_u32::<LittleEndian>(len)?;
        self.buf.extend_from_slice(s.as_bytes());
        Ok(start)
    }
}
