//! Owned value types shared by the decoder, the catalog and the encoder.

use serde::Serialize;
use super::error::{XzqhError, Result};

/// Geographic center point of a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub longitude: f64,
    pub latitude: f64,
}

impl Point {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }
}

/// Administrative level of a region.
///
/// Stored as one byte in the region table; `0` means the level was not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Province = 1,
    Prefecture = 2,
    County = 3,
}

impl Level {
    /// Decodes the on-disk byte. `Ok(None)` for the "not recorded" marker.
    pub fn from_byte(value: u8) -> Result<Option<Self>> {
        match value {
            0 => Ok(None),
            1 => Ok(Some(Self::Province)),
            2 => Ok(Some(Self::Prefecture)),
            3 => Ok(Some(Self::County)),
            _ => Err(XzqhError::InvalidFormat(format!("Unknown region level: {}", value))),
        }
    }

    pub fn as_byte(level: Option<Self>) -> u8 {
        level.map_or(0, |l| l as u8)
    }
}

/// One entry of a province/city/county listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSummary {
    pub name: String,
    pub index: usize,
    pub code: String,
}

/// Detail record for a single resolved region.
///
/// `lng`/`lat` serialize as `null` when the region has no center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionInfo {
    pub name: String,
    pub code: String,
    pub lng: Option<f64>,
    pub lat: Option<f64>,
}
