use std::fs;
use std::path::Path;
use log::{info, warn};

use super::catalog::Catalog;
use super::format::{self, Data, Region};
use super::resolve;
use super::search::{self, Match};
use super::types::error::Result;

/// Owner of a loaded and verified region buffer.
///
/// The buffer is read whole, verified once, and then only borrowed: every
/// [`Region`] handed out points into it and lives as long as the reader.
#[derive(Debug)]
pub struct XzqhReader {
    bytes: Vec<u8>,
}

impl XzqhReader {
    /// Reads a region file from the given path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - File cannot be opened or read
    /// - The contents fail structural verification
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening region file: {}", path.display());
        let bytes = fs::read(path)?;
        Self::from_bytes(bytes)
    }

    /// Takes ownership of an in-memory buffer after verifying it.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if let Err(e) = format::check(&bytes) {
            warn!("Rejecting region buffer of {} bytes: {}", bytes.len(), e);
            return Err(e);
        }
        let reader = Self { bytes };
        info!(
            "Region data loaded: {} bytes, {} provinces, {} regions",
            reader.bytes.len(),
            reader.data().root().len(),
            reader.data().region_count()
        );
        Ok(reader)
    }

    pub fn data(&self) -> Data<'_> {
        format::get_root(&self.bytes)
    }

    pub fn catalog(&self) -> Catalog<'_> {
        Catalog::new(self.data())
    }

    /// All regions named exactly `name`, each with its ancestor path.
    pub fn search(&self, name: &str) -> Vec<Match<'_>> {
        search::search(self.data().root(), name)
    }

    /// All regions whose code is exactly `code`.
    pub fn search_by_code(&self, code: &str) -> Vec<Match<'_>> {
        search::search_by_code(self.data().root(), code)
    }

    /// See [`resolve::resolve`].
    pub fn resolve(&self, province: i64, city: Option<i64>, county: Option<i64>) -> Option<Region<'_>> {
        resolve::resolve(&self.data(), province, city, county)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
