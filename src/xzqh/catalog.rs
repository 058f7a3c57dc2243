//! Index-based listing surface for cascading selection UIs and FFI hosts.
//!
//! The structured methods return owned records; the `*_json` methods encode
//! them with `serde_json`. Invalid indices never produce an error payload:
//! lists come back empty (`[]`) and single records absent (`{}`).

use serde::Serialize;

use super::format::{Data, Region, Regions};
use super::resolve;
use super::types::error::Result;
use super::types::models::{RegionInfo, RegionSummary};

const EMPTY_RECORD: &str = "{}";

/// Read-only catalog over a verified region buffer.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    data: Data<'a>,
}

impl<'a> Catalog<'a> {
    pub fn new(data: Data<'a>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> Data<'a> {
        self.data
    }

    pub fn list_provinces(&self) -> Vec<RegionSummary> {
        summarize(Some(self.data.root()))
    }

    /// Cities of the province at `province`; empty for an invalid index.
    pub fn list_cities(&self, province: i64) -> Vec<RegionSummary> {
        summarize(resolve::cities(&self.data, province))
    }

    /// Counties of the city at `(province, city)`; empty if either index is invalid.
    pub fn list_counties(&self, province: i64, city: i64) -> Vec<RegionSummary> {
        summarize(resolve::counties(&self.data, province, city))
    }

    /// Details of the deepest region reachable from the given indices.
    ///
    /// Negative indices mean "not specified"; see [`resolve::resolve`].
    pub fn region_info(&self, province: i64, city: i64, county: i64) -> Option<RegionInfo> {
        resolve::resolve(&self.data, province, Some(city), Some(county)).map(info)
    }

    pub fn list_provinces_json(&self) -> Result<String> {
        to_json(&self.list_provinces())
    }

    pub fn list_cities_json(&self, province: i64) -> Result<String> {
        to_json(&self.list_cities(province))
    }

    pub fn list_counties_json(&self, province: i64, city: i64) -> Result<String> {
        to_json(&self.list_counties(province, city))
    }

    pub fn region_info_json(&self, province: i64, city: i64, county: i64) -> Result<String> {
        match self.region_info(province, city, county) {
            Some(info) => to_json(&info),
            None => Ok(EMPTY_RECORD.to_string()),
        }
    }
}

fn summarize(regions: Option<Regions<'_>>) -> Vec<RegionSummary> {
    regions
        .map(|regions| {
            regions
                .iter()
                .enumerate()
                .map(|(index, region)| RegionSummary {
                    name: region.name().to_string(),
                    index,
                    code: region.code().to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn info(region: Region<'_>) -> RegionInfo {
    let center = region.center();
    RegionInfo {
        name: region.name().to_string(),
        code: region.code().to_string(),
        lng: center.map(|c| c.longitude),
        lat: center.map(|c| c.latitude),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
