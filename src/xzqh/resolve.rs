//! Positional lookup: (province, city, county) index paths.
//!
//! Indices are signed so that callers crossing an FFI boundary can pass a
//! negative sentinel for "not specified". Bounds are always checked against
//! the children of the node reached so far; an index valid under one
//! province says nothing about another.

use super::format::{Data, Region, Regions};

/// Converts a signed index into a position inside `regions`.
fn position(regions: &Regions<'_>, index: i64) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < regions.len())
}

fn child<'a>(parent: &Region<'a>, index: i64) -> Option<Region<'a>> {
    let children = parent.children()?;
    children.get(position(&children, index)?)
}

/// Resolves an index path, descending as far as the supplied indices allow.
///
/// Descent stops at the first index that is `None`, negative or out of range,
/// and the deepest region reached is returned. Only an invalid `province`
/// yields `None`.
pub fn resolve<'a>(
    data: &Data<'a>,
    province: i64,
    city: Option<i64>,
    county: Option<i64>,
) -> Option<Region<'a>> {
    let mut target = self::province(data, province)?;
    for index in [city, county] {
        match index.and_then(|i| child(&target, i)) {
            Some(next) => target = next,
            None => break,
        }
    }
    Some(target)
}

/// The province at `province`, or `None` if the index is invalid.
pub fn province<'a>(data: &Data<'a>, province: i64) -> Option<Region<'a>> {
    let root = data.root();
    root.get(position(&root, province)?)
}

/// The city at `(province, city)`; `None` unless both indices are valid.
pub fn city<'a>(data: &Data<'a>, province: i64, city: i64) -> Option<Region<'a>> {
    child(&self::province(data, province)?, city)
}

/// The county at `(province, city, county)`; `None` unless all indices are valid.
pub fn county<'a>(data: &Data<'a>, province: i64, city: i64, county: i64) -> Option<Region<'a>> {
    child(&self::city(data, province, city)?, county)
}

/// The cities of a province, or `None` if the province index is invalid or it
/// has no child vector.
pub fn cities<'a>(data: &Data<'a>, province: i64) -> Option<Regions<'a>> {
    self::province(data, province)?.children()
}

/// The counties of a city, or `None` if either index is invalid or the city
/// has no child vector.
pub fn counties<'a>(data: &Data<'a>, province: i64, city: i64) -> Option<Regions<'a>> {
    self::city(data, province, city)?.children()
}
