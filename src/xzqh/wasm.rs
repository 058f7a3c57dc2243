//! JavaScript bindings for the catalog, enabled with the `wasm` feature.
//!
//! Each method returns a JSON string so the host can `JSON.parse` it. Invalid
//! indices produce `[]` or `{}` rather than an exception.

use wasm_bindgen::prelude::*;

use super::reader::XzqhReader;
use super::types::error::Result;

#[wasm_bindgen]
pub struct XzqhWrapper {
    reader: XzqhReader,
}

#[wasm_bindgen]
impl XzqhWrapper {
    /// Copies the region file bytes into the module and verifies them.
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: Vec<u8>) -> std::result::Result<XzqhWrapper, JsError> {
        let reader = XzqhReader::from_bytes(bytes).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { reader })
    }

    #[wasm_bindgen(js_name = getProvinces)]
    pub fn get_provinces(&self) -> String {
        or_empty(self.reader.catalog().list_provinces_json(), "[]")
    }

    #[wasm_bindgen(js_name = getCities)]
    pub fn get_cities(&self, province_idx: i32) -> String {
        or_empty(self.reader.catalog().list_cities_json(province_idx.into()), "[]")
    }

    #[wasm_bindgen(js_name = getCounties)]
    pub fn get_counties(&self, province_idx: i32, city_idx: i32) -> String {
        or_empty(
            self.reader.catalog().list_counties_json(province_idx.into(), city_idx.into()),
            "[]",
        )
    }

    #[wasm_bindgen(js_name = getRegionInfo)]
    pub fn get_region_info(&self, province_idx: i32, city_idx: i32, county_idx: i32) -> String {
        or_empty(
            self.reader
                .catalog()
                .region_info_json(province_idx.into(), city_idx.into(), county_idx.into()),
            "{}",
        )
    }
}

fn or_empty(json: Result<String>, empty: &str) -> String {
    json.unwrap_or_else(|e| {
        log::warn!("JSON encoding failed: {}", e);
        empty.to_string()
    })
}
