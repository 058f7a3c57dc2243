mod common;

use xzqh_reader::xzqh::resolve::{cities, counties, county};
use xzqh_reader::{resolve, Catalog, Data, RegionInfo};

use common::{encode, sample_bytes};

fn code_of(data: &Data<'_>, p: i64, c: Option<i64>, k: Option<i64>) -> Option<String> {
    resolve(data, p, c, k).map(|r| r.code().to_string())
}

#[test]
fn resolves_full_index_paths() {
    let bytes = sample_bytes();
    let data = Data::from_bytes(&bytes).unwrap();

    assert_eq!(code_of(&data, 0, None, None).as_deref(), Some("110000"));
    assert_eq!(code_of(&data, 0, Some(0), None).as_deref(), Some("110100"));
    assert_eq!(code_of(&data, 0, Some(0), Some(1)).as_deref(), Some("110105"));
    assert_eq!(code_of(&data, 1, Some(1), Some(0)).as_deref(), Some("220202"));
}

#[test]
fn out_of_range_city_returns_the_province() {
    let bytes = sample_bytes();
    let data = Data::from_bytes(&bytes).unwrap();

    let region = resolve(&data, 0, Some(99), None).expect("province itself");
    assert_eq!(region.name(), "Beijing");
}

#[test]
fn descent_stops_at_first_invalid_index() {
    let bytes = sample_bytes();
    let data = Data::from_bytes(&bytes).unwrap();

    // Negative sentinel for the city: the county index is never consulted.
    assert_eq!(code_of(&data, 1, Some(-1), Some(0)).as_deref(), Some("220000"));
    assert_eq!(code_of(&data, 1, None, Some(0)).as_deref(), Some("220000"));
    // Bad county: the city is returned.
    assert_eq!(code_of(&data, 2, Some(0), Some(5)).as_deref(), Some("211300"));
    assert_eq!(code_of(&data, 2, Some(0), Some(-3)).as_deref(), Some("211300"));
    // A leaf has nothing below it.
    assert_eq!(code_of(&data, 0, Some(0), Some(0)).as_deref(), Some("110101"));
}

#[test]
fn bounds_are_checked_per_parent() {
    let bytes = sample_bytes();
    let data = Data::from_bytes(&bytes).unwrap();

    // City index 1 exists under Jilin but not under Liaoning.
    assert_eq!(code_of(&data, 1, Some(1), None).as_deref(), Some("220200"));
    assert_eq!(code_of(&data, 2, Some(1), None).as_deref(), Some("210000"));
    // County index 1 exists under Beijing City but not under Changchun.
    assert_eq!(code_of(&data, 0, Some(0), Some(1)).as_deref(), Some("110105"));
    assert_eq!(code_of(&data, 1, Some(0), Some(1)).as_deref(), Some("220100"));
}

#[test]
fn invalid_province_is_absent() {
    let bytes = sample_bytes();
    let data = Data::from_bytes(&bytes).unwrap();

    assert!(resolve(&data, -1, Some(0), Some(0)).is_none());
    assert!(resolve(&data, 3, None, None).is_none());
    assert!(resolve(&data, i64::MIN, None, None).is_none());
    assert!(resolve(&data, i64::MAX, Some(0), None).is_none());

    let bytes = encode(&[]);
    let empty = Data::from_bytes(&bytes).unwrap();
    assert!(resolve(&empty, 0, None, None).is_none());
}

#[test]
fn resolution_is_total() {
    let bytes = sample_bytes();
    let data = Data::from_bytes(&bytes).unwrap();
    let indices = [i64::MIN, -100, -1, 0, 1, 2, 3, 4, 99, i64::MAX];

    for &p in &indices {
        for c in indices.iter().copied().map(Some).chain([None]) {
            for k in indices.iter().copied().map(Some).chain([None]) {
                let found = resolve(&data, p, c, k);
                assert_eq!(found.is_some(), (0..3).contains(&p), "p={} c={:?} k={:?}", p, c, k);
            }
        }
    }
}

#[test]
fn strict_helpers_require_every_index() {
    let bytes = sample_bytes();
    let data = Data::from_bytes(&bytes).unwrap();

    assert_eq!(cities(&data, 1).map(|c| c.len()), Some(2));
    assert!(cities(&data, 7).is_none());
    assert_eq!(counties(&data, 0, 0).map(|c| c.len()), Some(2));
    assert!(counties(&data, 0, 1).is_none());
    assert!(counties(&data, -1, 0).is_none());
    assert_eq!(county(&data, 2, 0, 0).map(|r| r.name()), Some("Shuangta"));
    assert!(county(&data, 2, 0, 1).is_none());
}

#[test]
fn catalog_lists_provinces_as_json() {
    let bytes = sample_bytes();
    let catalog = Catalog::new(Data::from_bytes(&bytes).unwrap());

    assert_eq!(
        catalog.list_provinces_json().unwrap(),
        r#"[{"name":"Beijing","index":0,"code":"110000"},{"name":"Jilin","index":1,"code":"220000"},{"name":"Liaoning","index":2,"code":"210000"}]"#
    );
}

#[test]
fn catalog_lists_children_with_their_own_indices() {
    let bytes = sample_bytes();
    let catalog = Catalog::new(Data::from_bytes(&bytes).unwrap());

    let cities = catalog.list_cities(1);
    let names: Vec<(&str, usize)> = cities.iter().map(|c| (c.name.as_str(), c.index)).collect();
    assert_eq!(names, [("Changchun", 0), ("Jilin", 1)]);

    assert_eq!(
        catalog.list_counties_json(0, 0).unwrap(),
        r#"[{"name":"Dongcheng","index":0,"code":"110101"},{"name":"Chaoyang","index":1,"code":"110105"}]"#
    );
}

#[test]
fn catalog_invalid_indices_serialize_empty() {
    let bytes = sample_bytes();
    let catalog = Catalog::new(Data::from_bytes(&bytes).unwrap());

    assert_eq!(catalog.list_cities_json(-1).unwrap(), "[]");
    assert_eq!(catalog.list_cities_json(3).unwrap(), "[]");
    assert_eq!(catalog.list_counties_json(0, 9).unwrap(), "[]");
    assert_eq!(catalog.list_counties_json(9, 0).unwrap(), "[]");
    assert_eq!(catalog.region_info_json(-1, 0, 0).unwrap(), "{}");
    assert_eq!(catalog.region_info_json(42, -1, -1).unwrap(), "{}");
}

#[test]
fn catalog_region_info_follows_resolution() {
    let bytes = sample_bytes();
    let catalog = Catalog::new(Data::from_bytes(&bytes).unwrap());

    assert_eq!(
        catalog.region_info(0, 0, 1),
        Some(RegionInfo {
            name: "Chaoyang".to_string(),
            code: "110105".to_string(),
            lng: Some(116.4),
            lat: Some(39.9),
        })
    );
    assert_eq!(
        catalog.region_info_json(0, 0, 1).unwrap(),
        r#"{"name":"Chaoyang","code":"110105","lng":116.4,"lat":39.9}"#
    );
    assert_eq!(
        catalog.region_info_json(0, 0, -1).unwrap(),
        r#"{"name":"Beijing City","code":"110100","lng":null,"lat":null}"#
    );
    assert_eq!(catalog.region_info(2, 99, 0).map(|i| i.code), Some("210000".to_string()));
}

#[test]
fn catalog_over_empty_document() {
    let bytes = encode(&[]);
    let catalog = Catalog::new(Data::from_bytes(&bytes).unwrap());

    assert!(catalog.list_provinces().is_empty());
    assert_eq!(catalog.list_provinces_json().unwrap(), "[]");
    assert_eq!(catalog.region_info_json(0, 0, 0).unwrap(), "{}");
}
