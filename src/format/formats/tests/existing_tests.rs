//! Tests for loading existing service areas.

use crate::format::{FormatError, decode_existing_areas, encode_existing_areas};
use crate::model::Coordinate;

#[test]
fn test_decode_coordinate_arrays() {
    let json = r#"[
        [{"latitude":0,"longitude":0},{"latitude":0,"longitude":1},{"latitude":1,"longitude":1}],
        [{"latitude":5,"longitude":5},{"latitude":5,"longitude":6},{"latitude":6,"longitude":6}]
    ]"#;
    let areas = decode_existing_areas(json).unwrap();
    assert_eq!(areas.len(), 2);
    assert_eq!(areas.as_slice()[1].get(0), Some(Coordinate::new(5.0, 5.0)));
}

#[test]
fn test_decode_mixed_payloads_and_arrays() {
    let json = r#"[
        {"coordinates":[{"latitude":0,"longitude":0},{"latitude":0,"longitude":1},{"latitude":1,"longitude":1}]},
        [{"latitude":5,"longitude":5},{"latitude":5,"longitude":6},{"latitude":6,"longitude":6}]
    ]"#;
    let areas = decode_existing_areas(json).unwrap();
    assert_eq!(areas.len(), 2);
    assert!(areas.iter().all(|a| a.len() == 3));
}

#[test]
fn test_invalid_coordinate_names_the_area() {
    let json = r#"[
        [{"latitude":0,"longitude":0}],
        [{"latitude":-91,"longitude":0}]
    ]"#;
    match decode_existing_areas(json) {
        Err(FormatError::InvalidCoordinates { message }) => assert!(message.starts_with("area 1")),
        other => panic!("Expected InvalidCoordinates, got {:?}", other),
    }
}

#[test]
fn test_encode_then_decode() {
    let json = r#"[[{"latitude":1.5,"longitude":2.5},{"latitude":3,"longitude":4},{"latitude":5,"longitude":6}]]"#;
    let areas = decode_existing_areas(json).unwrap();
    let encoded = encode_existing_areas(&areas).unwrap();
    assert_eq!(decode_existing_areas(&encoded).unwrap(), areas);
}
