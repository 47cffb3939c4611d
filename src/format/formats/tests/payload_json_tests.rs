//! Tests for the area payload JSON format.

use crate::format::FormatError;
use crate::format::formats::PayloadJsonFormat;
use crate::format::traits::AreaFormat;
use crate::model::{Coordinate, Polygon};

fn create_area() -> Polygon {
    Polygon::from_vertices(vec![
        Coordinate::new(52.5200, 13.4050),
        Coordinate::new(52.5300, 13.4050),
        Coordinate::new(52.5300, 13.4200),
        Coordinate::new(52.5200, 13.4200),
    ])
}

#[test]
fn test_encode_shape() {
    let json = PayloadJsonFormat.encode(&create_area()).expect("Failed to encode");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let coords = value["coordinates"].as_array().expect("coordinates array");
    assert_eq!(coords.len(), 4);
    assert_eq!(coords[0]["latitude"], 52.52);
    assert_eq!(coords[0]["longitude"], 13.405);
}

#[test]
fn test_roundtrip_preserves_order() {
    let area = create_area();
    let json = PayloadJsonFormat.encode(&area).unwrap();
    let decoded = PayloadJsonFormat.decode(&json).unwrap();
    assert_eq!(decoded, area);
}

#[test]
fn test_decode_rejects_out_of_range_longitude() {
    let json = r#"{"coordinates":[{"latitude":0.0,"longitude":181.0}]}"#;
    let result = PayloadJsonFormat.decode(json);
    assert!(matches!(result, Err(FormatError::InvalidCoordinates { .. })));
}

#[test]
fn test_decode_rejects_missing_field() {
    let json = r#"{"coordinates":[{"latitude":0.0}]}"#;
    let result = PayloadJsonFormat.decode(json);
    assert!(matches!(result, Err(FormatError::Json(_))));
}

#[test]
fn test_file_export_import() {
    let path = std::env::temp_dir().join(format!("geofence-payload-{}.json", std::process::id()));
    let area = create_area();

    PayloadJsonFormat.export(&area, &path).expect("Failed to export");
    let imported = PayloadJsonFormat.import(&path).expect("Failed to import");
    assert_eq!(imported, area);

    let _ = std::fs::remove_file(&path);
}
