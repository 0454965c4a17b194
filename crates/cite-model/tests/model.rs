//! Tests for cite-model types.

use cite_model::{
    CompositeItem, CompositeKind, ErrorLevel, MetadataRow, TableType, TypedRow, ValidationReport,
};

#[test]
fn composite_item_serializes_name_and_ids() {
    let item = CompositeItem::new(
        CompositeKind::Venue,
        "Nature [issn:0028-0836]",
        "Nature",
        vec!["issn:0028-0836".to_string()],
    );
    let json = serde_json::to_value(&item).expect("serialize item");
    assert_eq!(
        json,
        serde_json::json!({ "name": "Nature", "ids": ["issn:0028-0836"] })
    );
    assert_eq!(item.to_string(), "Nature [issn:0028-0836]");
    assert_eq!(item.kind(), CompositeKind::Venue);
}

#[test]
fn venue_flattens_to_its_raw_string() {
    let venue = CompositeItem::new(CompositeKind::Venue, " Nature [issn:1]", "Nature", vec![]);
    let row = TypedRow::Metadata(MetadataRow {
        venue: Some(venue),
        ..MetadataRow::default()
    });
    assert_eq!(row.flatten().get("venue").unwrap(), [" Nature [issn:1]"]);
}

#[test]
fn report_parses_in_order() {
    let json = r#"[
        {"message": "m0", "error_label": "a", "error_type": "error",
         "position": {"table": {"0": {"id": [0]}}}},
        {"message": "m1", "error_label": "b", "error_type": "warning",
         "position": {"table": {"1": {"title": null}}}}
    ]"#;
    let report: ValidationReport = serde_json::from_str(json).expect("parse report");
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].message, "m0");
    assert_eq!(report[1].error_type, ErrorLevel::Warning);
    assert_eq!(report[1].error_type.as_str(), "warning");
}

#[test]
fn table_type_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&TableType::Cits).unwrap(),
        "\"cits\""
    );
    assert_eq!(TableType::Meta.to_string(), "meta");
}
