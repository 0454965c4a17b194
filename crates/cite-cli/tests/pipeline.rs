//! Integration tests for the annotation pipeline.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use cite_cli::pipeline::{AnnotateRequest, annotate, write_output};
use cite_map::ErrorId;
use cite_model::TableType;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const CITATIONS_CSV: &str = "\
citing_id,citing_publication_date,cited_id,cited_publication_date
doi:10.1/a omid:br/1,2020,doi:10.1/b,2019
doi:10.1/c,,doi:10.1/d,
";

const CITATIONS_REPORT: &str = r#"[
  {"message": "Invalid identifier", "error_label": "invalid_id", "error_type": "error",
   "position": {"table": {"0": {"citing_id": [1]}}}},
  {"message": "Missing date", "error_label": "required_value", "error_type": "warning",
   "position": {"table": {"1": {"citing_publication_date": null, "cited_publication_date": null}}}}
]"#;

#[test]
fn annotates_citations_detected_from_headers() {
    let dir = TempDir::new().unwrap();
    let request = AnnotateRequest::new(
        write(&dir, "cits.csv", CITATIONS_CSV),
        write(&dir, "report.json", CITATIONS_REPORT),
    )
    .with_seed(Some(3));

    let table = annotate(&request).unwrap();

    assert_eq!(table.table_type, TableType::Cits);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.error_count(), 1);
    assert_eq!(table.warning_count(), 1);
    assert_eq!(table.rows_with_issues(), 2);

    let citing = table.rows[0].field("citing_id").unwrap();
    assert_eq!(citing[1].raw, "omid:br/1");
    assert!(citing[1].has_issues());
    assert!(!citing[0].has_issues());

    let date = table.rows[1].field("citing_publication_date").unwrap();
    assert_eq!(date[0].item_id, "1-citing_publication_date-empty");
    assert!(date[0].has_issues());

    insta::assert_json_snapshot!(table.item_separators, @r#"
    {
      "cited_id": " ",
      "citing_id": " "
    }
    "#);
}

#[test]
fn empty_cell_rows_keep_report_indexes_aligned() {
    let dir = TempDir::new().unwrap();
    let request = AnnotateRequest::new(
        write(
            &dir,
            "cits.csv",
            "citing_id,citing_publication_date,cited_id,cited_publication_date\n\
             doi:10.1/a,2020,doi:10.1/b,2019\n\
             ,,,\n\
             doi:10.1/c,2021,doi:10.1/d,2018\n",
        ),
        write(
            &dir,
            "report.json",
            r#"[{"message": "Missing ids", "error_label": "required_value", "error_type": "error",
                 "position": {"table": {"1": {"citing_id": null}}}},
                {"message": "Invalid id", "error_label": "invalid_id", "error_type": "error",
                 "position": {"table": {"2": {"citing_id": [0]}}}}]"#,
        ),
    )
    .with_seed(Some(5));

    let table = annotate(&request).unwrap();

    assert_eq!(table.rows.len(), 3);
    let blank = table.rows[1].field("citing_id").unwrap();
    assert_eq!(blank[0].item_id, "1-citing_id-empty");
    assert!(blank[0].has_issues());
    let third = table.rows[2].field("citing_id").unwrap();
    assert_eq!(third[0].raw, "doi:10.1/c");
    assert!(third[0].has_issues());
    assert_eq!(
        table.affected_rows(ErrorId::new(TableType::Cits, 1)),
        BTreeSet::from([2])
    );
    assert!(!table.rows[0].contains_issue());
}

#[test]
fn explicit_table_type_skips_detection() {
    let dir = TempDir::new().unwrap();
    let request = AnnotateRequest::new(
        write(&dir, "partial.csv", "citing_id,cited_id\ndoi:10.1/a,doi:10.1/b\n"),
        write(&dir, "report.json", "[]"),
    )
    .with_table_type(Some(TableType::Cits))
    .with_seed(Some(0));

    let table = annotate(&request).unwrap();

    assert!(table.is_valid());
    let date = table.rows[0].field("cited_publication_date").unwrap();
    assert_eq!(date.len(), 1);
    assert_eq!(date[0].raw, "");
}

#[test]
fn unknown_headers_fail_detection() {
    let dir = TempDir::new().unwrap();
    let request = AnnotateRequest::new(
        write(&dir, "odd.csv", "foo,bar\n1,2\n"),
        write(&dir, "report.json", "[]"),
    );

    let err = annotate(&request).unwrap_err();

    assert!(format!("{err:#}").contains("detect table type"));
}

#[test]
fn unresolvable_coordinates_fail_the_run() {
    let dir = TempDir::new().unwrap();
    let request = AnnotateRequest::new(
        write(&dir, "cits.csv", CITATIONS_CSV),
        write(
            &dir,
            "report.json",
            r#"[{"message": "m", "error_label": "l", "error_type": "error",
                 "position": {"table": {"7": {"citing_id": [0]}}}}]"#,
        ),
    )
    .with_seed(Some(1));

    let err = annotate(&request).unwrap_err();

    assert!(format!("{err:#}").contains("row 7 is out of range"));
}

#[test]
fn missing_report_names_the_path() {
    let dir = TempDir::new().unwrap();
    let request = AnnotateRequest::new(
        write(&dir, "cits.csv", CITATIONS_CSV),
        dir.path().join("absent.json"),
    );

    let err = annotate(&request).unwrap_err();

    assert!(format!("{err:#}").contains("absent.json"));
}

#[test]
fn writes_json_output_file() {
    let dir = TempDir::new().unwrap();
    let request = AnnotateRequest::new(
        write(&dir, "cits.csv", CITATIONS_CSV),
        write(&dir, "report.json", CITATIONS_REPORT),
    )
    .with_seed(Some(9));
    let table = annotate(&request).unwrap();
    let output = dir.path().join("annotated.json");

    write_output(&table, Some(&output), true).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["tableType"], "cits");
    assert_eq!(json["rows"].as_array().unwrap().len(), 2);
    assert_eq!(json["errors"]["cits-0"]["label"], "invalid_id");
    assert_eq!(json["errors"]["cits-1"]["level"], "warning");
    assert_eq!(
        json["rows"][0]["fields"]["citing_id"][1]["issues"][0],
        "cits-0"
    );
}
