// FILENAME: jstat-format/tests/test_roundtrip.rs
// End-to-end conversions across the model, codec, and format crates.

use jstat_format::{
    Dataset, Fetcher, Naming, Output, Readable, Source, Table, Version, Writable,
};
use serde_json::{json, Value};
use std::io::Write as IoWrite;

struct NoFetch;

impl Fetcher for NoFetch {
    fn fetch(&self, url: &str) -> Result<Value, jstat_format::FetchError> {
        Err(jstat_format::FetchError::Network(format!(
            "unexpected fetch of {url}"
        )))
    }
}

fn dense_table() -> Table {
    let mut t = Table::new(vec![
        "region".to_string(),
        "year".to_string(),
        "value".to_string(),
    ]);
    t.push_row(vec![json!("N"), json!(2010), json!(1)]);
    t.push_row(vec![json!("N"), json!(2011), json!(2)]);
    t.push_row(vec![json!("S"), json!(2010), json!(3)]);
    t.push_row(vec![json!("S"), json!(2011), json!(4)]);
    t
}

#[test]
fn encode_then_decode_reproduces_table() {
    let dataset = Dataset::from_table(&dense_table(), "value", Version::V2_0).unwrap();
    let back = dataset.to_table(Naming::Id).unwrap();
    assert_eq!(back, dense_table());
}

#[test]
fn encode_then_decode_survives_json_text() {
    let dataset = Dataset::from_table(&dense_table(), "value", Version::V2_0).unwrap();
    let text = dataset.to_json_text().unwrap();

    let reread = Dataset::read_with(Source::from(text), &NoFetch).unwrap();
    assert_eq!(reread.to_table(Naming::Id).unwrap(), dense_table());
}

#[test]
fn v13_envelope_decodes_like_v20() {
    let v20 = Dataset::from_table(&dense_table(), "value", Version::V2_0).unwrap();
    let v13 = Dataset::from_table(&dense_table(), "value", Version::V1_3).unwrap();

    // Different envelopes, same table.
    assert!(v13.document().get("dataset1").is_some());
    assert!(v13.document().get("version").is_none());
    assert_eq!(
        v13.to_table(Naming::Id).unwrap(),
        v20.to_table(Naming::Id).unwrap()
    );
}

#[test]
fn shuffled_rows_encode_to_canonical_order() {
    let mut shuffled = Table::new(vec![
        "region".to_string(),
        "year".to_string(),
        "value".to_string(),
    ]);
    shuffled.push_row(vec![json!("N"), json!(2010), json!(1)]);
    shuffled.push_row(vec![json!("S"), json!(2011), json!(4)]);
    shuffled.push_row(vec![json!("N"), json!(2011), json!(2)]);
    shuffled.push_row(vec![json!("S"), json!(2010), json!(3)]);

    let dataset = Dataset::from_table(&shuffled, "value", Version::V2_0).unwrap();
    // Decoding enumerates row-major, so the round trip canonicalizes order.
    assert_eq!(dataset.to_table(Naming::Id).unwrap(), dense_table());
}

#[test]
fn reader_source_via_temp_file() {
    let dataset = Dataset::from_table(&dense_table(), "value", Version::V2_0).unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(dataset.to_json_text().unwrap().as_bytes())
        .unwrap();

    let handle = std::fs::File::open(file.path()).unwrap();
    let reread = Dataset::read_with(Source::Reader(Box::new(handle)), &NoFetch).unwrap();
    assert_eq!(reread.to_table(Naming::Id).unwrap(), dense_table());
}

#[test]
fn float_and_null_values_survive() {
    let mut t = Table::new(vec!["k".to_string(), "value".to_string()]);
    t.push_row(vec![json!("a"), json!(1.5)]);
    t.push_row(vec![json!("b"), Value::Null]);
    t.push_row(vec![json!("c"), json!(7)]);

    let dataset = Dataset::from_table(&t, "value", Version::V2_0).unwrap();
    let text = dataset.to_json_text().unwrap();
    assert!(text.contains("null"));

    let back = Dataset::read_with(Source::from(text), &NoFetch)
        .unwrap()
        .to_table(Naming::Id)
        .unwrap();
    assert_eq!(back.rows[0][1], json!(1.5));
    assert_eq!(back.rows[1][1], Value::Null);
    assert_eq!(back.rows[2][1], json!(7));
}

#[test]
fn write_surface_matches_direct_calls() {
    let dataset = Dataset::from_table(&dense_table(), "value", Version::V2_0).unwrap();
    let via_write = dataset
        .write(Output::Table)
        .unwrap()
        .into_table()
        .unwrap();
    assert_eq!(via_write, dataset.to_table(Naming::Label).unwrap());
}

#[test]
fn bundle_document_decodes_all_datasets() {
    let doc = jstat_format::Document::from_json_text(
        r#"{
            "dataset1": {
                "dimension": {
                    "id": ["a"], "size": [2],
                    "a": {"category": {"index": ["x", "y"]}}
                },
                "value": [1, 2]
            },
            "dataset2": {
                "dimension": {
                    "id": ["b"], "size": [1],
                    "b": {"category": {"index": ["z"]}}
                },
                "value": [3]
            }
        }"#,
    )
    .unwrap();

    let dataset = Dataset::from_document(doc);
    let tables = dataset.to_tables(Naming::Id).unwrap();
    assert_eq!(tables.len(), 2);
    // The single-table surface exposes the first bundle member.
    assert_eq!(dataset.to_table(Naming::Id).unwrap(), tables[0]);
}
