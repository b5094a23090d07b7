//! End-to-end engine tests: config TOML → raw rows → `run` → result.

use std::collections::BTreeMap;

use crosstally_recon::model::RawRow;
use crosstally_recon::{run, CompareConfig, CompareInput, Document, RowStatus};

const CONFIG: &str = r#"
name = "Export check"

[sources.csv]
file = "export.csv"
[sources.csv.fields]
key   = "created_by"
user  = "user_name"
count = "bo"

[sources.json]
file = "export.json"
[sources.json.fields]
key   = "createdBy"
user  = "userName"
count = "blop"

[documents]
file = "files.json"

[categories]
nearmiss       = "Nearmiss"
hazard         = "Hazard"
harm_injury    = "HarmInjury"
product        = "Product"
sales_delivery = "SalesDelivery"
"#;

fn csv_row(key: &str, user: &str, count: &str) -> RawRow {
    BTreeMap::from([
        ("created_by".to_string(), key.to_string()),
        ("user_name".to_string(), user.to_string()),
        ("bo".to_string(), count.to_string()),
    ])
}

fn json_row(key: &str, user: &str, count: &str) -> RawRow {
    BTreeMap::from([
        ("createdBy".to_string(), key.to_string()),
        ("userName".to_string(), user.to_string()),
        ("blop".to_string(), count.to_string()),
    ])
}

fn doc(identifier: &str) -> Document {
    Document {
        identifier: Some(identifier.to_string()),
        content: None,
    }
}

fn category_count(summary: &crosstally_recon::model::Summary, name: &str) -> u64 {
    summary
        .category_counts
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.count)
        .unwrap()
}

#[test]
fn alice_bob_carl_scenario() {
    let config = CompareConfig::from_toml(CONFIG).unwrap();
    let input = CompareInput {
        csv_rows: vec![csv_row("u1", "Alice", "5"), csv_row("u2", "Bob", "3")],
        json_rows: vec![json_row("u1", "Alice", "5"), json_row("u3", "Carl", "2")],
        documents: vec![
            doc("Nearmiss_2024_01.pdf"),
            doc("hazard_report.txt"),
            doc("HAZARD_followup.txt"),
            doc("routine_inspection.txt"),
        ],
    };

    let result = run(&config, &input).unwrap();

    let rows: Vec<(&str, u64, u64, u64, RowStatus)> = result
        .details
        .iter()
        .map(|r| (r.key.as_str(), r.csv_count, r.json_count, r.difference, r.status))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("u1", 5, 5, 0, RowStatus::Match),
            ("u2", 3, 0, 3, RowStatus::Mismatch),
            ("u3", 0, 2, 2, RowStatus::Mismatch),
        ]
    );

    assert_eq!(result.details[1].user, "Bob");
    assert_eq!(result.details[2].user, "Carl");

    let s = &result.summary;
    assert_eq!(s.total_csv_count, 8);
    assert_eq!(s.total_json_count, 7);
    assert_eq!(s.total_rows, 3);
    assert_eq!(s.matched, 1);
    assert_eq!(s.mismatched, 2);
    assert_eq!(category_count(s, "nearmiss"), 1);
    assert_eq!(category_count(s, "hazard"), 2);
    assert_eq!(category_count(s, "harm_injury"), 0);
    assert_eq!(category_count(s, "product"), 0);
    assert_eq!(category_count(s, "sales_delivery"), 0);

    // Substrings ride along so consumers can label without the config
    let hazard = s.category_counts.iter().find(|c| c.name == "hazard").unwrap();
    assert_eq!(hazard.substring, "Hazard");

    assert_eq!(result.meta.config_name, "Export check");
    assert!(result.processing_time_seconds >= 0.0);
}

#[test]
fn empty_inputs_produce_empty_report_without_error() {
    let config = CompareConfig::from_toml(CONFIG).unwrap();
    let input = CompareInput {
        csv_rows: vec![],
        json_rows: vec![],
        documents: vec![],
    };

    let result = run(&config, &input).unwrap();
    assert!(result.details.is_empty());
    assert_eq!(result.summary.total_csv_count, 0);
    assert_eq!(result.summary.total_json_count, 0);
    assert_eq!(result.summary.total_rows, 0);
    // Every configured category is still present at zero
    assert_eq!(result.summary.category_counts.len(), 5);
    assert!(result.summary.category_counts.iter().all(|c| c.count == 0));
}

#[test]
fn malformed_rows_are_skipped_and_surfaced_in_meta() {
    let config = CompareConfig::from_toml(CONFIG).unwrap();
    let input = CompareInput {
        csv_rows: vec![
            csv_row("u1", "Alice", "5"),
            csv_row("", "Nobody", "9"),
            csv_row("u2", "Bob", "not-a-number"),
        ],
        json_rows: vec![json_row("u1", "Alice", "5")],
        documents: vec![Document { identifier: None, content: None }],
    };

    let result = run(&config, &input).unwrap();
    assert_eq!(result.meta.skipped_csv_rows, 2);
    assert_eq!(result.meta.skipped_json_rows, 0);
    assert_eq!(result.meta.skipped_documents, 1);
    assert_eq!(result.details.len(), 1);
    assert_eq!(result.summary.total_csv_count, 5);
}

#[test]
fn rerun_on_identical_input_is_identical_modulo_timing() {
    let config = CompareConfig::from_toml(CONFIG).unwrap();
    let input = CompareInput {
        csv_rows: vec![csv_row("u2", "Bob", "3"), csv_row("u1", "Alice", "5")],
        json_rows: vec![json_row("u3", "Carl", "2"), json_row("u1", "Alice", "4")],
        documents: vec![doc("Product_recall.txt")],
    };

    let first = run(&config, &input).unwrap();
    let second = run(&config, &input).unwrap();

    let details_json = |r: &crosstally_recon::ComparisonResult| {
        serde_json::to_string(&r.details).unwrap()
    };
    assert_eq!(details_json(&first), details_json(&second));
    assert_eq!(
        serde_json::to_string(&first.summary).unwrap(),
        serde_json::to_string(&second.summary).unwrap()
    );
}
