use std::collections::HashMap;
use std::time::Instant;

use crate::classify::KeywordClassifier;
use crate::config::CompareConfig;
use crate::error::ReconError;
use crate::model::{CompareInput, ComparisonResult, ComparisonRow, RowStatus, SourceRecord};
use crate::normalize::normalize_rows;
use crate::report::build_report;

/// Run one full reconciliation: normalize both sources, classify the
/// document feed, join by key, and build the report. Stateless — nothing
/// survives the call beyond the returned result.
pub fn run(config: &CompareConfig, input: &CompareInput) -> Result<ComparisonResult, ReconError> {
    let started = Instant::now();

    let csv = normalize_rows(&input.csv_rows, &config.sources.csv.fields);
    let json = normalize_rows(&input.json_rows, &config.sources.json.fields);
    let tally = KeywordClassifier::new(&config.categories).tally(&input.documents);

    let details = reconcile(&csv.records, &json.records);

    Ok(build_report(
        &config.name,
        details,
        tally,
        csv.skipped_rows,
        json.skipped_rows,
        started,
    ))
}

/// Full outer join over the grouping key.
///
/// Counts are summed per key within each source; a key absent from one
/// source contributes 0 there and is still emitted (flagged `Mismatch`
/// unless both sides are zero). The user label comes from the first record
/// seen for the key, CSV before JSON. Output order is deterministic: keys
/// in CSV first-seen order, then JSON-only keys in first-seen order.
pub fn reconcile(csv: &[SourceRecord], json: &[SourceRecord]) -> Vec<ComparisonRow> {
    struct Slot {
        user: String,
        csv_count: u64,
        json_count: u64,
    }

    let mut order: Vec<String> = Vec::new();
    let mut slots: HashMap<String, Slot> = HashMap::new();

    for record in csv {
        let slot = slots.entry(record.key.clone()).or_insert_with(|| {
            order.push(record.key.clone());
            Slot { user: record.user.clone(), csv_count: 0, json_count: 0 }
        });
        slot.csv_count += record.count;
    }

    for record in json {
        let slot = slots.entry(record.key.clone()).or_insert_with(|| {
            order.push(record.key.clone());
            Slot { user: record.user.clone(), csv_count: 0, json_count: 0 }
        });
        slot.json_count += record.count;
    }

    order
        .into_iter()
        .map(|key| {
            let slot = slots.remove(&key).expect("key recorded in order");
            let difference = slot.csv_count.abs_diff(slot.json_count);
            ComparisonRow {
                user: slot.user,
                key,
                csv_count: slot.csv_count,
                json_count: slot.json_count,
                difference,
                status: if difference == 0 { RowStatus::Match } else { RowStatus::Mismatch },
            }
        })
        .collect()
}
