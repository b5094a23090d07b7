use crate::config::FieldMapping;
use crate::model::{NormalizedSource, RawRow, SourceRecord};

/// Turn one source's raw rows into `SourceRecord`s via the field mapping.
///
/// A row without a usable grouping key is malformed: it is skipped and
/// counted, never a hard failure. The same applies when a count field is
/// mapped but the row's value is missing or not a non-negative integer.
/// No count mapping means an implicit count of 1 per row. Original row
/// order is preserved; aggregation by key happens later in the engine.
pub fn normalize_rows(rows: &[RawRow], mapping: &FieldMapping) -> NormalizedSource {
    let mut out = NormalizedSource::default();

    for row in rows {
        let key = match field(row, &mapping.key) {
            Some(k) => k,
            None => {
                out.skipped_rows += 1;
                continue;
            }
        };

        let count = match mapping.count {
            Some(ref count_field) => {
                match field(row, count_field).and_then(|v| v.parse::<u64>().ok()) {
                    Some(c) => c,
                    None => {
                        out.skipped_rows += 1;
                        continue;
                    }
                }
            }
            None => 1,
        };

        // User label falls back to the key value when no user field is mapped
        // or the row leaves it blank.
        let user = mapping
            .user
            .as_ref()
            .and_then(|f| field(row, f))
            .unwrap_or_else(|| key.clone());

        out.records.push(SourceRecord { key, user, count });
    }

    out
}

/// Trimmed, non-empty field value.
fn field(row: &RawRow, name: &str) -> Option<String> {
    let value = row.get(name)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
