use std::time::Instant;

use crate::model::{CategoryTally, ComparisonResult, ComparisonRow, ReportMeta, RowStatus, Summary};

/// Assemble the final result from reconciliation rows and the category
/// tally: the sole place totals are computed. Consumers display the
/// summary verbatim so row-level and summary-level figures cannot drift.
pub fn build_report(
    config_name: &str,
    details: Vec<ComparisonRow>,
    tally: CategoryTally,
    skipped_csv_rows: usize,
    skipped_json_rows: usize,
    started: Instant,
) -> ComparisonResult {
    let mut total_csv_count: u64 = 0;
    let mut total_json_count: u64 = 0;
    let mut matched = 0;

    for row in &details {
        total_csv_count += row.csv_count;
        total_json_count += row.json_count;
        if row.status == RowStatus::Match {
            matched += 1;
        }
    }

    let summary = Summary {
        total_rows: details.len(),
        matched,
        mismatched: details.len() - matched,
        total_csv_count,
        total_json_count,
        category_counts: tally.counts,
    };

    ComparisonResult {
        meta: ReportMeta {
            config_name: config_name.to_string(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
            skipped_csv_rows,
            skipped_json_rows,
            skipped_documents: tally.skipped_documents,
        },
        details,
        summary,
        processing_time_seconds: started.elapsed().as_secs_f64(),
    }
}
