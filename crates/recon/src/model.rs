use std::collections::BTreeMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One pre-parsed row from either source: field name → raw string value.
/// Loaders stringify scalars; the normalizer applies the field mapping.
pub type RawRow = BTreeMap<String, String>;

/// Which of the two fixed sources a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Csv,
    Json,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// One item of the classification feed. A field is `None` when it could
/// not be read; a document with neither field is unclassifiable.
#[derive(Debug, Clone)]
pub struct Document {
    pub identifier: Option<String>,
    pub content: Option<String>,
}

/// Pre-loaded inputs for one reconciliation call.
pub struct CompareInput {
    pub csv_rows: Vec<RawRow>,
    pub json_rows: Vec<RawRow>,
    pub documents: Vec<Document>,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// A single normalized record from one source.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    pub key: String,
    pub user: String,
    pub count: u64,
}

/// Normalizer output for one source: records in original row order, plus
/// the number of malformed rows skipped (diagnostic, not a failure).
#[derive(Debug, Default)]
pub struct NormalizedSource {
    pub records: Vec<SourceRecord>,
    pub skipped_rows: usize,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// One keyword category's document count, carrying the matched substring
/// so consumers can label the figure without reaching back into config.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub substring: String,
    pub count: u64,
}

/// Classifier output: per-category document counts (every configured
/// category present, zero included, ordered by name) plus
/// unreadable-document diagnostics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryTally {
    pub counts: Vec<CategoryCount>,
    pub skipped_documents: usize,
}

// ---------------------------------------------------------------------------
// Comparison rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    Match,
    Mismatch,
}

impl std::fmt::Display for RowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Match => write!(f, "match"),
            Self::Mismatch => write!(f, "mismatch"),
        }
    }
}

/// One row per distinct key observed in either source.
///
/// Invariants: `difference == csv_count.abs_diff(json_count)`, and
/// `status == Match` iff `difference == 0`.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub user: String,
    pub key: String,
    pub csv_count: u64,
    pub json_count: u64,
    pub difference: u64,
    pub status: RowStatus,
}

// ---------------------------------------------------------------------------
// Summary + Result
// ---------------------------------------------------------------------------

/// Aggregate figures computed once by the report builder. Downstream
/// consumers (CLI, XLSX export) display these verbatim and never re-derive
/// them from `details`.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_rows: usize,
    pub matched: usize,
    pub mismatched: usize,
    pub total_csv_count: u64,
    pub total_json_count: u64,
    pub category_counts: Vec<CategoryCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub config_name: String,
    pub engine_version: String,
    pub run_at: String,
    pub skipped_csv_rows: usize,
    pub skipped_json_rows: usize,
    pub skipped_documents: usize,
}

/// The sole artifact of one reconciliation call. Immutable after
/// construction; owned by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub meta: ReportMeta,
    pub details: Vec<ComparisonRow>,
    pub summary: Summary,
    pub processing_time_seconds: f64,
}
