//! `crosstally-recon` — CSV-vs-JSON export reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded raw rows and a document feed,
//! returns a fully materialized comparison report. No file IO or CLI
//! dependencies.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod normalize;
pub mod report;

pub use classify::KeywordClassifier;
pub use config::CompareConfig;
pub use engine::{reconcile, run};
pub use error::ReconError;
pub use model::{
    CategoryCount, CompareInput, ComparisonResult, ComparisonRow, Document, RowStatus, SourceKind,
};
