//! `crosstally-io` — file loading and export for the reconciliation engine.
//!
//! Turns raw CSV/JSON sources into the engine's row maps, loads the
//! document feed for keyword classification, and renders results to XLSX.

pub mod csv;
pub mod documents;
pub mod json;
pub mod xlsx;
