use std::fmt;

use crate::model::SourceKind;

#[derive(Debug)]
pub enum ReconError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (missing field mapping, bad category, etc.).
    ConfigValidation(String),
    /// One raw source is structurally unparseable. Fatal: reconciling
    /// against a partial source would report misleading mismatches.
    SourceParse { source: SourceKind, message: String },
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::SourceParse { source, message } => {
                write!(f, "{source} source parse error: {message}")
            }
        }
    }
}

impl std::error::Error for ReconError {}
