//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of
//! the shell contract — scripts rely on them.
//!
//! | Code | Meaning                                        |
//! |------|------------------------------------------------|
//! | 0    | Success, sources fully reconciled              |
//! | 1    | Mismatches found (like `diff(1)`)              |
//! | 2    | Usage error (bad args, unreadable config path) |
//! | 3    | Invalid config (parse or validation)           |
//! | 4    | Source parse error (CSV/JSON/feed)             |
//! | 5    | Runtime/IO error (output write, etc.)          |

/// Success - reconciliation ran and every key matched.
pub const EXIT_SUCCESS: u8 = 0;

/// Reconciliation ran and found mismatched keys.
pub const EXIT_MISMATCH: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Config file failed to parse or validate.
pub const EXIT_INVALID_CONFIG: u8 = 3;

/// A raw source (CSV, JSON, or document feed) is structurally unparseable.
pub const EXIT_PARSE: u8 = 4;

/// Runtime failure - output file write, engine error.
pub const EXIT_RUNTIME: u8 = 5;
