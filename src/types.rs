use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The fixed field name extracted from each record.
pub const TARGET_KEY: &str = "text";

/// One entry of the output document. Serializes to exactly `{"text": <value>}`;
/// the value itself is unconstrained (string, number, nested structure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntry {
    pub text: Value,
}

impl ExtractedEntry {
    pub fn new(text: Value) -> Self {
        ExtractedEntry { text }
    }
}

/// Classification of a diagnostic raised during extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// The whole file is not a single valid JSON document; line-delimited
    /// parsing takes over. Informational, not a failure.
    MalformedRoot,
    /// A line in line-delimited mode is not valid JSON; the line is skipped.
    MalformedLine,
    /// A record is a JSON object but lacks the target key.
    MissingField,
    /// A record is a valid JSON value but not an object.
    NonRecord,
    /// The document root is neither an array nor an object.
    UnsupportedRoot,
}

/// A single warning or informational message from an extraction run,
/// kept as data so callers can count and classify instead of scraping text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn malformed_root(error: impl fmt::Display) -> Self {
        Diagnostic {
            kind: DiagnosticKind::MalformedRoot,
            message: format!(
                "could not load file as a single JSON document ({}), trying line-delimited JSON",
                error
            ),
        }
    }

    pub fn malformed_line(line: usize, snippet: &str) -> Self {
        Diagnostic {
            kind: DiagnosticKind::MalformedLine,
            message: format!("line {}: could not parse as JSON: {}", line, snippet),
        }
    }

    /// `record` names the offending record: the value of its `id` field when
    /// it has one, a line number in line-delimited mode, or a generic marker.
    pub fn missing_field(record: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::MissingField,
            message: format!("{}: no '{}' key", record.into(), TARGET_KEY),
        }
    }

    pub fn non_record(record: impl Into<String>, snippet: &str) -> Self {
        Diagnostic {
            kind: DiagnosticKind::NonRecord,
            message: format!("{}: not a JSON object: {}", record.into(), snippet),
        }
    }

    pub fn unsupported_root() -> Self {
        Diagnostic {
            kind: DiagnosticKind::UnsupportedRoot,
            message: "document root is neither a JSON object nor a JSON array".to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            DiagnosticKind::MalformedRoot => "Info",
            _ => "Warning",
        };
        write!(f, "{}: {}", prefix, self.message)
    }
}

/// Result of a file-to-file extraction run
#[derive(Debug, Clone)]
pub struct ExtractReport {
    /// Records that decoded successfully (array elements, the root object,
    /// or valid lines)
    pub processed: usize,

    /// Records that were objects carrying the target key
    pub found: usize,

    /// Entries in the output file; always equal to `found`
    pub entries_written: usize,

    /// Warnings and info messages collected along the way
    pub diagnostics: Vec<Diagnostic>,
}

/// Errors that abort an extraction run
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("input file '{}' not found", .0.display())]
    MissingInput(PathBuf),

    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
