//! # Textsift - JSON text field extraction
//!
//! Reads a file holding either a single JSON document (object or array) or
//! newline-delimited JSON records, pulls the value stored under the `text`
//! key out of each record, and writes the collected values to a new file as
//! a pretty-printed JSON array of `{"text": <value>}` objects.
//!
//! ## Modules
//!
//! - **extractor**: the two-path parse (whole document first, line-delimited
//!   fallback) and the file-to-file entry point
//! - **writer**: output document serialization
//! - **types**: entries, diagnostics, and the run report
//!
//! ## Quick Start
//!
//! ```rust
//! use textsift::extract_content;
//!
//! let input = "{\"text\":\"hello\"}\n{\"id\":7}\n{\"text\":\"world\"}";
//! let extraction = extract_content(input);
//!
//! assert_eq!(extraction.processed, 3);
//! assert_eq!(extraction.found, 2);
//! assert_eq!(extraction.entries[0].text, "hello");
//! ```

pub mod extractor;
pub mod types;
pub mod writer;

// Re-export commonly used items for convenience
pub use extractor::{extract_content, extract_to_file, Extraction};
pub use types::{
    Diagnostic, DiagnosticKind, ExtractError, ExtractReport, ExtractedEntry, TARGET_KEY,
};
pub use writer::write_entries;
