use crate::types::ExtractedEntry;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

/// Serialize the collected entries as a pretty-printed JSON array.
///
/// Uses four-space indentation and leaves non-ASCII characters literal,
/// so `[{"text": "wörld"}]` round-trips unescaped. An empty slice
/// produces `[]`.
pub fn write_entries<W: Write>(writer: W, entries: &[ExtractedEntry]) -> serde_json::Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    entries.serialize(&mut ser)
}
