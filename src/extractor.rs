use crate::types::{Diagnostic, ExtractError, ExtractReport, ExtractedEntry, TARGET_KEY};
use crate::writer;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Result of extracting from an in-memory buffer
#[derive(Debug, Default)]
pub struct Extraction {
    /// Entries collected in encounter order
    pub entries: Vec<ExtractedEntry>,

    /// Warnings and info messages, in the order they were raised
    pub diagnostics: Vec<Diagnostic>,

    /// Records that decoded successfully
    pub processed: usize,

    /// Records that were objects carrying the target key
    pub found: usize,
}

/// Extract target-key values from a buffer holding either a single JSON
/// document or newline-delimited JSON.
///
/// The whole buffer is tried as one JSON value first; only when that parse
/// fails does line-delimited handling take over. A root that parses but is
/// neither an array nor an object yields a diagnostic and zero records,
/// without attempting the line-delimited path.
pub fn extract_content(content: &str) -> Extraction {
    let mut out = Extraction::default();

    match parse_whole(content) {
        Ok(root) => extract_from_root(root, &mut out),
        Err(error) => {
            out.diagnostics.push(Diagnostic::malformed_root(error));
            extract_from_lines(content, &mut out);
        }
    }

    out
}

/// Extract from `input` and write the collected entries to `output` as a
/// pretty-printed JSON array. The output file is written (even when empty)
/// in every path past the initial existence check.
pub fn extract_to_file(input: &Path, output: &Path) -> Result<ExtractReport, ExtractError> {
    if !input.exists() {
        return Err(ExtractError::MissingInput(input.to_path_buf()));
    }

    let content = fs::read_to_string(input).map_err(|source| ExtractError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let extraction = extract_content(&content);

    let mut buf = Vec::new();
    writer::write_entries(&mut buf, &extraction.entries).map_err(|e| ExtractError::Write {
        path: output.to_path_buf(),
        source: e.into(),
    })?;
    fs::write(output, buf).map_err(|source| ExtractError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(ExtractReport {
        processed: extraction.processed,
        found: extraction.found,
        entries_written: extraction.entries.len(),
        diagnostics: extraction.diagnostics,
    })
}

/// Try the whole buffer as exactly one JSON value, SIMD-accelerated.
/// The error carries the parser's message for the info diagnostic.
fn parse_whole(content: &str) -> Result<Value, String> {
    let mut bytes = content.as_bytes().to_vec();
    let owned = simd_json::to_owned_value(&mut bytes).map_err(|e| e.to_string())?;

    // Rebuild as a serde_json value for uniform downstream handling
    let rendered = simd_json::to_string(&owned).map_err(|e| e.to_string())?;
    serde_json::from_str(&rendered).map_err(|e| e.to_string())
}

fn extract_from_root(root: Value, out: &mut Extraction) {
    match root {
        Value::Array(items) => {
            for (idx, item) in items.into_iter().enumerate() {
                out.processed += 1;
                match item {
                    Value::Object(mut obj) => {
                        if let Some(text) = obj.remove(TARGET_KEY) {
                            out.entries.push(ExtractedEntry::new(text));
                            out.found += 1;
                        } else {
                            let name = element_name(&obj);
                            out.diagnostics.push(Diagnostic::missing_field(name));
                        }
                    }
                    other => {
                        out.diagnostics.push(Diagnostic::non_record(
                            format!("element {}", idx + 1),
                            &snippet(&other.to_string()),
                        ));
                    }
                }
            }
        }
        Value::Object(mut obj) => {
            out.processed += 1;
            if let Some(text) = obj.remove(TARGET_KEY) {
                out.entries.push(ExtractedEntry::new(text));
                out.found += 1;
            } else {
                out.diagnostics.push(Diagnostic::missing_field("root object"));
            }
        }
        _ => {
            out.diagnostics.push(Diagnostic::unsupported_root());
        }
    }
}

fn extract_from_lines(content: &str, out: &mut Extraction) {
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let lineno = idx + 1;

        match serde_json::from_str::<Value>(line) {
            Ok(Value::Object(mut obj)) => {
                out.processed += 1;
                if let Some(text) = obj.remove(TARGET_KEY) {
                    out.entries.push(ExtractedEntry::new(text));
                    out.found += 1;
                } else {
                    out.diagnostics
                        .push(Diagnostic::missing_field(format!("line {}", lineno)));
                }
            }
            Ok(_) => {
                out.processed += 1;
                out.diagnostics
                    .push(Diagnostic::non_record(format!("line {}", lineno), &snippet(line)));
            }
            Err(_) => {
                out.diagnostics
                    .push(Diagnostic::malformed_line(lineno, &snippet(line)));
            }
        }
    }
}

/// Name an array element for a warning: its `id` value when present,
/// a generic marker otherwise.
fn element_name(obj: &serde_json::Map<String, Value>) -> String {
    match obj.get("id") {
        Some(Value::String(s)) => format!("object '{}'", s),
        Some(other) => format!("object '{}'", other),
        None => "unknown object".to_string(),
    }
}

/// First 80 characters of offending content, marked when cut short
fn snippet(s: &str) -> String {
    let mut truncated: String = s.chars().take(80).collect();
    if s.chars().nth(80).is_some() {
        truncated.push_str("...");
    }
    truncated
}
