//! Decoding of textlint `--format json` output.
//!
//! ```json
//! [
//!   {
//!     "filePath": "/docs/notes.md",
//!     "messages": [
//!       {
//!         "ruleId": "no-todo",
//!         "message": "found TODO",
//!         "severity": 2,
//!         "line": 3,
//!         "column": 5,
//!         "loc": { "start": { "line": 3, "column": 5 }, "end": { "line": 3, "column": 9 } }
//!       }
//!     ]
//!   }
//! ]
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::diagnostic::{Diagnostic, Location, Position};
use crate::error::ReportError;
use crate::result::{DocumentResult, ResultCollection};
use crate::severity::SeverityCode;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResult {
    file_path: String,
    #[serde(default)]
    messages: Vec<RawMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMessage {
    #[serde(default)]
    rule_id: Option<String>,
    message: String,
    #[serde(default)]
    severity: serde_json::Value,
    #[serde(default)]
    line: Option<u32>,
    #[serde(default)]
    column: Option<u32>,
    #[serde(default)]
    loc: Option<RawLoc>,
}

#[derive(Debug, Deserialize)]
struct RawLoc {
    start: Position,
    #[serde(default)]
    end: Option<Position>,
}

impl RawMessage {
    fn into_diagnostic(self, file_path: &str, index: usize) -> Result<Diagnostic, ReportError> {
        let loc = match (self.loc, self.line, self.column) {
            (Some(loc), _, _) => Location {
                start: loc.start,
                end: loc.end,
            },
            (None, Some(line), Some(column)) => Location::at(line, column),
            _ => {
                return Err(ReportError::input(format!(
                    "message #{} in {} has no location",
                    index, file_path
                )));
            }
        };

        Ok(Diagnostic {
            rule_id: self.rule_id.unwrap_or_default(),
            message: self.message,
            severity: SeverityCode::from_json(&self.severity),
            loc,
        })
    }
}

/// Decodes a result collection from a JSON string.
pub fn from_json(json: &str) -> Result<ResultCollection, ReportError> {
    let raw: Vec<RawResult> = serde_json::from_str(json)?;
    convert(raw)
}

/// Decodes a result collection from a reader.
pub fn from_reader(reader: impl Read) -> Result<ResultCollection, ReportError> {
    let raw: Vec<RawResult> = serde_json::from_reader(reader)?;
    convert(raw)
}

/// Decodes a result collection from a file.
pub fn from_path(path: impl AsRef<Path>) -> Result<ResultCollection, ReportError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        ReportError::input(format!("Failed to read {}: {}", path.display(), e))
    })?;
    from_json(&content)
}

fn convert(raw: Vec<RawResult>) -> Result<ResultCollection, ReportError> {
    let results = raw
        .into_iter()
        .map(|result| {
            let diagnostics = result
                .messages
                .into_iter()
                .enumerate()
                .map(|(index, message)| message.into_diagnostic(&result.file_path, index))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(DocumentResult::new(result.file_path, diagnostics))
        })
        .collect::<Result<ResultCollection, ReportError>>()?;

    debug!("Decoded {} document results", results.len());
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "filePath": "/docs/notes.md",
            "messages": [
                {
                    "type": "lint",
                    "ruleId": "no-todo",
                    "message": "found TODO",
                    "index": 20,
                    "line": 3,
                    "column": 5,
                    "range": [20, 24],
                    "loc": {
                        "start": { "line": 3, "column": 5 },
                        "end": { "line": 3, "column": 9 }
                    },
                    "severity": 2
                },
                {
                    "ruleId": "max-len",
                    "message": "line too long",
                    "line": 10,
                    "column": 1,
                    "severity": 1
                }
            ]
        },
        { "filePath": "/docs/empty.md", "messages": [] }
    ]"#;

    #[test]
    fn test_from_json() {
        let results = from_json(SAMPLE).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].document_id, "/docs/notes.md");
        assert_eq!(
            results[0].diagnostics[0],
            Diagnostic::new("no-todo", "found TODO", Location::at(3, 5))
                .with_end(Position::new(3, 9))
        );
        assert_eq!(
            results[0].diagnostics[1],
            Diagnostic::new("max-len", "line too long", Location::at(10, 1))
                .with_severity(Severity::Warning)
        );
        assert!(results[1].is_clean());
    }

    #[test]
    fn test_unknown_severity_survives_decoding() {
        let json = r#"[{ "filePath": "a.md", "messages": [
            { "ruleId": "r", "message": "m", "line": 1, "column": 1, "severity": 9 }
        ]}]"#;

        let results = from_json(json).unwrap();

        assert_eq!(results[0].diagnostics[0].severity, SeverityCode::Code(9));
    }

    #[test]
    fn test_malformed_severity_is_kept_per_item() {
        let json = r#"[{ "filePath": "a.md", "messages": [
            { "ruleId": "no-todo", "message": "found TODO", "line": 1, "column": 1, "severity": 2 },
            { "ruleId": "odd", "message": "half", "line": 2, "column": 1, "severity": 2.5 },
            { "ruleId": "odd", "message": "named", "line": 3, "column": 1, "severity": "error" },
            { "ruleId": "odd", "message": "none", "line": 4, "column": 1, "severity": null },
            { "ruleId": "odd", "message": "missing", "line": 5, "column": 1 }
        ]}]"#;

        let results = from_json(json).unwrap();
        let codes: Vec<_> = results[0].diagnostics.iter().map(|d| d.severity.clone()).collect();

        assert_eq!(
            codes,
            vec![
                SeverityCode::Code(2),
                SeverityCode::Invalid("2.5".to_string()),
                SeverityCode::Invalid("\"error\"".to_string()),
                SeverityCode::Invalid("null".to_string()),
                SeverityCode::Invalid("null".to_string()),
            ]
        );

        let summary = crate::summary::aggregate(&results);
        assert_eq!(summary.message(), "5 problems (1 error, 0 warnings)");
        assert_eq!(summary.issues.len(), 4);

        let entries = crate::detail::present(&results);
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].to_string(), "[1:1] error found TODO (no-todo)");
        assert_eq!(entries[2].to_string(), "[3:1] unknown named (odd)");
    }

    #[test]
    fn test_missing_rule_id_and_messages() {
        let json = r#"[
            { "filePath": "a.md", "messages": [
                { "message": "m", "line": 1, "column": 2, "severity": 0 }
            ]},
            { "filePath": "b.md" }
        ]"#;

        let results = from_json(json).unwrap();

        assert_eq!(results[0].diagnostics[0].rule_id, "");
        assert!(results[1].is_clean());
    }

    #[test]
    fn test_missing_location_is_rejected() {
        let json = r#"[{ "filePath": "a.md", "messages": [
            { "ruleId": "r", "message": "m", "severity": 2 }
        ]}]"#;

        let err = from_json(json).unwrap_err();

        assert!(matches!(err, ReportError::Input(_)));
        assert!(err.to_string().contains("has no location"));
    }

    #[test]
    fn test_invalid_json() {
        let err = from_json("{ not json").unwrap_err();
        assert!(matches!(err, ReportError::Json(_)));
    }

    #[test]
    fn test_from_reader_and_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let from_file = from_path(file.path()).unwrap();
        let from_bytes = from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(from_file, from_bytes);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = from_path("/nonexistent/results.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
