//! Text and JSON renderers for the summary and detail views.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::detail::DetailEntry;
use crate::error::ReportError;
use crate::selection::SelectionState;
use crate::summary::Summary;

const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";

/// Which views to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Detail listing followed by the summary line.
    #[default]
    All,
    /// Summary line only.
    Summary,
    /// Detail listing only.
    Detail,
}

impl View {
    fn shows_detail(self) -> bool {
        matches!(self, View::All | View::Detail)
    }

    fn shows_summary(self) -> bool {
        matches!(self, View::All | View::Summary)
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(View::All),
            "summary" => Ok(View::Summary),
            "detail" => Ok(View::Detail),
            other => Err(format!(
                "unknown view '{}' (expected all, summary or detail)",
                other
            )),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            View::All => "all",
            View::Summary => "summary",
            View::Detail => "detail",
        })
    }
}

/// Output encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{}' (expected text or json)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        })
    }
}

/// Renders the requested views as text.
///
/// Entries are grouped under a `{document}:` header; the selected entry is
/// marked with `> `.
pub fn text(
    summary: &Summary,
    entries: &[DetailEntry],
    selection: &SelectionState,
    config: &ReportConfig,
    view: View,
) -> String {
    let mut lines = Vec::new();

    if view.shows_detail() {
        let options = config.render_options();
        let mut current_document: Option<&str> = None;

        for (index, entry) in entries.iter().enumerate() {
            if current_document != Some(entry.document_id()) {
                lines.push(format!("{}:", entry.document_id()));
                current_document = Some(entry.document_id());
            }
            let marker = if selection.is_selected(index) {
                SELECTED_MARKER
            } else {
                UNSELECTED_MARKER
            };
            lines.push(format!("{}{}", marker, entry.render_with(&options)));
        }
    }

    if view.shows_summary() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(summary.message_with_prefix(config.summary_prefix.as_deref()));
    }

    lines.join("\n")
}

/// Renders the requested views as pretty-printed JSON.
pub fn json(
    summary: &Summary,
    entries: &[DetailEntry],
    selection: &SelectionState,
    config: &ReportConfig,
    view: View,
) -> Result<String, ReportError> {
    let mut output = serde_json::Map::new();

    if view.shows_summary() {
        output.insert(
            "summary".to_string(),
            serde_json::json!({
                "total": summary.counts.total,
                "errors": summary.counts.errors,
                "warnings": summary.counts.warnings,
                "message": summary.message_with_prefix(config.summary_prefix.as_deref()),
                "issues": summary.issues,
            }),
        );
    }

    if view.shows_detail() {
        output.insert("entries".to_string(), serde_json::to_value(entries)?);
        output.insert(
            "selected".to_string(),
            serde_json::to_value(selection.current())?,
        );
    }

    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(output))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail;
    use crate::diagnostic::{Diagnostic, Location};
    use crate::result::DocumentResult;
    use crate::severity::Severity;
    use crate::summary;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sample() -> Vec<DocumentResult> {
        vec![
            DocumentResult::new(
                "notes.md",
                vec![
                    Diagnostic::new("no-todo", "found TODO", Location::at(3, 5)),
                    Diagnostic::new("max-len", "line too long", Location::at(10, 1))
                        .with_severity(Severity::Warning),
                ],
            ),
            DocumentResult::clean("readme.md"),
        ]
    }

    fn render(view: View, selected: Option<usize>, config: &ReportConfig) -> String {
        let results = sample();
        let mut selection = SelectionState::new();
        if let Some(index) = selected {
            selection.select(index);
        }
        text(
            &summary::aggregate(&results),
            &detail::present(&results),
            &selection,
            config,
            view,
        )
    }

    #[test]
    fn test_text_all() {
        let output = render(View::All, Some(1), &ReportConfig::default());

        insta::assert_snapshot!(output, @r"
        notes.md:
          [3:5] error found TODO (no-todo)
        > [10:1] warning line too long (max-len)
        readme.md:
          All passed.

        2 problems (1 error, 1 warning)
        ");
    }

    #[test]
    fn test_text_summary_with_prefix() {
        let config = ReportConfig {
            summary_prefix: Some("textlint: ".to_string()),
            ..ReportConfig::default()
        };

        assert_eq!(
            render(View::Summary, None, &config),
            "textlint: 2 problems (1 error, 1 warning)"
        );
    }

    #[test]
    fn test_text_detail_with_clean_message() {
        let config = ReportConfig {
            clean_message: "No problems".to_string(),
            ..ReportConfig::default()
        };

        let output = render(View::Detail, None, &config);

        assert_eq!(output.lines().last(), Some("  No problems"));
        assert!(!output.contains("problems ("));
    }

    #[test]
    fn test_text_empty_collection() {
        let output = text(
            &summary::aggregate(&[]),
            &[],
            &SelectionState::new(),
            &ReportConfig::default(),
            View::All,
        );

        assert_eq!(output, "0 problems (0 errors, 0 warnings)");
    }

    #[test]
    fn test_json_all() {
        let results = sample();
        let mut selection = SelectionState::new();
        selection.select(0);

        let output = json(
            &summary::aggregate(&results),
            &detail::present(&results),
            &selection,
            &ReportConfig::default(),
            View::All,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["summary"]["total"], 2);
        assert_eq!(value["summary"]["message"], "2 problems (1 error, 1 warning)");
        assert_eq!(value["entries"].as_array().unwrap().len(), 3);
        assert_eq!(value["entries"][2]["kind"], "clean");
        assert_eq!(value["selected"], 0);
    }

    #[test]
    fn test_json_keeps_unknown_code() {
        let odd = Diagnostic::new("custom", "strange level", Location::at(4, 2)).with_severity_code(9);
        let results = vec![DocumentResult::new("odd.md", vec![odd])];

        let output = json(
            &summary::aggregate(&results),
            &detail::present(&results),
            &SelectionState::new(),
            &ReportConfig::default(),
            View::All,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["summary"]["total"], 1);
        assert_eq!(value["summary"]["issues"][0]["code"], 9);
        assert_eq!(value["summary"]["issues"][0]["document_id"], "odd.md");
        assert_eq!(value["entries"][0]["severity"], "unknown");
        assert_eq!(value["entries"][0]["diagnostic"]["severity"], 9);
        assert_eq!(value["selected"], serde_json::Value::Null);
    }

    #[test]
    fn test_json_summary_only() {
        let output = json(
            &summary::aggregate(&[]),
            &[],
            &SelectionState::new(),
            &ReportConfig::default(),
            View::Summary,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(value.get("entries").is_none());
        assert_eq!(value["summary"]["issues"], serde_json::json!([]));
    }

    #[rstest]
    #[case("all", View::All)]
    #[case("summary", View::Summary)]
    #[case("detail", View::Detail)]
    fn test_view_from_str(#[case] input: &str, #[case] expected: View) {
        assert_eq!(input.parse::<View>(), Ok(expected));
        assert_eq!(expected.to_string(), input);
    }

    #[test]
    fn test_unknown_view_and_format() {
        assert!("everything".parse::<View>().is_err());
        assert!("sarif".parse::<OutputFormat>().is_err());
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    }
}
