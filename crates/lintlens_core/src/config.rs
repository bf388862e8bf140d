//! Report configuration.

use std::fs;
use std::path::{Path, PathBuf};

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};

use crate::detail::{ALL_PASSED, RenderOptions};
use crate::error::ReportError;
use crate::render::{OutputFormat, View};

/// Config file names, in lookup order.
pub const CONFIG_FILES: [&str; 2] = [".lintlens.jsonc", ".lintlens.json"];

/// Contents written by `lintlens init`.
pub const DEFAULT_CONFIG: &str = r#"{
  // Label placed before the summary line, e.g. "textlint: "
  "summaryPrefix": null,
  // Text shown for documents without diagnostics
  "cleanMessage": "All passed.",
  // "all", "summary" or "detail"
  "view": "all",
  // "text" or "json"
  "format": "text"
}
"#;

/// Configuration for rendering reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReportConfig {
    /// Label placed before the summary line.
    #[serde(default)]
    pub summary_prefix: Option<String>,

    /// Text of the clean indicator.
    #[serde(default = "default_clean_message")]
    pub clean_message: String,

    /// View rendered when none is requested.
    #[serde(default)]
    pub view: View,

    /// Output format used when none is requested.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_clean_message() -> String {
    ALL_PASSED.to_string()
}

impl ReportConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            summary_prefix: None,
            clean_message: default_clean_message(),
            view: View::default(),
            format: OutputFormat::default(),
        }
    }

    /// Loads configuration from a file.
    ///
    /// Supports `.lintlens.jsonc`, `.lintlens.json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ReportError::config(format!("Failed to read config: {}", e)))?;

        Self::from_jsonc(&content)
    }

    /// Parses configuration from JSON with comments.
    pub fn from_jsonc(content: &str) -> Result<Self, ReportError> {
        let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
            .map_err(|e| ReportError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        serde_json::from_value(value)
            .map_err(|e| ReportError::config(format!("Invalid config: {}", e)))
    }

    /// Looks for a config file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Options for rendering detail entries.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            clean_message: self.clean_message.clone(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}
