//! Ordered, per-diagnostic detail listing.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::diagnostic::Diagnostic;
use crate::result::DocumentResult;
use crate::severity::{Severity, SeverityCode};

/// Default text of the clean indicator.
pub const ALL_PASSED: &str = "All passed.";

/// Label used for severity codes outside the known levels.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Resolved severity of a finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SeverityLabel {
    /// A recognized level.
    Known(Severity),
    /// A code the classifier rejected.
    Unknown(SeverityCode),
}

impl SeverityLabel {
    /// Resolves a diagnostic's raw code.
    pub fn of(diag: &Diagnostic) -> Self {
        match diag.severity_level() {
            Ok(level) => SeverityLabel::Known(level),
            Err(e) => SeverityLabel::Unknown(e.code),
        }
    }

    /// Returns the text shown in the listing.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLabel::Known(level) => level.label(),
            SeverityLabel::Unknown(_) => UNKNOWN_LABEL,
        }
    }
}

impl fmt::Display for SeverityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SeverityLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One line of the detail listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DetailEntry {
    /// The document has no diagnostics.
    Clean { document_id: String },

    /// A single diagnostic.
    Finding {
        document_id: String,
        diagnostic: Diagnostic,
        severity: SeverityLabel,
    },
}

/// Options for turning entries into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text of the clean indicator.
    pub clean_message: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            clean_message: ALL_PASSED.to_string(),
        }
    }
}

impl DetailEntry {
    /// Returns the document this entry belongs to.
    pub fn document_id(&self) -> &str {
        match self {
            DetailEntry::Clean { document_id } | DetailEntry::Finding { document_id, .. } => {
                document_id
            }
        }
    }

    /// Returns true for the clean indicator.
    pub fn is_clean(&self) -> bool {
        matches!(self, DetailEntry::Clean { .. })
    }

    /// Renders the entry as a single line.
    pub fn render_with(&self, options: &RenderOptions) -> String {
        match self {
            DetailEntry::Clean { .. } => options.clean_message.clone(),
            DetailEntry::Finding { .. } => self.to_string(),
        }
    }
}

impl fmt::Display for DetailEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailEntry::Clean { .. } => f.write_str(ALL_PASSED),
            DetailEntry::Finding {
                diagnostic,
                severity,
                ..
            } => write!(
                f,
                "[{}:{}] {} {} ({})",
                diagnostic.loc.start.line,
                diagnostic.loc.start.column,
                severity,
                diagnostic.message,
                diagnostic.rule_id
            ),
        }
    }
}

/// Builds the detail listing for `results`.
///
/// Document order and per-document diagnostic order are preserved. A
/// document without diagnostics yields exactly one clean entry.
pub fn present(results: &[DocumentResult]) -> Vec<DetailEntry> {
    let capacity = results.iter().map(|r| r.diagnostics.len().max(1)).sum();
    let mut entries = Vec::with_capacity(capacity);

    for result in results {
        if result.is_clean() {
            entries.push(DetailEntry::Clean {
                document_id: result.document_id.clone(),
            });
            continue;
        }

        entries.extend(result.diagnostics.iter().map(|diag| DetailEntry::Finding {
            document_id: result.document_id.clone(),
            diagnostic: diag.clone(),
            severity: SeverityLabel::of(diag),
        }));
    }

    debug!("Presented {} entries for {} documents", entries.len(), results.len());

    entries
}
