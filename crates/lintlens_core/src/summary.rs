//! Aggregate problem counts across a lint batch.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::result::DocumentResult;
use crate::severity::{Severity, SeverityCode};

/// Appends an `s` to `word` unless `count` is exactly one.
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Problem counts by severity.
///
/// Info diagnostics count toward `total` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    /// Total diagnostics.
    pub total: usize,
    /// Error-level diagnostics.
    pub errors: usize,
    /// Warning-level diagnostics.
    pub warnings: usize,
}

impl fmt::Display for SummaryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} {}, {} {})",
            self.total,
            pluralize("problem", self.total),
            self.errors,
            pluralize("error", self.errors),
            self.warnings,
            pluralize("warning", self.warnings),
        )
    }
}

/// A diagnostic whose severity code could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeverityIssue {
    /// Document the diagnostic belongs to.
    pub document_id: String,
    /// Position of the diagnostic within its document.
    pub index: usize,
    /// The rejected code.
    pub code: SeverityCode,
}

/// Aggregated view of a lint batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Counts by severity.
    pub counts: SummaryCounts,
    /// Diagnostics excluded from the named counts because of an unknown code.
    pub issues: Vec<SeverityIssue>,
}

impl Summary {
    /// The single-line summary message.
    pub fn message(&self) -> String {
        self.counts.to_string()
    }

    /// The summary message behind an optional label such as `"textlint: "`.
    pub fn message_with_prefix(&self, prefix: Option<&str>) -> String {
        match prefix {
            Some(prefix) => format!("{}{}", prefix, self.counts),
            None => self.message(),
        }
    }

    /// Returns true if any diagnostic is error-level.
    pub fn has_errors(&self) -> bool {
        self.counts.errors > 0
    }
}

/// Counts every diagnostic in `results`.
///
/// Unknown severity codes never abort the pass: the diagnostic still counts
/// toward the total and is reported in [`Summary::issues`].
pub fn aggregate(results: &[DocumentResult]) -> Summary {
    let mut summary = Summary::default();

    for result in results {
        for (index, diag) in result.diagnostics.iter().enumerate() {
            summary.counts.total += 1;
            match diag.severity_level() {
                Ok(Severity::Error) => summary.counts.errors += 1,
                Ok(Severity::Warning) => summary.counts.warnings += 1,
                Ok(Severity::Info) => {}
                Err(e) => {
                    warn!(
                        "{} in {} (diagnostic #{}, rule '{}')",
                        e, result.document_id, index, diag.rule_id
                    );
                    summary.issues.push(SeverityIssue {
                        document_id: result.document_id.clone(),
                        index,
                        code: e.code,
                    });
                }
            }
        }
    }

    debug!("Aggregated {} documents: {}", results.len(), summary.counts);

    summary
}
