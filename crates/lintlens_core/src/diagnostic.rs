//! Diagnostic types for lint results.

use serde::{Deserialize, Serialize};

use crate::error::UnknownSeverity;
use crate::severity::{Severity, SeverityCode};

/// A position in a linted document.
///
/// Both line and column are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Location of a diagnostic.
///
/// Only the start is used for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Start position.
    pub start: Position,
    /// End position, when the linter reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Position>,
}

impl Location {
    /// Creates a location with only a start position.
    #[inline]
    pub const fn at(line: u32, column: u32) -> Self {
        Self {
            start: Position::new(line, column),
            end: None,
        }
    }
}

/// A problem reported by the external linter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule that generated this diagnostic.
    pub rule_id: String,

    /// The diagnostic message.
    pub message: String,

    /// Raw severity code. Kept unvalidated so malformed codes reach the
    /// classifier instead of failing the whole batch.
    pub severity: SeverityCode,

    /// Line/column location.
    pub loc: Location,
}

impl Diagnostic {
    /// Creates a new error-level diagnostic.
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, loc: Location) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            severity: Severity::Error.into(),
            loc,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity.into();
        self
    }

    /// Sets a raw integer severity code.
    pub fn with_severity_code(mut self, code: i64) -> Self {
        self.severity = SeverityCode::Code(code);
        self
    }

    /// Sets a raw severity of any shape.
    pub fn with_raw_severity(mut self, severity: SeverityCode) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the end position.
    pub fn with_end(mut self, end: Position) -> Self {
        self.loc.end = Some(end);
        self
    }

    /// Classifies the raw severity code.
    pub fn severity_level(&self) -> Result<Severity, UnknownSeverity> {
        self.severity.classify()
    }
}
