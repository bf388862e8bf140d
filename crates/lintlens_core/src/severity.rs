//! Severity levels and their canonical labels.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::UnknownSeverity;

/// Severity level of a diagnostic.
///
/// The discriminants match the numeric codes emitted by textlint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Info - informational message.
    Info = 0,
    /// Warning - should be reviewed.
    Warning = 1,
    /// Error - must be fixed.
    Error = 2,
}

impl Severity {
    /// Returns the canonical lowercase label.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Returns the numeric code.
    pub const fn code(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for Severity {
    type Error = UnknownSeverity;

    fn try_from(code: i64) -> Result<Self, UnknownSeverity> {
        classify(code)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity as reported by the linter, before classification.
///
/// Values that are not integers (`2.5`, `"error"`, `null`) are kept as their
/// JSON text so they reach the classifier instead of failing the batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SeverityCode {
    /// An integer code.
    Code(i64),
    /// Anything else, as JSON text.
    Invalid(String),
}

impl SeverityCode {
    /// Reads a code from an arbitrary JSON value.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value.as_i64() {
            Some(code) => SeverityCode::Code(code),
            None => SeverityCode::Invalid(value.to_string()),
        }
    }

    /// Classifies the code.
    pub fn classify(&self) -> Result<Severity, UnknownSeverity> {
        match self {
            SeverityCode::Code(code) => classify(*code),
            SeverityCode::Invalid(_) => Err(UnknownSeverity { code: self.clone() }),
        }
    }
}

impl From<i64> for SeverityCode {
    fn from(code: i64) -> Self {
        SeverityCode::Code(code)
    }
}

impl From<Severity> for SeverityCode {
    fn from(severity: Severity) -> Self {
        SeverityCode::Code(severity.code())
    }
}

impl PartialEq<i64> for SeverityCode {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, SeverityCode::Code(code) if code == other)
    }
}

impl fmt::Display for SeverityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityCode::Code(code) => write!(f, "{}", code),
            SeverityCode::Invalid(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for SeverityCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SeverityCode::Code(code) => serializer.serialize_i64(*code),
            SeverityCode::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for SeverityCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(|value| Self::from_json(&value))
    }
}

/// Maps a numeric severity code to its level.
pub fn classify(code: i64) -> Result<Severity, UnknownSeverity> {
    match code {
        0 => Ok(Severity::Info),
        1 => Ok(Severity::Warning),
        2 => Ok(Severity::Error),
        _ => Err(UnknownSeverity {
            code: SeverityCode::Code(code),
        }),
    }
}

/// Maps a numeric severity code straight to its label.
pub fn label_for(code: i64) -> Result<&'static str, UnknownSeverity> {
    classify(code).map(Severity::label)
}
