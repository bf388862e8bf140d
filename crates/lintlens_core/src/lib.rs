//! # lintlens_core
//!
//! Lint result aggregation and presentation engine for LintLens.
//!
//! This crate provides:
//! - Severity classification of raw diagnostic codes
//! - The single-line summary of a lint batch
//! - The ordered detail listing and its selection state
//! - Decoding of textlint JSON results, configuration, and renderers
//!
//! ## Example
//!
//! ```rust
//! use lintlens_core::{Diagnostic, DocumentResult, Location, ResultsView, Severity};
//!
//! let results = vec![
//!     DocumentResult::new(
//!         "notes.md",
//!         vec![
//!             Diagnostic::new("no-todo", "found TODO", Location::at(3, 5)),
//!             Diagnostic::new("max-len", "line too long", Location::at(10, 1))
//!                 .with_severity(Severity::Warning),
//!         ],
//!     ),
//! ];
//!
//! let summary = lintlens_core::aggregate(&results);
//! assert_eq!(summary.message(), "2 problems (1 error, 1 warning)");
//!
//! let mut view = ResultsView::new();
//! view.regenerate(&results);
//! view.select(0).unwrap();
//! assert_eq!(
//!     view.selected_entry().unwrap().to_string(),
//!     "[3:5] error found TODO (no-todo)"
//! );
//! ```

mod config;
pub mod detail;
mod diagnostic;
mod error;
pub mod input;
pub mod render;
mod result;
mod selection;
pub mod severity;
pub mod summary;
mod view;

pub use config::{CONFIG_FILES, DEFAULT_CONFIG, ReportConfig};
pub use detail::{DetailEntry, RenderOptions, SeverityLabel, present};
pub use diagnostic::{Diagnostic, Location, Position};
pub use error::{ReportError, SelectError, UnknownSeverity};
pub use render::{OutputFormat, View};
pub use result::{DocumentResult, ResultCollection};
pub use selection::SelectionState;
pub use severity::{Severity, SeverityCode};
pub use summary::{SeverityIssue, Summary, SummaryCounts, aggregate};
pub use view::{EntryRef, ResultsView};
