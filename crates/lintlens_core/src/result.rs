//! Lint result types.

use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;

/// Result of linting a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Path or name of the document. Opaque to the engine.
    pub document_id: String,

    /// Diagnostics in order of occurrence.
    pub diagnostics: Vec<Diagnostic>,
}

impl DocumentResult {
    /// Creates a new document result.
    pub fn new(document_id: impl Into<String>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            document_id: document_id.into(),
            diagnostics,
        }
    }

    /// Creates a result for a document without diagnostics.
    pub fn clean(document_id: impl Into<String>) -> Self {
        Self::new(document_id, Vec::new())
    }

    /// Returns true if the document has no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// All document results of one lint batch, in batch order.
pub type ResultCollection = Vec<DocumentResult>;
