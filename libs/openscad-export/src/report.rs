//! # Export Report
//!
//! Batch outcome summary. Skips are data, not log lines: the caller decides
//! whether a skipped object is worth surfacing to the user.

use serde::{Deserialize, Serialize};

/// Why an object produced no declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Zero vertices and zero faces: nothing to emit.
    InsufficientGeometry,
    /// A structural error rejected the whole object (message from the
    /// underlying [`crate::ExportError`]).
    Structural { message: String },
}

/// One skipped object with its reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedObject {
    pub name: String,
    pub reason: SkipReason,
}

/// Summary of one export invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    /// Names of objects whose declarations reached the sink, in order.
    pub exported: Vec<String>,
    /// Objects that produced no declarations, in encounter order.
    pub skipped: Vec<SkippedObject>,
}

impl ExportReport {
    /// Returns true if every object was exported.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_clean() {
        assert!(ExportReport::default().is_clean());
    }

    #[test]
    fn test_skip_marks_report_dirty() {
        let report = ExportReport {
            exported: vec!["a".into()],
            skipped: vec![SkippedObject {
                name: "b".into(),
                reason: SkipReason::InsufficientGeometry,
            }],
        };
        assert!(!report.is_clean());
    }
}
