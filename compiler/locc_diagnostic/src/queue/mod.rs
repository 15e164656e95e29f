//! Diagnostic queue for one compilation run.
//!
//! Every diagnostic is kept: a skipped field in one locale never hides a
//! skipped field in another. Each report is also logged through `tracing`
//! as it arrives, so a filtered log shows it next to the stage that
//! produced it.

use crate::{Diagnostic, ErrorCode};

/// Collects diagnostics in report order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn report(&mut self, diag: Diagnostic) {
        if diag.is_error() {
            self.error_count += 1;
        } else if diag.is_warning() {
            self.warning_count += 1;
        }
        tracing::warn!(
            code = diag.code.as_str(),
            locale = diag.locale.as_deref().unwrap_or("-"),
            "{}",
            diag.message
        );
        self.diagnostics.push(diag);
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of diagnostics reported with `code`.
    pub fn count_of(&self, code: ErrorCode) -> usize {
        self.diagnostics.iter().filter(|d| d.code == code).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Drain the queue, grouped by locale in first-report order.
    ///
    /// Diagnostics without a locale come last. Within a group, report
    /// order is preserved.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let drained = std::mem::take(&mut self.diagnostics);
        self.error_count = 0;
        self.warning_count = 0;

        let mut first_seen: Vec<&str> = Vec::new();
        let keys: Vec<usize> = drained
            .iter()
            .map(|diag| match diag.locale.as_deref() {
                Some(locale) => match first_seen.iter().position(|seen| *seen == locale) {
                    Some(pos) => pos,
                    None => {
                        first_seen.push(locale);
                        first_seen.len() - 1
                    }
                },
                None => usize::MAX,
            })
            .collect();

        let mut keyed: Vec<(usize, Diagnostic)> = keys.into_iter().zip(drained).collect();
        keyed.sort_by_key(|(key, _)| *key);
        keyed.into_iter().map(|(_, diag)| diag).collect()
    }
}
