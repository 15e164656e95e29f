//! Removal of source documents whose locale was excluded.

use locc_markup::MarkupSource;

use crate::context::Orphan;
use crate::CompileError;

/// Outcome of a prune pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PruneReport {
    /// Paths deleted, or that would be deleted on a dry run.
    pub removed: Vec<String>,
    /// Orphans left alone because they are neutral.
    pub kept: Vec<String>,
}

/// Delete the source document of every specific orphan.
///
/// Neutral orphans are only reported; their document is also the language
/// layer of every specific locale of that language.
pub fn prune_orphan_sources(
    source: &mut dyn MarkupSource,
    orphans: &[Orphan],
    dry_run: bool,
) -> Result<PruneReport, CompileError> {
    let mut report = PruneReport::default();
    for orphan in orphans {
        let path = orphan.source_path();
        if orphan.target.neutral {
            tracing::debug!(locale = %orphan.name, path = %path, "keeping neutral orphan");
            report.kept.push(path);
            continue;
        }
        if dry_run {
            report.removed.push(path);
            continue;
        }
        if source.remove(&path)? {
            tracing::info!(locale = %orphan.name, path = %path, "removed orphan source");
            report.removed.push(path);
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests;
