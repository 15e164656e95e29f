//! The locale data compiler driver.
//!
//! Ties the stages together: markup tree on disk, layered resolution,
//! region resolution and table rendering. The `locc` binary is a thin
//! argument parser over [`commands`].

pub mod commands;
mod logging;

use std::path::Path;

use locc_diagnostic::Diagnostic;
use locc_markup::FsSource;
use locc_resolve::{compile_all, prune_orphan_sources, CompileError, CompileOptions, PruneReport};

pub use logging::init_tracing;

/// Result of compiling an input tree.
#[derive(Debug)]
pub struct BuildOutcome {
    /// The rendered C tables.
    pub artifact: String,
    /// Every diagnostic of the run, grouped by locale.
    pub diagnostics: Vec<Diagnostic>,
    pub excluded: usize,
    pub warnings: usize,
}

/// Compile the tree rooted at `input` and render the tables.
pub fn compile_tree(input: &Path, options: CompileOptions) -> Result<BuildOutcome, CompileError> {
    let source = FsSource::new(input);
    let mut compilation = compile_all(&source, options)?;
    let artifact = locc_emit::render(&mut compilation)?;

    let excluded = compilation.diagnostics.error_count();
    let warnings = compilation.diagnostics.warning_count();
    Ok(BuildOutcome {
        artifact,
        diagnostics: compilation.diagnostics.flush(),
        excluded,
        warnings,
    })
}

/// Compile the tree rooted at `input` and delete the sources of the
/// locales that were excluded.
pub fn prune_tree(
    input: &Path,
    options: CompileOptions,
    dry_run: bool,
) -> Result<PruneReport, CompileError> {
    let mut source = FsSource::new(input);
    let orphans = compile_all(&source, options)?.orphans;
    prune_orphan_sources(&mut source, &orphans, dry_run)
}
