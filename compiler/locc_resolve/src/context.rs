//! State threaded through every stage of a run.

use std::rc::Rc;

use locc_diagnostic::{Diagnostic, DiagnosticQueue};
use locc_ir::{InternPools, LocaleArena};
use locc_markup::{Document, MarkupSource};
use rustc_hash::FxHashMap;

use crate::tables::{ReferenceNames, SideTables};
use crate::targets::{Layer, Target, LANGS_DIR};
use crate::{CompileError, CompileOptions};

/// A locale dropped for lack of a numeric id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Orphan {
    /// Composed name that had no directory entry.
    pub name: String,
    pub target: Target,
}

impl Orphan {
    /// Document backing the dropped locale.
    pub fn source_path(&self) -> String {
        self.target.source_path()
    }
}

/// Mutable state for one compilation run.
pub struct CompileContext<'s> {
    source: &'s dyn MarkupSource,
    pub options: CompileOptions,
    pub pools: InternPools,
    pub locales: LocaleArena,
    pub tables: SideTables,
    pub diagnostics: DiagnosticQueue,
    pub orphans: Vec<Orphan>,
    /// Parsed documents by path; `None` records a missing document.
    documents: FxHashMap<String, Option<Rc<Document>>>,
}

impl<'s> CompileContext<'s> {
    /// Load side tables and check that the required root layers exist.
    pub fn new(source: &'s dyn MarkupSource, options: CompileOptions) -> Result<Self, CompileError> {
        let mut diagnostics = DiagnosticQueue::new();
        let tables = SideTables::load(source, &mut diagnostics)?;
        let mut ctx = CompileContext {
            source,
            pools: InternPools::with_budget(options.pool_budget),
            options,
            locales: LocaleArena::default(),
            tables,
            diagnostics,
            orphans: Vec::new(),
            documents: FxHashMap::default(),
        };

        let root = Target::from_stem("root");
        for layer in Layer::ALL.into_iter().filter(|l| l.is_required()) {
            let Some(path) = layer.path(&root, "root") else {
                continue;
            };
            if ctx.document(&path)?.is_none() {
                return Err(CompileError::MissingRootLayer { path });
            }
        }

        if let Some(english) = ctx.document(&format!("{LANGS_DIR}/en.xml"))? {
            ctx.tables.reference = ReferenceNames::from_document(&english);
        }
        Ok(ctx)
    }

    /// Load a document once per run.
    pub fn document(&mut self, path: &str) -> Result<Option<Rc<Document>>, CompileError> {
        if let Some(cached) = self.documents.get(path) {
            return Ok(cached.clone());
        }
        let loaded = self.source.load(path)?.map(Rc::new);
        tracing::trace!(path, found = loaded.is_some(), "document lookup");
        self.documents.insert(path.to_string(), loaded.clone());
        Ok(loaded)
    }

    pub fn report(&mut self, diag: Diagnostic) {
        self.diagnostics.report(diag);
    }

    pub fn into_compilation(self) -> Compilation {
        Compilation {
            locales: self.locales,
            pools: self.pools,
            tables: self.tables,
            diagnostics: self.diagnostics,
            orphans: self.orphans,
        }
    }
}

/// Everything a run produced, ready for region resolution and emission.
pub struct Compilation {
    pub locales: LocaleArena,
    pub pools: InternPools,
    pub tables: SideTables,
    pub diagnostics: DiagnosticQueue,
    pub orphans: Vec<Orphan>,
}
