use locc_ir::PoolError;
use locc_markup::MarkupError;
use thiserror::Error;

/// Conditions that abort a compilation run. No output is written.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("required root layer {path} is missing")]
    MissingRootLayer { path: String },

    #[error("source document {path} for locale `{stem}` is missing")]
    MissingSource { stem: String, path: String },

    #[error("required side table {path} is missing")]
    MissingSideTable { path: String },
}
