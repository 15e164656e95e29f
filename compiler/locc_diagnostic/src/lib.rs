//! Diagnostic system for the locale compiler.
//!
//! Nothing short of a fatal error stops a compilation run. Everything the
//! pipeline skips or drops along the way is reported as a [`Diagnostic`]:
//! - an error code for searchability (`locc explain <CODE>`)
//! - a message saying what went wrong
//! - the locale it concerns, when there is one
//! - notes with the values involved
//!
//! Diagnostics are collected in a [`DiagnosticQueue`] for the whole run and
//! rendered at the end by an emitter.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use queue::DiagnosticQueue;
