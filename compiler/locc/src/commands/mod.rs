//! Command handlers for the `locc` CLI.
//!
//! Each submodule implements one command. Handlers print their results and
//! exit the process with status 1 on a fatal error.

use std::io::IsTerminal;

use locc_diagnostic::{ColorMode, DiagnosticEmitter, TerminalEmitter};

use crate::BuildOutcome;

pub mod build;
mod explain;
mod prune;

pub use build::{build_locales, parse_build_options, BuildOptions};
pub use explain::explain_error;
pub use prune::{parse_prune_options, prune_locales, PruneOptions, PRUNE_USAGE};

/// Parse `--color=<mode>`.
pub(crate) fn parse_color(value: &str) -> Option<ColorMode> {
    match value {
        "auto" => Some(ColorMode::Auto),
        "always" => Some(ColorMode::Always),
        "never" => Some(ColorMode::Never),
        _ => None,
    }
}

/// Render a run's diagnostics to stderr, followed by the summary line.
///
/// With `quiet`, warnings are left out; exclusions are always shown.
pub(crate) fn report_diagnostics(outcome: &BuildOutcome, color: ColorMode, quiet: bool) {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::<std::io::Stderr>::stderr(color, is_tty);
    for diag in &outcome.diagnostics {
        if quiet && !diag.is_error() {
            continue;
        }
        emitter.emit(diag);
    }
    emitter.emit_summary(outcome.excluded, outcome.warnings);
    emitter.flush();
}
