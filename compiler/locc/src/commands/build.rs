//! The `build` command: compile an input tree into C tables.

use std::fs;
use std::path::PathBuf;

use locc_diagnostic::ColorMode;
use locc_resolve::CompileOptions;

use super::{parse_color, report_diagnostics};
use crate::compile_tree;

/// Build options parsed from command line arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Root of the input tree.
    pub input: PathBuf,
    /// Output file (-o); stdout when absent.
    pub output: Option<PathBuf>,
    /// Display language (--lang) and target filter (--locale).
    pub compile: CompileOptions,
    /// Only report exclusions (--quiet, -q)
    pub quiet: bool,
    /// Diagnostic coloring (--color=<mode>)
    pub color: ColorMode,
}

/// Parse the arguments after `build`.
pub fn parse_build_options(args: &[String]) -> Result<BuildOptions, String> {
    let mut options = BuildOptions::default();
    let mut input = None;
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-o" {
            let path = args.get(i + 1).ok_or("-o needs a file path")?;
            options.output = Some(PathBuf::from(path));
            i += 2;
            continue;
        }
        if let Some(lang) = arg.strip_prefix("--lang=") {
            options.compile.display_language = lang.to_string();
        } else if let Some(stem) = arg.strip_prefix("--locale=") {
            options.compile.locales.push(stem.to_string());
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            options.color = parse_color(mode).ok_or_else(|| format!("unknown color mode '{mode}'"))?;
        } else if arg == "--quiet" || arg == "-q" {
            options.quiet = true;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if input.is_none() {
            input = Some(PathBuf::from(arg));
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
        i += 1;
    }
    options.input = input.ok_or("missing input directory")?;
    Ok(options)
}

/// Compile and write the tables. Nothing is written unless every stage
/// succeeds.
pub fn build_locales(options: &BuildOptions) {
    crate::init_tracing();
    let outcome = match compile_tree(&options.input, options.compile.clone()) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    report_diagnostics(&outcome, options.color, options.quiet);

    match &options.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &outcome.artifact) {
                eprintln!("error: cannot write {}: {e}", path.display());
                std::process::exit(1);
            }
        }
        None => print!("{}", outcome.artifact),
    }
}

#[cfg(test)]
mod tests;
