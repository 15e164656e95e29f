//! The `prune` command: delete sources of locales without a numeric id.
//!
//! Only territory-specific sources are deleted. A language-only source is
//! also the language layer of every locale in that language, so it is
//! reported as kept and left on disk.

use std::path::PathBuf;

use locc_resolve::CompileOptions;

use crate::prune_tree;

/// Usage text printed when `prune` is run without an input directory.
pub const PRUNE_USAGE: &str = "\
Usage: locc prune <input-dir> [--lang=<code>] [--dry-run]

Deletes the sources of territory-specific locales that have no numeric id.
Language-only locales without an id are listed as kept and never deleted,
since their file is the language layer of other locales.

Options:
  --lang=<code>       Display-name language (default: en)
  --dry-run, -n       List files without deleting them";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PruneOptions {
    pub input: PathBuf,
    pub compile: CompileOptions,
    /// List what would be removed without deleting (--dry-run)
    pub dry_run: bool,
}

/// Parse the arguments after `prune`.
pub fn parse_prune_options(args: &[String]) -> Result<PruneOptions, String> {
    let mut options = PruneOptions::default();
    let mut input = None;
    for arg in args {
        if let Some(lang) = arg.strip_prefix("--lang=") {
            options.compile.display_language = lang.to_string();
        } else if arg == "--dry-run" || arg == "-n" {
            options.dry_run = true;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if input.is_none() {
            input = Some(PathBuf::from(arg));
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }
    options.input = input.ok_or("missing input directory")?;
    Ok(options)
}

pub fn prune_locales(options: &PruneOptions) {
    crate::init_tracing();
    let report = match prune_tree(&options.input, options.compile.clone(), options.dry_run) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let verb = if options.dry_run { "would remove" } else { "removed" };
    for path in &report.removed {
        println!("{verb} {path}");
    }
    for path in &report.kept {
        println!("kept {path} (language-only locale)");
    }
    if report.removed.is_empty() && report.kept.is_empty() {
        println!("nothing to prune");
    }
}
