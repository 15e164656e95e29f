//! Locale Data Compiler CLI

use locc::commands::{
    build_locales, explain_error, parse_build_options, parse_prune_options, prune_locales,
    PRUNE_USAGE,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "build" => {
            if args.len() < 3 {
                eprintln!("Usage: locc build <input-dir> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  -o <file>           Output file (default: stdout)");
                eprintln!("  --lang=<code>       Display-name language (default: en)");
                eprintln!("  --locale=<stem>     Only compile this locale (repeatable)");
                eprintln!("  -q, --quiet         Only report excluded locales");
                eprintln!("  --color=<mode>      Colors: auto, always, never");
                std::process::exit(1);
            }
            let options = match parse_build_options(&args[2..]) {
                Ok(options) => options,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            };
            build_locales(&options);
        }
        "prune" => {
            if args.len() < 3 {
                eprintln!("{PRUNE_USAGE}");
                std::process::exit(1);
            }
            let options = match parse_prune_options(&args[2..]) {
                Ok(options) => options,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            };
            prune_locales(&options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("locc {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: locc explain <CODE>");
                eprintln!("Example: locc explain E1001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Locale Data Compiler");
    println!();
    println!("Usage: locc <command> [options]");
    println!();
    println!("Commands:");
    println!("  build <input-dir>    Compile locale markup into C tables");
    println!("  prune <input-dir>    Delete sources of locales without a numeric id");
    println!("  explain <code>       Explain a diagnostic code (e.g., W2004)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Build options:");
    println!("  -o <file>           Output file (default: stdout)");
    println!("  --lang=<code>       Display-name language (default: en)");
    println!("  --locale=<stem>     Only compile this locale (repeatable)");
    println!("  -q, --quiet         Only report excluded locales");
    println!("  --color=<mode>      Colors: auto, always, never");
    println!();
    println!("Prune options:");
    println!("  --lang=<code>       Display-name language (default: en)");
    println!("  --dry-run, -n       List files without deleting them");
    println!("  Language-only locales without an id are listed as kept, never deleted.");
    println!();
    println!("Environment:");
    println!("  LOCC_LOG            Tracing filter (falls back to RUST_LOG)");
    println!();
    println!("Examples:");
    println!("  locc build data -o culture-info-tables.h");
    println!("  locc build data --locale=fr --locale=fr_FR");
    println!("  locc prune data --dry-run");
    println!("  locc explain E1001");
}
