//! The `explain` command: display documentation for diagnostic codes.

use locc_diagnostic::{ErrorCode, ErrorDocs};

/// Display detailed documentation for a given code string.
pub fn explain_error(code_str: &str) {
    let Some(code) = code_str.parse::<ErrorCode>().ok() else {
        eprintln!("Unknown diagnostic code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX (exclusions) or WXXXX (warnings).");
        let known: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        eprintln!("Known codes: {}", known.join(", "));
        std::process::exit(1);
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
    } else {
        println!("{code}: {}", code.description());
    }
}
