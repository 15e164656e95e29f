#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_parse_defaults() {
    let options = parse_build_options(&args(&["data"])).unwrap();
    assert_eq!(options.input, PathBuf::from("data"));
    assert_eq!(options.output, None);
    assert_eq!(options.compile, CompileOptions::default());
    assert!(!options.quiet);
}

#[test]
fn test_parse_all_options() {
    let options = parse_build_options(&args(&[
        "--lang=fr",
        "data",
        "-o",
        "out/culture-info-tables.h",
        "--locale=fr_FR",
        "--locale=fr",
        "-q",
        "--color=never",
    ]))
    .unwrap();
    assert_eq!(options.input, PathBuf::from("data"));
    assert_eq!(options.output, Some(PathBuf::from("out/culture-info-tables.h")));
    assert_eq!(options.compile.display_language, "fr");
    assert_eq!(options.compile.locales, vec!["fr_FR", "fr"]);
    assert!(options.quiet);
    assert_eq!(options.color, ColorMode::Never);
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        parse_build_options(&args(&[])).unwrap_err(),
        "missing input directory"
    );
    assert_eq!(
        parse_build_options(&args(&["data", "-o"])).unwrap_err(),
        "-o needs a file path"
    );
    assert_eq!(
        parse_build_options(&args(&["data", "--fast"])).unwrap_err(),
        "unknown option '--fast'"
    );
    assert_eq!(
        parse_build_options(&args(&["data", "more"])).unwrap_err(),
        "unexpected argument 'more'"
    );
    assert_eq!(
        parse_build_options(&args(&["data", "--color=rainbow"])).unwrap_err(),
        "unknown color mode 'rainbow'"
    );
}
