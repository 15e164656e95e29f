//! End-to-end runs over a locale tree on disk.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::fs;
use std::path::Path;
use std::process::Command;

use locc::{compile_tree, prune_tree};
use locc_diagnostic::ErrorCode;
use locc_ir::{PoolError, PoolKind, POOL_BUDGET};
use locc_resolve::{CompileError, CompileOptions};
use pretty_assertions::{assert_eq, assert_ne};
use tempfile::TempDir;

const LCIDS: &str = r#"<lcids>
  <lcid name="en" id="0x0009" iso2="en" iso3="eng" win="ENU"/>
  <lcid name="en-US" id="0x0409" parent="0x0009" iso2="en" iso3="eng" win="ENU"/>
  <lcid name="fr" id="0x000C" iso2="fr" iso3="fra" win="FRA"/>
  <lcid name="fr-FR" id="0x040C" parent="0x000C" iso2="fr" iso3="fra" win="FRA"/>
</lcids>"#;

const ROOT: &str = r#"<ldml><dates><calendars><calendar type="gregorian">
  <dayNames>
    <day>Sunday</day><day>Monday</day><day>Tuesday</day><day>Wednesday</day>
    <day>Thursday</day><day>Friday</day><day>Saturday</day>
  </dayNames>
  <dateFormats>
    <dateFormatLength type="short"><dateFormat><pattern>M/d/yyyy</pattern></dateFormat></dateFormatLength>
  </dateFormats>
</calendar></calendars></dates>
<numbers><symbols><decimal>.</decimal></symbols></numbers></ldml>"#;

const EN: &str = r#"<ldml><localeDisplayNames>
  <languages><language type="en">English</language><language type="fr">French</language></languages>
  <territories><territory type="US">United States</territory><territory type="FR">France</territory></territories>
</localeDisplayNames></ldml>"#;

const FR: &str = r#"<ldml><localeDisplayNames>
  <languages><language type="fr">français</language></languages>
  <territories><territory type="FR">France</territory></territories>
</localeDisplayNames>
<numbers><symbols><decimal>,</decimal></symbols></numbers></ldml>"#;

const FR_FR: &str = r#"<ldml><identity><language type="fr"/><territory type="FR"/></identity>
<dates><calendars><calendar type="gregorian"><dateFormats>
  <dateFormatLength type="short"><dateFormat><pattern>dd/MM/yyyy</pattern></dateFormat></dateFormatLength>
</dateFormats></calendar></calendars></dates></ldml>"#;

fn write(root: &Path, path: &str, text: &str) {
    let path = root.join(path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "lcids.xml", LCIDS);
    write(root, "langs/root.xml", ROOT);
    write(root, "supp/root.xml", "<ldml/>");
    write(root, "langs/en.xml", EN);
    write(root, "langs/fr.xml", FR);
    write(
        root,
        "locales/en_US.xml",
        r#"<ldml><identity><language type="en"/><territory type="US"/></identity></ldml>"#,
    );
    write(root, "locales/fr_FR.xml", FR_FR);
    write(
        root,
        "locales/xx_YY.xml",
        r#"<ldml><identity><language type="xx"/><territory type="YY"/></identity></ldml>"#,
    );
    dir
}

/// Comments of the rows of the table declared by `symbol`.
fn row_names(text: &str, symbol: &str) -> Vec<String> {
    text.lines()
        .skip_while(|line| !line.contains(&format!(" {symbol} [] = {{")))
        .skip(1)
        .take_while(|line| *line != "};")
        .filter_map(|line| {
            let start = line.rfind("/* ")? + 3;
            let end = line.rfind(" */")?;
            Some(line[start..end].to_string())
        })
        .collect()
}

#[test]
fn test_build_drops_unmapped_locale() {
    let dir = tree();
    let outcome = compile_tree(dir.path(), CompileOptions::default()).unwrap();

    assert_eq!(outcome.excluded, 1);
    let excluded: Vec<_> = outcome
        .diagnostics
        .iter()
        .filter(|diag| diag.is_error())
        .map(|diag| (diag.code, diag.locale.clone()))
        .collect();
    assert_eq!(excluded, vec![(ErrorCode::E1001, Some("xx-YY".to_string()))]);

    let text = &outcome.artifact;
    assert!(text.starts_with("/* generated by locc; do not edit */\n"));
    assert!(text.contains("#define NUM_CULTURE_ENTRIES 4\n"));
    assert!(text.contains("#define NUM_REGION_ENTRIES 2\n"));
    assert_eq!(
        row_names(text, "culture_entries"),
        vec!["en", "fr", "en-US", "fr-FR"]
    );
    assert!(!text.contains("xx-YY"));
}

/// Byte offset of `entry` in the pool declared by `symbol`. Entries are
/// assumed to be plain ASCII.
fn pool_offset(text: &str, symbol: &str, entry: &str) -> usize {
    let mut offset = 0;
    for line in text
        .lines()
        .skip_while(|line| !line.contains(&format!(" {symbol} [] = {{")))
        .skip(1)
        .take_while(|line| *line != "};")
    {
        let literal = line.trim().trim_matches('"').trim_end_matches("\\0");
        if literal == entry {
            return offset;
        }
        offset += literal.len() + 1;
    }
    panic!("`{entry}` is not in {symbol}");
}

/// The short date pattern column of each date-time row.
fn short_date_offsets(text: &str) -> Vec<(String, usize)> {
    text.lines()
        .skip_while(|line| !line.contains(" datetime_format_entries [] = {"))
        .skip(1)
        .take_while(|line| *line != "};")
        .map(|line| {
            let fields = line.trim().trim_start_matches('{');
            let short_date = fields.split(", ").nth(1).unwrap().parse().unwrap();
            let start = line.rfind("/* ").unwrap() + 3;
            let end = line.rfind(" */").unwrap();
            (line[start..end].to_string(), short_date)
        })
        .collect()
}

#[test]
fn test_build_locale_layer_overrides_root() {
    let dir = tree();
    let text = compile_tree(dir.path(), CompileOptions::default())
        .unwrap()
        .artifact;
    let inherited = pool_offset(&text, "pattern_strings", "M/d/yyyy");
    let overridden = pool_offset(&text, "pattern_strings", "dd/MM/yyyy");
    assert_ne!(inherited, overridden);
    assert_eq!(
        short_date_offsets(&text),
        vec![
            ("en".to_string(), inherited),
            ("fr".to_string(), inherited),
            ("en-US".to_string(), inherited),
            ("fr-FR".to_string(), overridden),
        ]
    );
}

#[test]
fn test_build_is_deterministic() {
    let dir = tree();
    let first = compile_tree(dir.path(), CompileOptions::default()).unwrap();
    let second = compile_tree(dir.path(), CompileOptions::default()).unwrap();
    assert_eq!(first.artifact, second.artifact);
}

#[test]
fn test_build_locale_filter() {
    let dir = tree();
    let options = CompileOptions {
        locales: vec!["fr_FR".to_string(), "fr".to_string()],
        ..CompileOptions::default()
    };
    let outcome = compile_tree(dir.path(), options).unwrap();
    assert_eq!(outcome.excluded, 0);
    assert_eq!(
        row_names(&outcome.artifact, "culture_entries"),
        vec!["fr", "fr-FR"]
    );
}

#[test]
fn test_build_without_id_table_fails() {
    let dir = tree();
    fs::remove_file(dir.path().join("lcids.xml")).unwrap();
    assert!(compile_tree(dir.path(), CompileOptions::default()).is_err());
}

/// A root layer whose short date pattern alone is larger than a pool.
fn oversized_root() -> String {
    let literal = "x".repeat(POOL_BUDGET + 1);
    ROOT.replace("M/d/yyyy", &format!("M/d/yyyy '{literal}'"))
}

#[test]
fn test_pool_overflow_is_fatal() {
    let dir = tree();
    write(dir.path(), "langs/root.xml", &oversized_root());

    let err = compile_tree(dir.path(), CompileOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        CompileError::Pool(PoolError::Overflow { pool: PoolKind::Pattern, .. })
    ));
}

#[test]
fn test_pool_overflow_writes_no_artifact() {
    let dir = tree();
    write(dir.path(), "langs/root.xml", &oversized_root());
    let artifact = dir.path().join("culture-info-tables.h");

    let output = Command::new(env!("CARGO_BIN_EXE_locc"))
        .arg("build")
        .arg(dir.path())
        .arg("-o")
        .arg(&artifact)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("string pool exceeded its budget"));
    assert!(!artifact.exists());
}

#[test]
fn test_build_command_writes_artifact() {
    let dir = tree();
    let artifact = dir.path().join("culture-info-tables.h");

    let output = Command::new(env!("CARGO_BIN_EXE_locc"))
        .arg("build")
        .arg(dir.path())
        .arg("-o")
        .arg(&artifact)
        .arg("--color=never")
        .output()
        .unwrap();

    assert!(output.status.success());
    let expected = compile_tree(dir.path(), CompileOptions::default())
        .unwrap()
        .artifact;
    assert_eq!(fs::read_to_string(&artifact).unwrap(), expected);
}

#[test]
fn test_prune_removes_orphan_sources() {
    let dir = tree();
    let orphan = dir.path().join("locales/xx_YY.xml");

    let report = prune_tree(dir.path(), CompileOptions::default(), true).unwrap();
    assert_eq!(report.removed, vec!["locales/xx_YY.xml"]);
    assert!(orphan.exists());

    let report = prune_tree(dir.path(), CompileOptions::default(), false).unwrap();
    assert_eq!(report.removed, vec!["locales/xx_YY.xml"]);
    assert!(!orphan.exists());

    let report = prune_tree(dir.path(), CompileOptions::default(), false).unwrap();
    assert!(report.removed.is_empty());

    let outcome = compile_tree(dir.path(), CompileOptions::default()).unwrap();
    assert_eq!(outcome.excluded, 0);
}
