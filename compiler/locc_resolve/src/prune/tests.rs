#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use locc_markup::MemorySource;
use pretty_assertions::assert_eq;

use super::*;
use crate::test_support::fixture;
use crate::{compile_all, CompileOptions};

fn with_neutral_orphan() -> MemorySource {
    fixture().with(
        "langs/zz.xml",
        r#"<ldml><identity><language type="zz"/></identity></ldml>"#,
    )
}

fn orphans(source: &MemorySource) -> Vec<Orphan> {
    compile_all(source, CompileOptions::default()).unwrap().orphans
}

#[test]
fn test_prune_removes_specific_orphans() {
    let mut source = with_neutral_orphan();
    let orphans = orphans(&source);
    let report = prune_orphan_sources(&mut source, &orphans, false).unwrap();

    assert_eq!(report.removed, vec!["locales/xx_YY.xml"]);
    assert_eq!(report.kept, vec!["langs/zz.xml"]);
    assert!(!source.contains("locales/xx_YY.xml"));
    assert!(source.contains("langs/zz.xml"));
}

#[test]
fn test_dry_run_touches_nothing() {
    let mut source = with_neutral_orphan();
    let orphans = orphans(&source);
    let report = prune_orphan_sources(&mut source, &orphans, true).unwrap();

    assert_eq!(report.removed, vec!["locales/xx_YY.xml"]);
    assert!(source.contains("locales/xx_YY.xml"));
}

#[test]
fn test_prune_is_idempotent() {
    let mut source = fixture();
    let orphans = orphans(&source);
    prune_orphan_sources(&mut source, &orphans, false).unwrap();
    let again = prune_orphan_sources(&mut source, &orphans, false).unwrap();
    assert_eq!(again, PruneReport::default());

    let after = compile_all(&source, CompileOptions::default()).unwrap();
    assert!(after.orphans.is_empty());
    assert!(!after.diagnostics.has_errors());
}
