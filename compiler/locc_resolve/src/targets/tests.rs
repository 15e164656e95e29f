#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;
use crate::test_support::fixture;

#[test]
fn test_classify_stems() {
    assert!(Target::from_stem("es").neutral);
    assert!(!Target::from_stem("es_ES").neutral);
    assert!(!Target::from_stem("zh_Hant_TW").neutral);
    assert_eq!(Target::from_stem("es").source_path(), "langs/es.xml");
    assert_eq!(Target::from_stem("es_ES").source_path(), "locales/es_ES.xml");
}

#[test]
fn test_layer_paths() {
    let specific = Target::from_stem("es_ES");
    let paths: Vec<_> = Layer::ALL
        .into_iter()
        .filter_map(|layer| layer.path(&specific, "es"))
        .collect();
    assert_eq!(
        paths,
        vec![
            "langs/root.xml",
            "supp/root.xml",
            "langs/es.xml",
            "supp/es.xml",
            "locales/es_ES.xml",
            "supp/es_ES.xml",
        ]
    );

    let neutral = Target::from_stem("es");
    let count = Layer::ALL
        .into_iter()
        .filter_map(|layer| layer.path(&neutral, "es"))
        .count();
    assert_eq!(count, 4);
}

#[test]
fn test_discover_neutral_first() {
    let source = fixture();
    let targets = discover_targets(&source, &CompileOptions::default()).unwrap();
    let stems: Vec<_> = targets.iter().map(|t| t.stem.as_str()).collect();
    assert_eq!(stems, vec!["en", "es", "en_US", "es_AQ", "es_ES", "xx_YY"]);
}

#[test]
fn test_filter_replaces_discovery() {
    let source = fixture();
    let options = CompileOptions {
        locales: vec!["es_ES".to_string(), "es".to_string(), "es_ES".to_string()],
        ..CompileOptions::default()
    };
    let targets = discover_targets(&source, &options).unwrap();
    assert_eq!(
        targets,
        vec![Target::from_stem("es"), Target::from_stem("es_ES")]
    );
}
