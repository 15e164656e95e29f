//! Which locales a run compiles, and where each one's layers live.

use std::fmt;

use locc_markup::MarkupSource;

use crate::{CompileError, CompileOptions};

pub const LANGS_DIR: &str = "langs";
pub const LOCALES_DIR: &str = "locales";
pub const SUPPLEMENTAL_DIR: &str = "supp";
pub const ROOT_STEM: &str = "root";

/// A locale to compile, named by its source stem.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    pub stem: String,
    /// Neutral targets name a language only and live under `langs/`.
    pub neutral: bool,
}

impl Target {
    /// Classify a stem: `lang` is neutral, `lang_TERR` and
    /// `lang_Script_TERR` are specific.
    pub fn from_stem(stem: impl Into<String>) -> Self {
        let stem = stem.into();
        let neutral = !stem.contains('_');
        Target { stem, neutral }
    }

    /// Path of the target's own source document.
    pub fn source_path(&self) -> String {
        let dir = if self.neutral { LANGS_DIR } else { LOCALES_DIR };
        format!("{dir}/{}.xml", self.stem)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stem)
    }
}

/// Merge layers in application order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Layer {
    Root,
    SupplementalRoot,
    Language,
    SupplementalLanguage,
    Locale,
    SupplementalLocale,
}

impl Layer {
    pub const ALL: [Layer; 6] = [
        Layer::Root,
        Layer::SupplementalRoot,
        Layer::Language,
        Layer::SupplementalLanguage,
        Layer::Locale,
        Layer::SupplementalLocale,
    ];

    pub fn is_required(self) -> bool {
        matches!(self, Layer::Root | Layer::SupplementalRoot)
    }

    /// Document path for this layer, or `None` when the layer does not
    /// apply to the target.
    pub fn path(self, target: &Target, language: &str) -> Option<String> {
        match self {
            Layer::Root => Some(format!("{LANGS_DIR}/{ROOT_STEM}.xml")),
            Layer::SupplementalRoot => Some(format!("{SUPPLEMENTAL_DIR}/{ROOT_STEM}.xml")),
            Layer::Language => Some(format!("{LANGS_DIR}/{language}.xml")),
            Layer::SupplementalLanguage => Some(format!("{SUPPLEMENTAL_DIR}/{language}.xml")),
            // A neutral target's own document already is its language layer.
            Layer::Locale if target.neutral => None,
            Layer::SupplementalLocale if target.neutral => None,
            Layer::Locale => Some(format!("{LOCALES_DIR}/{}.xml", target.stem)),
            Layer::SupplementalLocale => Some(format!("{SUPPLEMENTAL_DIR}/{}.xml", target.stem)),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layer::Root => "root",
            Layer::SupplementalRoot => "supplemental root",
            Layer::Language => "language",
            Layer::SupplementalLanguage => "supplemental language",
            Layer::Locale => "locale",
            Layer::SupplementalLocale => "supplemental locale",
        };
        f.write_str(name)
    }
}

/// Every neutral target (`langs/*` except root), then every specific one
/// (`locales/*`), each in ordinal order. A non-empty filter replaces the
/// discovered list; each named target must have a source document.
pub fn discover_targets(
    source: &dyn MarkupSource,
    options: &CompileOptions,
) -> Result<Vec<Target>, CompileError> {
    if !options.locales.is_empty() {
        let mut targets: Vec<Target> = options.locales.iter().map(Target::from_stem).collect();
        targets.sort_by(|a, b| b.neutral.cmp(&a.neutral).then_with(|| a.stem.cmp(&b.stem)));
        targets.dedup();
        return Ok(targets);
    }

    let neutral = source
        .list(LANGS_DIR)?
        .into_iter()
        .filter(|stem| stem != ROOT_STEM)
        .map(|stem| Target { stem, neutral: true });
    let specific = source
        .list(LOCALES_DIR)?
        .into_iter()
        .map(|stem| Target {
            stem,
            neutral: false,
        });
    Ok(neutral.chain(specific).collect())
}

#[cfg(test)]
mod tests;
